/// Ports module defining the interfaces the application core depends on
///
/// Only outbound (driven) ports exist: the CLI drives the use cases directly.
pub mod outbound;
