/// Domain layer: Bazel query model, extraction and CycloneDX projection
///
/// Nothing in this module performs I/O.
pub mod domain;
pub mod services;
