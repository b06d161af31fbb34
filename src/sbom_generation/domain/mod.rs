pub mod bazel_rule;
pub mod component;
pub mod cyclonedx_bom;
pub mod dependency_graph;
pub mod maven_coordinates;
pub mod spec_version;

pub use bazel_rule::BazelRule;
pub use component::Component;
pub use cyclonedx_bom::{
    BomComponent, BomDependency, BomMetadata, CycloneDxBom, Evidence, Identity, Lifecycle,
    Property, Tool,
};
pub use dependency_graph::{BazelDependencyGraph, DependencyEdge};
pub use maven_coordinates::MavenCoordinates;
pub use spec_version::SpecVersion;
