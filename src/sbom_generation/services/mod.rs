mod bazel_query_parser;
mod component_extractor;
mod label_matcher;
mod sbom_projector;

pub use bazel_query_parser::BazelQueryParser;
pub use component_extractor::ComponentExtractor;
pub use label_matcher::{LabelMatcher, SuffixLabelMatcher};
pub use sbom_projector::{SbomProjector, TIMESTAMP_FORMAT};
