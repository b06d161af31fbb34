use crate::sbom_generation::domain::Component;

/// Strategy for deciding whether a Bazel dependency label refers to a component
///
/// Bazel target names are derived from Maven coordinates by character
/// substitution, so there is no exact identifier to join on. Implementations
/// decide how loose that join is.
pub trait LabelMatcher {
    fn matches(&self, label: &str, component: &Component) -> bool;

    /// Purls of every component the label matches, in component order
    fn resolve(&self, label: &str, components: &[Component]) -> Vec<String> {
        components
            .iter()
            .filter(|component| self.matches(label, component))
            .map(|component| component.purl().to_string())
            .collect()
    }
}

/// Matches when the label ends with the artifact name, `-` replaced by `_`
///
/// This is a heuristic: `@maven//:com_google_guava_guava` matches artifact
/// `guava`, but so does any other label ending in `guava`. All matches are
/// kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixLabelMatcher;

impl LabelMatcher for SuffixLabelMatcher {
    fn matches(&self, label: &str, component: &Component) -> bool {
        label.ends_with(&component.name().replace('-', "_"))
    }
}
