use super::{BazelQueryParser, LabelMatcher, SuffixLabelMatcher};
use crate::sbom_generation::domain::{BazelDependencyGraph, BazelRule, Component, DependencyEdge};

/// ComponentExtractor service for deriving Maven components from Bazel rules
///
/// This service contains pure business logic: no I/O, and per-rule anomalies
/// never fail the extraction. A rule that cannot be interpreted simply
/// contributes nothing.
pub struct ComponentExtractor<M = SuffixLabelMatcher> {
    matcher: M,
}

impl ComponentExtractor<SuffixLabelMatcher> {
    pub fn new() -> Self {
        Self {
            matcher: SuffixLabelMatcher,
        }
    }
}

impl Default for ComponentExtractor<SuffixLabelMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: LabelMatcher> ComponentExtractor<M> {
    /// Creates an extractor resolving dependency labels with `matcher`
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    /// Parses query XML and extracts components, then dependency edges
    ///
    /// # Errors
    /// Returns the XML parser error if the document is not well-formed
    pub fn extract(&self, xml: &str) -> Result<BazelDependencyGraph, roxmltree::Error> {
        let rules = BazelQueryParser::parse(xml)?;
        Ok(self.extract_from_rules(&rules))
    }

    pub fn extract_from_rules(&self, rules: &[BazelRule]) -> BazelDependencyGraph {
        let components = Self::extract_components(rules);
        let dependencies = self.extract_dependencies(rules, &components);
        BazelDependencyGraph::new(components, dependencies)
    }

    /// Extracts one component per `jvm_import` rule with valid coordinates
    ///
    /// Document order is kept and duplicates are not removed.
    pub fn extract_components(rules: &[BazelRule]) -> Vec<Component> {
        rules
            .iter()
            .filter(|rule| rule.is_jvm_import())
            .filter_map(|rule| {
                if rule.tags.is_none() {
                    tracing::debug!(rule = %rule.name, "skipping jvm_import without tags");
                    return None;
                }
                match rule.maven_coordinates() {
                    Some(coordinates) => Some(Component::new(coordinates)),
                    None => {
                        tracing::debug!(
                            rule = %rule.name,
                            "skipping jvm_import without usable maven_coordinates"
                        );
                        None
                    }
                }
            })
            .collect()
    }

    /// Builds dependency edges between already extracted components
    ///
    /// Only `@maven//` rules with a deps list and resolvable coordinates are
    /// considered, and only their `@maven//` deps. A rule whose deps resolve
    /// to nothing produces no edge at all.
    pub fn extract_dependencies(
        &self,
        rules: &[BazelRule],
        components: &[Component],
    ) -> Vec<DependencyEdge> {
        let mut dependencies = Vec::new();

        for rule in rules.iter().filter(|rule| rule.is_jvm_import()) {
            if rule.deps.is_none() || !rule.is_in_maven_repository() {
                continue;
            }
            let Some(coordinates) = rule.maven_coordinates() else {
                continue;
            };

            let depends_on: Vec<String> = rule
                .maven_deps()
                .flat_map(|label| self.matcher.resolve(label, components))
                .collect();

            if depends_on.is_empty() {
                tracing::debug!(rule = %rule.name, "no dependency label resolved to a component");
                continue;
            }

            dependencies.push(DependencyEdge::new(coordinates.purl(), depends_on));
        }

        dependencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_vec(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn jvm_import(name: &str, tags: Option<&[&str]>, deps: Option<&[&str]>) -> BazelRule {
        BazelRule::new("jvm_import", name, tags.map(to_vec), deps.map(to_vec))
    }

    fn guava_rules() -> Vec<BazelRule> {
        vec![
            jvm_import(
                "@maven//:com_google_guava_guava",
                Some(&["maven_coordinates=com.google.guava:guava:31.1-jre"]),
                Some(&[
                    "@maven//:com_google_guava_failureaccess",
                    "@maven//:com_google_code_findbugs_jsr305",
                ]),
            ),
            jvm_import(
                "@maven//:com_google_guava_failureaccess",
                Some(&["maven_coordinates=com.google.guava:failureaccess:1.0.1"]),
                Some(&[]),
            ),
            jvm_import(
                "@maven//:com_google_code_findbugs_jsr305",
                Some(&["maven_coordinates=com.google.code.findbugs:jsr305:3.0.2"]),
                Some(&[]),
            ),
        ]
    }

    #[test]
    fn test_extract_components_one_per_rule() {
        let components = ComponentExtractor::<SuffixLabelMatcher>::extract_components(&guava_rules());

        assert_eq!(components.len(), 3);
        assert_eq!(components[0].name(), "guava");
        assert_eq!(components[1].name(), "failureaccess");
        assert_eq!(components[2].name(), "jsr305");
        for component in &components {
            assert_eq!(
                component.purl(),
                format!(
                    "pkg:maven/{}/{}@{}",
                    component.group(),
                    component.name(),
                    component.version()
                )
            );
        }
    }

    #[test]
    fn test_extract_components_ignores_other_classes() {
        let rules = vec![BazelRule::new(
            "java_library",
            "//app:lib",
            Some(vec!["maven_coordinates=com.example:app:1.0".to_string()]),
            None,
        )];
        assert!(ComponentExtractor::<SuffixLabelMatcher>::extract_components(&rules).is_empty());
    }

    #[test]
    fn test_rule_without_tags_contributes_nothing() {
        let rules = vec![jvm_import(
            "@maven//:com_google_guava_guava",
            None,
            Some(&["@maven//:com_google_guava_failureaccess"]),
        )];
        let graph = ComponentExtractor::new().extract_from_rules(&rules);

        assert_eq!(graph.component_count(), 0);
        assert_eq!(graph.dependency_count(), 0);
    }

    #[test]
    fn test_malformed_coordinates_skipped() {
        let rules = vec![
            jvm_import(
                "@maven//:broken",
                Some(&["maven_coordinates=com.example:broken"]),
                None,
            ),
            jvm_import(
                "@maven//:org_slf4j_slf4j_api",
                Some(&["maven_coordinates=org.slf4j:slf4j-api:2.0.9"]),
                None,
            ),
        ];
        let components = ComponentExtractor::<SuffixLabelMatcher>::extract_components(&rules);

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name(), "slf4j-api");
    }

    #[test]
    fn test_duplicate_coordinates_are_kept() {
        let tags: &[&str] = &["maven_coordinates=com.google.guava:guava:31.1-jre"];
        let rules = vec![
            jvm_import("@maven//:com_google_guava_guava", Some(tags), None),
            jvm_import("@maven//:com_google_guava_guava", Some(tags), None),
        ];
        let components = ComponentExtractor::<SuffixLabelMatcher>::extract_components(&rules);

        assert_eq!(components.len(), 2);
        assert_eq!(components[0], components[1]);
    }

    #[test]
    fn test_extract_dependencies_resolves_labels() {
        let graph = ComponentExtractor::new().extract_from_rules(&guava_rules());

        assert_eq!(graph.dependency_count(), 1);
        let edge = &graph.dependencies()[0];
        assert_eq!(edge.bom_ref(), "pkg:maven/com.google.guava/guava@31.1-jre");
        assert_eq!(
            edge.depends_on(),
            [
                "pkg:maven/com.google.guava/failureaccess@1.0.1".to_string(),
                "pkg:maven/com.google.code.findbugs/jsr305@3.0.2".to_string(),
            ]
        );
    }

    #[test]
    fn test_edges_only_reference_extracted_purls() {
        let graph = ComponentExtractor::new().extract_from_rules(&guava_rules());
        let purls: Vec<&str> = graph.components().iter().map(|c| c.purl()).collect();

        for edge in graph.dependencies() {
            assert!(purls.contains(&edge.bom_ref()));
            assert!(!edge.depends_on().is_empty());
            for target in edge.depends_on() {
                assert!(purls.contains(&target.as_str()));
            }
        }
    }

    #[test]
    fn test_unresolved_deps_produce_no_edge() {
        let rules = vec![jvm_import(
            "@maven//:com_google_guava_guava",
            Some(&["maven_coordinates=com.google.guava:guava:31.1-jre"]),
            Some(&["@maven//:org_checkerframework_checker_qual"]),
        )];
        let graph = ComponentExtractor::new().extract_from_rules(&rules);

        assert_eq!(graph.component_count(), 1);
        assert!(graph.dependencies().is_empty());
    }

    #[test]
    fn test_non_maven_rule_name_produces_no_edge() {
        let mut rules = guava_rules();
        rules[0].name = "@other//:com_google_guava_guava".to_string();
        let graph = ComponentExtractor::new().extract_from_rules(&rules);

        assert_eq!(graph.component_count(), 3);
        assert_eq!(graph.dependency_count(), 0);
    }

    #[test]
    fn test_non_maven_dep_labels_ignored() {
        let rules = vec![
            jvm_import(
                "@maven//:com_google_guava_guava",
                Some(&["maven_coordinates=com.google.guava:guava:31.1-jre"]),
                Some(&["//third_party:failureaccess"]),
            ),
            jvm_import(
                "@maven//:com_google_guava_failureaccess",
                Some(&["maven_coordinates=com.google.guava:failureaccess:1.0.1"]),
                None,
            ),
        ];
        let graph = ComponentExtractor::new().extract_from_rules(&rules);
        assert_eq!(graph.dependency_count(), 0);
    }

    #[test]
    fn test_malformed_coordinates_with_deps_skipped() {
        let rules = vec![
            jvm_import(
                "@maven//:com_google_guava_guava",
                Some(&["maven_coordinates=com.google.guava:guava"]),
                Some(&["@maven//:com_google_guava_failureaccess"]),
            ),
            jvm_import(
                "@maven//:com_google_guava_failureaccess",
                Some(&["maven_coordinates=com.google.guava:failureaccess:1.0.1"]),
                None,
            ),
        ];
        let graph = ComponentExtractor::new().extract_from_rules(&rules);

        assert_eq!(graph.component_count(), 1);
        assert_eq!(graph.dependency_count(), 0);
    }

    struct ExactLabelMatcher;

    impl LabelMatcher for ExactLabelMatcher {
        fn matches(&self, label: &str, component: &Component) -> bool {
            let target = format!(
                "@maven//:{}_{}",
                component.group().replace('.', "_"),
                component.name().replace('-', "_")
            );
            label == target
        }
    }

    #[test]
    fn test_custom_matcher_replaces_suffix_rule() {
        let rules = vec![
            jvm_import(
                "@maven//:io_grpc_grpc_core",
                Some(&["maven_coordinates=io.grpc:grpc-core:1.58.0"]),
                Some(&["@maven//:io_grpc_grpc_api"]),
            ),
            jvm_import(
                "@maven//:io_grpc_grpc_api",
                Some(&["maven_coordinates=io.grpc:grpc-api:1.58.0"]),
                None,
            ),
            jvm_import(
                "@maven//:com_example_api",
                Some(&["maven_coordinates=com.example:api:1.0"]),
                None,
            ),
        ];

        let suffix = ComponentExtractor::new().extract_from_rules(&rules);
        assert_eq!(suffix.dependencies()[0].depends_on().len(), 2);

        let exact = ComponentExtractor::with_matcher(ExactLabelMatcher).extract_from_rules(&rules);
        assert_eq!(
            exact.dependencies()[0].depends_on(),
            ["pkg:maven/io.grpc/grpc-api@1.58.0".to_string()]
        );
    }

    #[test]
    fn test_extract_from_xml() {
        let xml = r#"<query version="2">
  <rule class="jvm_import" name="@maven//:com_google_guava_guava">
    <list name="tags"><string value="maven_coordinates=com.google.guava:guava:31.1-jre"/></list>
    <list name="deps"/>
  </rule>
</query>"#;
        let graph = ComponentExtractor::new().extract(xml).unwrap();

        assert_eq!(graph.component_count(), 1);
        assert_eq!(graph.dependency_count(), 0);
    }

    #[test]
    fn test_extract_malformed_xml() {
        assert!(ComponentExtractor::new().extract("<query>").is_err());
    }
}
