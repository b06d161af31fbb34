use super::MavenCoordinates;

/// Rule class produced by rules_jvm_external for imported Maven jars
pub const JVM_IMPORT_CLASS: &str = "jvm_import";

/// Label prefix of targets living in the `@maven` external repository
pub const MAVEN_REPOSITORY_PREFIX: &str = "@maven//";

/// BazelRule represents one `<rule>` element of a `bazel query --output=xml` dump
///
/// `tags` and `deps` are `None` when the corresponding `<list>` element is
/// absent, which is different from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BazelRule {
    pub class: String,
    pub name: String,
    pub tags: Option<Vec<String>>,
    pub deps: Option<Vec<String>>,
}

impl BazelRule {
    pub fn new(
        class: impl Into<String>,
        name: impl Into<String>,
        tags: Option<Vec<String>>,
        deps: Option<Vec<String>>,
    ) -> Self {
        Self {
            class: class.into(),
            name: name.into(),
            tags,
            deps,
        }
    }

    pub fn is_jvm_import(&self) -> bool {
        self.class == JVM_IMPORT_CLASS
    }

    pub fn is_in_maven_repository(&self) -> bool {
        self.name.starts_with(MAVEN_REPOSITORY_PREFIX)
    }

    /// Coordinates from the rule's `maven_coordinates=` tag, if resolvable
    pub fn maven_coordinates(&self) -> Option<MavenCoordinates> {
        self.tags
            .as_deref()
            .and_then(MavenCoordinates::from_tags)
    }

    /// Dependency labels that point into the `@maven` repository
    pub fn maven_deps(&self) -> impl Iterator<Item = &str> {
        self.deps
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|label| label.starts_with(MAVEN_REPOSITORY_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_is_jvm_import() {
        let rule = BazelRule::new("jvm_import", "@maven//:x", None, None);
        assert!(rule.is_jvm_import());

        let rule = BazelRule::new("java_library", "//app:lib", None, None);
        assert!(!rule.is_jvm_import());
    }

    #[test]
    fn test_is_in_maven_repository() {
        assert!(BazelRule::new("jvm_import", "@maven//:a_b", None, None).is_in_maven_repository());
        assert!(!BazelRule::new("jvm_import", "@other//:a_b", None, None).is_in_maven_repository());
    }

    #[test]
    fn test_maven_coordinates_without_tags() {
        let rule = BazelRule::new("jvm_import", "@maven//:a_b", None, None);
        assert!(rule.maven_coordinates().is_none());
    }

    #[test]
    fn test_maven_coordinates_from_tags() {
        let rule = BazelRule::new(
            "jvm_import",
            "@maven//:com_google_guava_guava",
            tags(&["maven_coordinates=com.google.guava:guava:31.1-jre"]),
            None,
        );
        let coords = rule.maven_coordinates().unwrap();
        assert_eq!(coords.purl(), "pkg:maven/com.google.guava/guava@31.1-jre");
    }

    #[test]
    fn test_maven_deps_filters_other_repositories() {
        let rule = BazelRule::new(
            "jvm_import",
            "@maven//:x",
            None,
            Some(vec![
                "@maven//:com_google_guava_failureaccess".to_string(),
                "//third_party:shim".to_string(),
                "@bazel_tools//tools/jdk:toolchain".to_string(),
            ]),
        );
        let deps: Vec<&str> = rule.maven_deps().collect();
        assert_eq!(deps, vec!["@maven//:com_google_guava_failureaccess"]);
    }

    #[test]
    fn test_maven_deps_without_list() {
        let rule = BazelRule::new("jvm_import", "@maven//:x", None, None);
        assert_eq!(rule.maven_deps().count(), 0);
    }
}
