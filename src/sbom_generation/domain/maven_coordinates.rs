/// Tag prefix Bazel's rules_jvm_external writes on every imported artifact
pub const MAVEN_COORDINATES_TAG_PREFIX: &str = "maven_coordinates=";

/// MavenCoordinates value object: `group:artifact:version`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenCoordinates {
    group: String,
    artifact: String,
    version: String,
}

impl MavenCoordinates {
    pub fn new(group: String, artifact: String, version: String) -> Self {
        Self {
            group,
            artifact,
            version,
        }
    }

    /// Finds coordinates in a rule's tag values
    ///
    /// Only the first tag carrying the `maven_coordinates=` prefix is
    /// considered, even when it turns out to be malformed.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Option<Self> {
        let tag = tags
            .iter()
            .map(|tag| tag.as_ref())
            .find(|tag| tag.starts_with(MAVEN_COORDINATES_TAG_PREFIX))?;
        Self::parse_tag(tag)
    }

    /// Parses a single `maven_coordinates=group:artifact:version` tag value
    ///
    /// The coordinate ends at the next `=` if there is one. Returns `None`
    /// for an empty coordinate or when it does not have exactly three parts.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let rest = tag.strip_prefix(MAVEN_COORDINATES_TAG_PREFIX)?;
        let coordinate = rest.split('=').next().unwrap_or_default();
        if coordinate.is_empty() {
            return None;
        }

        let parts: Vec<&str> = coordinate.split(':').collect();
        match parts.as_slice() {
            [group, artifact, version] => Some(Self::new(
                group.to_string(),
                artifact.to_string(),
                version.to_string(),
            )),
            _ => None,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Package URL in the `pkg:maven` namespace
    pub fn purl(&self) -> String {
        format!(
            "pkg:maven/{}/{}@{}",
            self.group, self.artifact, self.version
        )
    }
}

impl std::fmt::Display for MavenCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}
