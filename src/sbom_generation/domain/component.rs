use super::MavenCoordinates;

/// Component type for every extracted jar
pub const LIBRARY_COMPONENT_TYPE: &str = "library";

/// Component value object: one Maven library found in the Bazel graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    coordinates: MavenCoordinates,
    purl: String,
}

impl Component {
    pub fn new(coordinates: MavenCoordinates) -> Self {
        let purl = coordinates.purl();
        Self { coordinates, purl }
    }

    pub fn component_type(&self) -> &'static str {
        LIBRARY_COMPONENT_TYPE
    }

    /// Artifact id; CycloneDX `name`
    pub fn name(&self) -> &str {
        self.coordinates.artifact()
    }

    pub fn group(&self) -> &str {
        self.coordinates.group()
    }

    pub fn version(&self) -> &str {
        self.coordinates.version()
    }

    pub fn purl(&self) -> &str {
        &self.purl
    }

    pub fn coordinates(&self) -> &MavenCoordinates {
        &self.coordinates
    }
}
