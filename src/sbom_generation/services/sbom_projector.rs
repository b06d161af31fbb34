use crate::sbom_generation::domain::{
    BazelDependencyGraph, BomComponent, BomDependency, BomMetadata, CycloneDxBom, Evidence,
    Identity, Lifecycle, Property, SpecVersion, Tool,
};
use chrono::{DateTime, Utc};

/// Timestamp layout written to `metadata.timestamp`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// SbomProjector service for rendering an extracted graph as CycloneDX
///
/// Each schema version is a pure function of the previous version's
/// document: 1.5 extends 1.4, 1.6 extends 1.5. No document is mutated after
/// it has been returned.
pub struct SbomProjector;

impl SbomProjector {
    /// Generates a document for `version`, stamped with the current UTC time
    pub fn generate(graph: &BazelDependencyGraph, version: SpecVersion) -> CycloneDxBom {
        Self::generate_at(graph, version, Utc::now())
    }

    /// Generates a document for `version` with an explicit timestamp
    pub fn generate_at(
        graph: &BazelDependencyGraph,
        version: SpecVersion,
        timestamp: DateTime<Utc>,
    ) -> CycloneDxBom {
        let bom_1_4 = Self::project_1_4(graph, timestamp);
        match version {
            SpecVersion::V1_4 => bom_1_4,
            SpecVersion::V1_5 => Self::project_1_5(&bom_1_4),
            SpecVersion::V1_6 => Self::project_1_6(&Self::project_1_5(&bom_1_4)),
        }
    }

    /// Base document shared by every schema version
    pub fn project_1_4(graph: &BazelDependencyGraph, timestamp: DateTime<Utc>) -> CycloneDxBom {
        CycloneDxBom {
            bom_format: "CycloneDX".to_string(),
            spec_version: SpecVersion::V1_4,
            version: 1,
            metadata: BomMetadata {
                timestamp: Self::format_timestamp(timestamp),
                tools: vec![Tool {
                    vendor: "Bazel".to_string(),
                    name: "java-maven".to_string(),
                }],
                lifecycles: None,
                properties: None,
            },
            components: graph
                .components()
                .iter()
                .map(|component| BomComponent {
                    component_type: component.component_type().to_string(),
                    name: component.name().to_string(),
                    group: component.group().to_string(),
                    version: component.version().to_string(),
                    purl: component.purl().to_string(),
                    evidence: None,
                    properties: None,
                })
                .collect(),
            dependencies: graph
                .dependencies()
                .iter()
                .map(|edge| BomDependency {
                    bom_ref: edge.bom_ref().to_string(),
                    depends_on: edge.depends_on().to_vec(),
                })
                .collect(),
        }
    }

    /// 1.4 plus the build lifecycle and identity evidence on every component
    pub fn project_1_5(base: &CycloneDxBom) -> CycloneDxBom {
        let mut bom = base.clone();
        bom.spec_version = SpecVersion::V1_5;
        bom.metadata.lifecycles = Some(vec![Lifecycle {
            phase: "build".to_string(),
        }]);
        for component in &mut bom.components {
            component.evidence = Some(Evidence {
                identity: Identity {
                    field: "maven-coordinate".to_string(),
                    confidence: 1.0,
                },
            });
        }
        bom
    }

    /// 1.5 plus build-system metadata and a Maven Central marker per component
    pub fn project_1_6(base: &CycloneDxBom) -> CycloneDxBom {
        let mut bom = base.clone();
        bom.spec_version = SpecVersion::V1_6;
        bom.metadata.properties = Some(vec![Property::new("build-system", "bazel")]);
        for component in &mut bom.components {
            component.properties = Some(vec![Property::new("maven-central", "true")]);
        }
        bom
    }

    pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
        timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
