use serde::{Deserialize, Serialize};

/// CycloneDX schema versions this tool can emit
///
/// The set is closed: anything else is rejected when the value is parsed,
/// before any generation work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecVersion {
    #[default]
    #[serde(rename = "1.4")]
    V1_4,
    #[serde(rename = "1.5")]
    V1_5,
    #[serde(rename = "1.6")]
    V1_6,
}

impl SpecVersion {
    pub const ALL: [SpecVersion; 3] = [SpecVersion::V1_4, SpecVersion::V1_5, SpecVersion::V1_6];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecVersion::V1_4 => "1.4",
            SpecVersion::V1_5 => "1.5",
            SpecVersion::V1_6 => "1.6",
        }
    }
}

impl std::str::FromStr for SpecVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1.4" => Ok(SpecVersion::V1_4),
            "1.5" => Ok(SpecVersion::V1_5),
            "1.6" => Ok(SpecVersion::V1_6),
            _ => Err(format!(
                "Invalid CycloneDX version: {}. Please specify '1.4', '1.5' or '1.6'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
