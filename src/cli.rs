use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bazel_sbom::sbom_generation::domain::SpecVersion;

/// Generate CycloneDX SBOMs for Bazel JVM projects and test them with Snyk
#[derive(Parser, Debug)]
#[command(name = "bazel-sbom")]
#[command(version)]
#[command(about = "Generate CycloneDX SBOMs from bazel query XML output", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./bazel-sbom.config.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a CycloneDX SBOM from `bazel query --output=xml` output
    Generate(GenerateArgs),
    /// Submit an SBOM to the Snyk SBOM test API (requires SNYK_TOKEN)
    Test(TestArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Bazel query XML file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output SBOM JSON file, or `-` for stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: String,

    /// CycloneDX version to generate: 1.4, 1.5 or 1.6 [default: 1.4]
    #[arg(short = 'v', long = "spec-version", alias = "version", value_name = "VERSION")]
    pub spec_version: Option<SpecVersion>,
}

#[derive(clap::Args, Debug)]
pub struct TestArgs {
    /// SBOM JSON file produced by `generate`
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Snyk organization ID
    #[arg(short = 'o', long = "org-id", value_name = "ORG_ID")]
    pub org_id: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
