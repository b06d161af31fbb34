mod cli;
mod config;

use bazel_sbom::adapters::outbound::console::StderrProgressReporter;
use bazel_sbom::adapters::outbound::filesystem::FileSystemReader;
use bazel_sbom::adapters::outbound::formatters::CycloneDxFormatter;
use bazel_sbom::adapters::outbound::network::SnykClient;
use bazel_sbom::application::dto::{GenerateSbomRequest, TestSbomRequest};
use bazel_sbom::application::factories::{PresenterFactory, PresenterType};
use bazel_sbom::application::use_cases::{GenerateSbomUseCase, TestSbomUseCase};
use bazel_sbom::ports::outbound::SbomFormatter;
use bazel_sbom::shared::error::ExitCode;
use bazel_sbom::shared::{ApiToken, Result};
use cli::{Args, Command, GenerateArgs, TestArgs};
use config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // clap exits with status 2 on invalid arguments, before any file I/O
    let args = Args::parse_args();

    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Logs go to stderr so `-o -` keeps stdout clean
fn init_tracing(verbose: bool) {
    let log_level = if verbose { "warn,bazel_sbom=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Generate(generate) => run_generate(generate, &config),
        Command::Test(test) => run_test(test, &config).await,
    }
}

/// An explicit `--config` must exist; otherwise the working directory is
/// searched and a missing file means defaults
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => match discover_config(Path::new("."))? {
            Some(config) => {
                eprintln!("📄 Auto-discovered config file: {}", CONFIG_FILENAME);
                Ok(config)
            }
            None => Ok(ConfigFile::default()),
        },
    }
}

fn run_generate(args: GenerateArgs, config: &ConfigFile) -> Result<()> {
    let spec_version = args
        .spec_version
        .or_else(|| config.spec_version())
        .unwrap_or_default();

    let use_case = GenerateSbomUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(GenerateSbomRequest::new(args.input, spec_version))?;

    let output = CycloneDxFormatter::new().format(&response.bom)?;

    let presenter_type = PresenterType::from_output_arg(&args.output);
    PresenterFactory::create(presenter_type.clone()).present(&output)?;

    if let PresenterType::File(path) = presenter_type {
        eprintln!(
            "{}",
            format!(
                "Successfully generated CycloneDX {} SBOM: {}",
                spec_version,
                path.display()
            )
            .green()
        );
    }

    Ok(())
}

async fn run_test(args: TestArgs, config: &ConfigFile) -> Result<()> {
    // The token is checked before the SBOM file is touched
    let token = ApiToken::from_env()?;
    let client = SnykClient::with_settings(
        token,
        config.base_url(),
        config.api_version(),
        config.retry_policy(),
    )?;

    let use_case = TestSbomUseCase::new(FileSystemReader::new(), client, StderrProgressReporter::new());
    let response = use_case
        .execute(TestSbomRequest::new(args.input, args.org_id))
        .await?;

    println!("Test run ID: {}", response.test_run_id);
    println!(
        "Test run status: {}",
        serde_json::to_string_pretty(&response.status)?
    );

    Ok(())
}
