//! CLI for the README generator.
//!
//! Fetches a GitHub repository's metadata and writes a README rendered from
//! the built-in or a custom Handlebars template.

use clap::Parser;
use readme_generator::{
    install_crypto_provider, write_default_template, ErrorCategory, GeneratedReadme,
    GeneratorConfig, GeneratorError, ReadmeGenerator, DEFAULT_API_URL, DEFAULT_TEMPLATE_FILE,
};
use std::error::Error as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const EXAMPLES: &str = "\
Examples:
  readme-generator octocat/Hello-World
  readme-generator microsoft/vscode -t my_template.md
  readme-generator https://github.com/torvalds/linux -o ~/linux_README.md
  readme-generator --create-template

Set GITHUB_TOKEN to avoid API rate limits.";

/// README Generator - Generate README files for GitHub repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
struct Args {
    /// GitHub repository (owner/repo or full URL).
    #[arg(required_unless_present = "create_template")]
    repository: Option<String>,

    /// Output file path (default: ./{repo}_README.md).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Custom template file path.
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Create the default template file and exit.
    #[arg(long)]
    create_template: bool,
}

impl Args {
    /// Builds the generator configuration from the parsed flags.
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_token(self.token.clone())
            .with_api_url(self.api_url.clone())
            .with_template_path(self.template.clone())
            .with_output_path(self.output.clone())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    install_crypto_provider();
    init_tracing();

    let args = Args::parse();

    if args.create_template {
        let path = args
            .template
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_FILE));
        return match write_default_template(&path) {
            Ok(()) => {
                println!("✓ Default template created: {}", display_absolute(&path));
                println!("  Edit this file to customize your README template.");
                ExitCode::SUCCESS
            }
            Err(e) => {
                report_error(&GeneratorError::from(e));
                ExitCode::from(1)
            }
        };
    }

    match run(&args).await {
        Ok(readme) => {
            print_summary(&readme);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Log lines go to stderr so stdout only carries the run summary. The level
/// is taken from `RUST_LOG` and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: &Args) -> Result<GeneratedReadme, GeneratorError> {
    let repository = args.repository.as_deref().unwrap_or_default();
    debug!(repository, api_url = %args.api_url, "Starting README generation");
    let generator = ReadmeGenerator::new(args.generator_config())?;
    generator.generate(repository).await
}

/// Prints the outcome of a successful run.
fn print_summary(readme: &GeneratedReadme) {
    println!(
        "Repository found: {}",
        readme
            .full_name
            .clone()
            .unwrap_or_else(|| readme.repository.full_name())
    );
    println!(
        "Description: {}",
        readme.description.as_deref().unwrap_or("No description")
    );
    println!("\n✓ README generated successfully!");
    println!("✓ Saved to: {}", readme.output_path.display());
}

/// Prints an error to stderr, with full detail for unexpected failures.
fn report_error(error: &GeneratorError) {
    match error.category() {
        ErrorCategory::Input | ErrorCategory::Remote => eprintln!("Error: {error}"),
        ErrorCategory::Transport => eprintln!("Network error: {error}"),
        ErrorCategory::Unexpected => {
            eprintln!("Unexpected error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            eprintln!("{error:#?}");
        }
    }
}

fn display_absolute(path: &Path) -> String {
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
