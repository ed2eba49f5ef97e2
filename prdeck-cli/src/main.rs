//! prdeck CLI - GitHub pull requests in the terminal
//!
//! Lists pull requests with GitHub-style search queries and shows
//! pull-request details.

mod commands;

use clap::{Parser, Subcommand};
use prdeck_core::{Config, Secrets};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ListArgs, ShowArgs, WhoamiArgs};

/// prdeck: browse a repository's pull requests
#[derive(Parser, Debug)]
#[command(name = "prdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Repository as owner/repo or URL (overrides config and env)
    #[arg(short, long, global = true, env = "PRDECK_REPO")]
    repo: Option<String>,

    /// Login that `@me` refers to (overrides config and env)
    #[arg(long, global = true, env = "PRDECK_VIEWER")]
    viewer: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// List pull requests matching a query
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a single pull request
    Show(ShowArgs),

    /// Show who `@me` refers to
    Whoami(WhoamiArgs),

    /// Show current configuration
    Config,

    /// Create a secrets file template for the GitHub token
    InitSecrets,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config = Config::load_with_overrides(cli.repo.clone(), cli.viewer.clone())?;

    if cli.verbose {
        tracing::info!(
            repo = ?config.github.repo,
            viewer = %config.viewer.login(),
            source = %config.view.source,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("prdeck {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::List(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Show(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Whoami(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Config) => {
            println!("prdeck Configuration");
            println!("====================");
            println!();
            println!(
                "  repo: {}",
                config.github.repo.as_deref().unwrap_or("(not set)")
            );
            println!(
                "  viewer: {}",
                if config.viewer.is_anonymous() {
                    "(not set)"
                } else {
                    config.viewer.login()
                }
            );
            println!("  source: {}", config.view.source);
            println!("  default_query: {:?}", config.view.default_query);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        Some(Commands::InitSecrets) => {
            let path = Secrets::create_template()?;
            println!("Created {}", path.display());
            println!("Add your GitHub token there, or set GITHUB_TOKEN.");
        }
        None => {
            println!("prdeck - GitHub pull requests in the terminal");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
