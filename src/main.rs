use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use tracing_subscriber::EnvFilter;

use mma_doc::config::{default_config_path, load_config, save_config, MmaDocConfig};
use mma_doc::errors::{MmaDocError, Result};
use mma_doc::mcp::McpServer;
use mma_doc::mmadoc::MmaDoc;
use mma_doc::types::{DocsRequest, SymbolsRequest};

/// Mathematica documentation lookups for AI assistants.
#[derive(Parser)]
#[command(
    name = "mma-doc",
    version,
    about = "Mathematica documentation search over MCP, backed by wolframscript"
)]
struct Cli {
    /// Config file (default: <config dir>/mma-doc/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Engine executable, overriding the config file
    #[arg(short, long, global = true)]
    engine: Option<String>,
    /// Increase log verbosity (-v info, -vv debug); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server on stdio (default)
    Serve,
    /// Print the documentation of a symbol
    Docs {
        /// Symbol or function to look up, e.g. Plot
        symbol: String,
        /// Package to load first (repeatable, loaded in order)
        #[arg(short, long = "package")]
        packages: Vec<String>,
        /// Addon to load before packages (repeatable)
        #[arg(short, long = "addon")]
        addons: Vec<String>,
    },
    /// Print the symbols defined in a package
    Symbols {
        /// Package to enumerate, e.g. FeynCalc
        package: String,
        /// Addon to load before the package (repeatable)
        #[arg(short, long = "addon")]
        addons: Vec<String>,
    },
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Installs a stderr subscriber; stdout is reserved for protocol traffic.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let engine = cli.engine;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let service = load_service(&config_path, engine)?;
            McpServer::new(service).run().await?;
        }
        Commands::Docs {
            symbol,
            packages,
            addons,
        } => {
            let service = load_service(&config_path, engine)?;
            let request = DocsRequest {
                symbol,
                packages: Some(packages),
                load_addons: Some(addons),
            };
            println!("{}", service.get_docs(&request).await);
        }
        Commands::Symbols { package, addons } => {
            let service = load_service(&config_path, engine)?;
            let request = SymbolsRequest {
                package,
                load_addons: Some(addons),
            };
            println!("{}", service.list_package_symbols(&request).await);
        }
        Commands::InitConfig { force } => {
            if config_path.exists() && !force {
                return Err(MmaDocError::Config {
                    message: "config file already exists (use --force to overwrite)".to_string(),
                    path: config_path.display().to_string(),
                });
            }
            save_config(&config_path, &MmaDocConfig::default())?;
            println!("Wrote default config to {}", config_path.display());
        }
    }
    Ok(())
}

/// Loads the config file and applies the `--engine` override.
fn load_service(config_path: &Path, engine: Option<String>) -> Result<MmaDoc> {
    let mut config = load_config(config_path)?;
    if let Some(engine) = engine {
        config.executable = engine;
    }
    Ok(MmaDoc::from_config(&config))
}
