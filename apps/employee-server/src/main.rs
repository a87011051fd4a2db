use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use api_ingress::{ApiIngress, ApiIngressConfig};
use clap::{Parser, Subcommand};
use employees::{config::EmployeesConfig, Employees};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs, ServerConfig};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Employee Server - in-memory employee records over HTTP
#[derive(Parser)]
#[command(name = "employee-server")]
#[command(about = "Employee Server - in-memory employee records over HTTP")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    // Relative log paths follow the config file, or the working dir without one.
    let base_dir = match cli.config.as_deref().and_then(Path::parent) {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => std::env::current_dir().context("Failed to resolve working directory")?,
    };
    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, &base_dir);
    tracing::info!("Employee Server starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config).await,
    }
}

async fn resolve_bind_addr(server: &ServerConfig) -> Result<SocketAddr> {
    tokio::net::lookup_host((server.host.as_str(), server.port))
        .await
        .with_context(|| format!("Invalid server address {}:{}", server.host, server.port))?
        .next()
        .with_context(|| format!("No address resolved for {}", server.host))
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Initializing modules...");

    let employees =
        Employees::from_module_config(config.module_config(employees::module::MODULE_NAME))?;
    let ingress = ApiIngress::from_module_config(config.module_config(api_ingress::MODULE_NAME))?;

    let router = ingress.build_router(
        employees.register_rest(axum::Router::new()),
        employees.openapi(),
    );

    let addr = resolve_bind_addr(&config.server).await?;
    api_ingress::serve(addr, router).await
}

async fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    EmployeesConfig::from_module_config(config.module_config(employees::module::MODULE_NAME))?;
    ApiIngressConfig::from_module_config(config.module_config(api_ingress::MODULE_NAME))?;
    resolve_bind_addr(&config.server).await?;

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("{}", config.to_yaml()?);

    Ok(())
}
