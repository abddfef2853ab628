use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error};

/// Serve per-session task lists over HTTP
#[derive(Parser)]
#[command(name = "taskpad", version)]
#[command(about = "Taskpad - per-session task lists over HTTP", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default command)
    Serve {
        /// Address to bind (default: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: 8080)
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Path to configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("taskpad started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Some(Commands::Serve { host, port, config }) => run_serve(host, port, config).await,
        None => run_serve(None, None, None).await,
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = taskpad::config::Config::load(config.as_deref())?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    taskpad::web::serve(config).await?;
    Ok(())
}
