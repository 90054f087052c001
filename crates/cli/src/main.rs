//! # Netblocks
//!
//! Resolves Google netblock range types into CIDR lists, either once on the
//! command line or through the HTTP API.

mod bootstrap;
mod di;
mod server;

use clap::{Parser, Subcommand};
use netblocks_domain::{CliOverrides, RangeSource, RangeType};
use tracing::info;

#[derive(Parser)]
#[command(name = "netblocks")]
#[command(version)]
#[command(about = "Netblock IP ranges for Google Cloud firewall rules")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Resolve endpoint queried for TXT records
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the netblock document for a range type as JSON
    Lookup {
        /// Range type to resolve (default: cloud-netblocks)
        #[arg(short = 'r', long)]
        range_type: Option<String>,
    },
    /// List the known range types
    List,
    /// Serve the netblock lookup over HTTP
    Serve {
        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// Listen port
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (bind_address, port) = match &cli.command {
        Command::Serve { bind, port } => (bind.clone(), *port),
        _ => (None, None),
    };

    let overrides = CliOverrides {
        endpoint: cli.endpoint,
        request_timeout_secs: cli.timeout,
        bind_address,
        port,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    match cli.command {
        Command::Lookup { range_type } => {
            let use_cases = di::UseCases::new(&config)?;
            let ranges = use_cases.get_ip_ranges.execute(range_type.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&ranges)?);
        }
        Command::List => {
            // Dynamic range types first; they hit the network on lookup.
            let (dynamic, fixed): (Vec<_>, Vec<_>) =
                RangeType::ALL.into_iter().partition(RangeType::is_dynamic);
            for rt in dynamic.into_iter().chain(fixed) {
                let source = match rt.source() {
                    RangeSource::Dns(name) => format!("dns {name}"),
                    RangeSource::Static(blocks) => format!("static {}", blocks.join(",")),
                };
                println!("{:<24} {}", rt.as_str(), source);
            }
        }
        Command::Serve { .. } => {
            let use_cases = di::UseCases::new(&config)?;
            info!(endpoint = %config.resolver.endpoint, "Starting netblocks API");
            server::start_web_server(&config, use_cases).await?;
        }
    }

    Ok(())
}
