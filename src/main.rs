use clap::Parser;
use receipt_points::receipts::ReceiptStore;
use receipt_points::server::AppState;
use std::net::IpAddr;
use std::path::PathBuf;

const EXIT_CONFIG: i32 = 4;
const EXIT_SERVER: i32 = 5;

#[derive(Parser, Debug)]
#[command(name = "receipt-points")]
#[command(about = "Receipt loyalty points HTTP service", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/receipt-points/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind (overrides config)
    #[arg(long)]
    address: Option<IpAddr>,

    /// Port to bind (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = receipt_points::logging::init_logging(cli.verbose) {
        eprintln!("{:#}", e);
        std::process::exit(EXIT_CONFIG);
    }

    let config_path = cli.config.map(PathBuf::from);
    let mut config = match receipt_points::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Some(address) = cli.address {
        config.server.address = address;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // Validate scoring config at startup
    let effective_scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = receipt_points::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    tracing::debug!(scoring = ?effective_scoring, "effective scoring config");

    let state = AppState::new(ReceiptStore::new(effective_scoring));
    if let Err(e) = receipt_points::server::run(&config.server, state).await {
        tracing::error!("{:#}", e);
        std::process::exit(EXIT_SERVER);
    }
}
