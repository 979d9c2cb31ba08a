//! CuraVyom CLI - run the landing site API
//!
//! ```bash
//! curavyom serve                    # Start HTTP server (port 8000)
//! curavyom serve --simulate-latency # Answer with the production-like delays
//! curavyom serve --reports-dir out  # Serve generated reports from ./out
//! curavyom classify paper.pdf       # Show how an upload would be analysed
//! ```

use clap::{Parser, Subcommand};
use curavyom::{analyze, server::start_server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "curavyom")]
#[command(about = "CuraVyom landing site API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = curavyom::config::DEFAULT_PORT)]
        port: u16,

        /// Delay responses like the mail/analysis backends would
        #[arg(long)]
        simulate_latency: bool,

        /// Directory served under /reports
        #[arg(long, env = "REPORTS_DIR", default_value = curavyom::config::DEFAULT_REPORTS_DIR)]
        reports_dir: std::path::PathBuf,
    },

    /// Print the analysis an upload with this file name would get
    Classify {
        /// File name (only the name is inspected)
        filename: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            simulate_latency,
            reports_dir,
        } => {
            let config = ServerConfig::new(port, simulate_latency).with_reports_dir(reports_dir);
            start_server(config).await
        }
        Commands::Classify { filename } => {
            let analysis = analyze(&filename, 0);
            match serde_json::to_string_pretty(&analysis) {
                Ok(json) => {
                    println!("{}", json);
                    Ok(())
                }
                Err(e) => Err(curavyom::ServerError::Internal(e.to_string())),
            }
        }
    };

    if let Err(e) = result {
        tracing::error!("❌ {}", e);
        std::process::exit(1);
    }
}
