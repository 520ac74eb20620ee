//! PMail web client CLI.
//!
//! Drives the HTTP facade and the route table from the command line:
//!
//! ```text
//! pmail-web get /api/email/list
//! pmail-web post /api/email/detail --data '{"id": 3}'
//! pmail-web resolve /detail/42
//! pmail-web routes
//! ```
//!
//! The base URL and language come from `--config` and the `PMAIL_APP_URL` /
//! `PMAIL_LANG` environment variables.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;

use pmail_web::config::load_config;
use pmail_web::observability::init_logging;
use pmail_web::routing::Navigator;
use pmail_web::{HistoryNavigator, HttpClient, RouteTable};

#[derive(Parser)]
#[command(name = "pmail-web")]
#[command(about = "PMail web client: API requests and route lookup", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Client-side location the request is issued from.
    #[arg(long, default_value = "/")]
    from: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a GET request
    Get { path: String },
    /// Send a POST request with a JSON body
    Post {
        path: String,
        #[arg(short, long, default_value = "{}")]
        data: String,
    },
    /// Resolve a client-side path against the route table
    Resolve { path: String },
    /// List the route table
    Routes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.observability);

    tracing::debug!(
        base_url = %config.http.base_url,
        lang = %config.lang,
        "Configuration loaded"
    );

    let table = Arc::new(RouteTable::standard()?);

    match cli.command {
        Commands::Routes => {
            for entry in table.entries() {
                println!("{:<14} {:<8} {}", entry.pattern, entry.name, entry.view);
            }
        }
        Commands::Resolve { path } => match table.resolve(&path) {
            Some(m) => {
                println!("route: {}", m.name);
                println!("view:  {}", m.view);
                for (name, value) in &m.params {
                    println!("param: {name} = {value}");
                }
                for (name, value) in &m.query {
                    println!("query: {name} = {value}");
                }
            }
            None => {
                eprintln!("No route matches '{path}'");
                std::process::exit(1);
            }
        },
        Commands::Get { path } => {
            let navigator = Arc::new(HistoryNavigator::new(table, &cli.from)?);
            let client = HttpClient::new(&config, navigator.clone())?;
            let origin = navigator.current_full_path();
            let result = client.get(&path).await;
            report(result, &navigator, &origin)?;
        }
        Commands::Post { path, data } => {
            let body: Value = serde_json::from_str(&data)?;
            let navigator = Arc::new(HistoryNavigator::new(table, &cli.from)?);
            let client = HttpClient::new(&config, navigator.clone())?;
            let origin = navigator.current_full_path();
            let result = client.post(&path, &body).await;
            report(result, &navigator, &origin)?;
        }
    }

    Ok(())
}

fn report(
    result: pmail_web::http::HttpResult<Value>,
    navigator: &HistoryNavigator,
    origin: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = navigator.current_full_path();
    if current != origin {
        eprintln!("Login required, navigated to {current}");
    }

    let body = result?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
