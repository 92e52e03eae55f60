use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;

use onboarding_progress::config::ServerConfig;
use onboarding_progress::onboarding::{ProgressRouteState, UserSnapshot, calculate_progress, progress_routes};

const USAGE: &str = "\
Usage:
  onboarding-progress [serve]        Run the progress HTTP API
  onboarding-progress check [FILE]   Print the progress report for a JSON user record
                                     (reads stdin when FILE is omitted or '-')";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("serve") => serve().await,
        Some("check") => check(args.get(1).map(String::as_str)),
        Some("-h" | "--help" | "help") => {
            println!("{USAGE}");
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {other}\n\n{USAGE}");
            std::process::exit(2);
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    let app = progress_routes(ProgressRouteState::default());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    eprintln!("🧭 Onboarding Progress v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Progress API: http://{addr}/api/onboarding/progress");
    eprintln!("   Milestones:   http://{addr}/api/onboarding/milestones\n");
    tracing::info!(addr = %addr, "Onboarding progress server started");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

fn check(path: Option<&str>) -> anyhow::Result<()> {
    let snapshot = match path {
        None | Some("-") => UserSnapshot::from_reader(io::stdin().lock())
            .context("Failed to read user record from stdin")?,
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {path}"))?;
            UserSnapshot::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to read user record from {path}"))?
        }
    };

    let report = calculate_progress(&snapshot);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
