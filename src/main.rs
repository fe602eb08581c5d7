//! MCP smoke-test CLI
//!
//! Spawns a stdio MCP server, sends it one `tools/call` request for the
//! video tag-update tool, and prints whatever the server wrote back. With
//! no arguments the run reproduces the fixed example baked into the
//! defaults; flags override the server command and the request values.

use std::path::PathBuf;

use clap::Parser;
use mcp_smoke::common::config::Config;
use mcp_smoke::{runner, Result, ToolCallRequest};

#[derive(Parser)]
#[command(name = "mcp-smoke", about = "Smoke-test harness for stdio MCP servers")]
#[command(version, long_about = None)]
struct Cli {
    /// Path to the MCP server executable (overrides the config file)
    #[arg(long)]
    server: Option<PathBuf>,

    /// Argument passed to the server executable; repeatable, ordered
    #[arg(long = "server-arg")]
    server_args: Vec<String>,

    /// Video to update
    #[arg(long)]
    video_id: Option<String>,

    /// Tag to apply; repeatable, ordered. Defaults to the built-in tag set
    #[arg(long = "tag")]
    tags: Vec<String>,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let server = config.resolve_server(cli.server, cli.server_args);

    let video_id = cli.video_id.unwrap_or(config.payload.video_id);
    let tags = if cli.tags.is_empty() {
        config.payload.tags
    } else {
        cli.tags
    };

    tracing::debug!("server command: {:?} {:?}", server.path, server.args);
    let request = ToolCallRequest::update_video(video_id, tags);
    let report = runner::run(&server, &request).await?;

    if report.has_failure_output() {
        println!("Server stderr:");
        println!("{}", report.stderr);
    }

    if report.stdout.is_empty() {
        println!("Server produced no response");
    } else {
        println!("Server response:");
        println!("{}", report.stdout);
    }

    Ok(())
}
