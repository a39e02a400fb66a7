use std::fs::File;
use std::io::{BufReader, IsTerminal};

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod shell;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("dctf error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    let config = bootstrap::load_config(&cli)?;
    let mut ctx = context::AppContext::init(&config, flags);

    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    let summary = if let Some(path) = &cli.script {
        let file = File::open(path)
            .with_context(|| format!("failed to open script '{}'", path.display()))?;
        shell::run(&mut ctx, BufReader::new(file), &mut out, &mut err, false).await?
    } else {
        let stdin = std::io::stdin();
        let interactive = stdin.is_terminal();
        shell::run(&mut ctx, stdin.lock(), &mut out, &mut err, interactive).await?
    };

    tracing::info!(
        executed = summary.executed,
        failed = summary.failed,
        "session ended"
    );
    Ok(())
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("DCTF_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(flags.log_level()));

    // stdout carries command results; logs stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
