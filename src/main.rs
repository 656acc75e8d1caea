// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! `chirp`: run a feed script and print the result of each query.

use std::fs;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use tracing::info;

use chirp::Feed;
use chirp::FeedConfig;
use chirp::logging::LogConfig;
use chirp::logging::LogLevel;
use chirp::logging::init_logging_with_config;
use chirp::script::Script;

#[derive(Parser, Debug)]
#[command(name = "chirp", version, about, long_about = None)]
struct Args {
    /// Script to run; reads stdin when omitted.
    script: Option<PathBuf>,

    /// Items per feed. Overrides CHIRP_FEED_LEN.
    #[arg(short = 'n', long)]
    feed_len: Option<usize>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG overrides it.
    #[arg(short, long, default_value = "warn")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging_with_config(LogConfig::new(args.log_level))?;

    let mut config = FeedConfig::from_env()?;
    if let Some(feed_len) = args.feed_len {
        config = config.with_feed_len(feed_len);
    }
    let mut feed = Feed::with_config(config)?;

    let text = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read script from stdin")?;
            text
        }
    };
    let script = Script::parse(&text)?;
    info!(commands = script.commands().len(), feed_len = feed.feed_len(), "running script");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for output in script.run(&mut feed) {
        writeln!(out, "{output}")?;
    }

    info!(items = feed.posts().len(), "done");
    return Ok(());
}
