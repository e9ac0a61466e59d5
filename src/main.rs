use anyhow::{Context, Result};
use clap::Parser;
use golf_scorecard::model::Course;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

mod repl;

#[derive(Parser, Debug)]
#[command(about = "Interactive golf scorecard with handicap nets and a Game of 10s")]
struct Cli {
    /// Course record JSON from the course provider; falls back to the
    /// built-in Augusta layout when omitted.
    #[arg(long)]
    course_json: Option<PathBuf>,
    #[arg(long)]
    config_toml: Option<PathBuf>,
    /// Turn on the Game of 10s side game.
    #[arg(long)]
    play_tens: bool,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    course_json: Option<PathBuf>,
    play_tens: Option<bool>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let course = match cli.course_json.or(file_config.course_json) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("read course json {}", path.display()))?;
            Course::from_json(&raw)
                .with_context(|| format!("parse course json {}", path.display()))?
        }
        None => Course::augusta_national(),
    };
    let play_tens = cli.play_tens || file_config.play_tens.unwrap_or(false);

    repl::run_scorecard_repl(&course, play_tens)
}
