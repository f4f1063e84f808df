use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "admin")]
#[command(about = "Student administration console")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Admin API base URL (overrides api.base_url from config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Answer yes to confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}
