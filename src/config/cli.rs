use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "odin-binder")]
#[command(about = "Inspect the logger binder and check facade API compatibility")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML binder configuration")]
    pub config: Option<String>,

    #[arg(long, help = "Facade API version to check against the binder")]
    pub check_version: Option<String>,

    #[arg(long, help = "Print binder info as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
