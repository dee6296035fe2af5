pub mod info;
pub mod session;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "swapmeet")]
#[command(about = "A peer-to-peer item exchange board.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce decorative output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Hide owner names in rendered rows
    #[arg(long, global = true)]
    pub redact_owner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about the tool
    #[command(alias = "i")]
    Info,
    /// Open an interactive exchange board session
    #[command(alias = "s")]
    Session,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
