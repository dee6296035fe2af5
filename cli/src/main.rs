mod capture;
mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, session};
use swapmeet_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        redact_owner: commands.redact_owner,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            Ok(info::info())
        }
        Commands::Session => {
            print::header("opening the exchange board", cfg.quiet);
            session::session(&cfg).await
        }
    }
}
