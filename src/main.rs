use std::io;

use clap::Parser;
use sales_trend::cli::{self, Prompter};
use sales_trend::config::Config;
use sales_trend::ui::NativeViewer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse();
    log::debug!("Starting with {config:?}");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    cli::run(&config, &mut prompter, &mut NativeViewer)?;
    Ok(())
}
