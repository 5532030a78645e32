use std::error::Error;

use clap::Parser;

mod clock;
mod config;
mod keymap;
mod run;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = config::Config::parse();
    log::debug!("{:?}", config);
    run::run(&config)
}
