mod app;
mod config;
mod error;
mod mapbox;
mod menu;

use clap::Parser;

fn main() {
    env_logger::init();
    let args = app::CliArguments::parse();
    match app::run(&args) {
        Ok(()) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running campus-router: {e}");
            std::process::exit(1);
        }
    }
}
