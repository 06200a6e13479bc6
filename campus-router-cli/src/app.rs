use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use serde::Deserialize;

use campus_router_core::{CampusGraph, Mode, TravelMatrix, build_campus_graph};

use crate::config::{RouterConfig, load_config};
use crate::error::CliError;
use crate::mapbox::MatrixClient;
use crate::menu;

/// Interactive shortest-path finder between campus landmarks.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArguments {
    /// path to the TOML configuration (provider settings + landmark table)
    #[arg(short, long, default_value = "config/campus.toml")]
    pub config: PathBuf,
    /// Mapbox access token; overrides the config file and the
    /// MAPBOX_ACCESS_TOKEN environment variable
    #[arg(short, long)]
    pub token: Option<String>,
    /// read both travel matrices from a JSON file instead of the network
    #[arg(long)]
    pub mock_matrix: Option<PathBuf>,
}

/// Both matrices of a `--mock-matrix` file.
#[derive(Debug, Deserialize)]
struct MatrixPair {
    driving: TravelMatrix,
    walking: TravelMatrix,
}

pub fn run(args: &CliArguments) -> Result<(), CliError> {
    let config = load_config(&args.config)?;
    let graph = build_graph(args, &config)?;
    menu::run(&graph)
}

fn build_graph(args: &CliArguments, config: &RouterConfig) -> Result<CampusGraph, CliError> {
    let (car, walk) = match &args.mock_matrix {
        Some(path) => {
            info!("loading travel matrices from {}", path.display());
            let pair: MatrixPair = serde_json::from_str(&fs::read_to_string(path)?)?;
            (pair.driving, pair.walking)
        }
        None => {
            let token = resolve_token(args, config)?;
            let client = MatrixClient::new(&config.mapbox, token)?;
            info!(
                "fetching travel matrices for {} landmarks",
                config.landmarks.len()
            );
            let car = client.fetch(&config.landmarks, Mode::Driving)?;
            let walk = client.fetch(&config.landmarks, Mode::Walking)?;
            (car, walk)
        }
    };

    Ok(build_campus_graph(&config.landmarks, &car, &walk)?)
}

fn resolve_token(args: &CliArguments, config: &RouterConfig) -> Result<String, CliError> {
    args.token
        .clone()
        .or_else(|| std::env::var("MAPBOX_ACCESS_TOKEN").ok())
        .or_else(|| config.mapbox.access_token.clone())
        .ok_or_else(|| {
            CliError::Config(
                "no Mapbox access token: pass --token, set MAPBOX_ACCESS_TOKEN, \
                 or add mapbox.access_token to the config file"
                    .to_string(),
            )
        })
}
