use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("routing error: {0}")]
    Core(#[from] campus_router_core::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("matrix API error: {0}")]
    Api(String),
}
