//! Travel matrix ingestion from the Mapbox Directions-Matrix API.
//!
//! One blocking GET per travel mode. The core never sees this layer; it
//! only receives the resulting [`TravelMatrix`] values.

use std::time::Duration;

use log::warn;
use serde::Deserialize;

use campus_router_core::{Landmark, Mode, TravelMatrix};

use crate::config::MapboxConfig;
use crate::error::CliError;

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    code: String,
    #[serde(flatten)]
    matrix: TravelMatrix,
}

pub struct MatrixClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    token: String,
    retries: u32,
}

impl MatrixClient {
    pub fn new(config: &MapboxConfig, token: String) -> Result<Self, CliError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token,
            retries: config.retries.max(1),
        })
    }

    /// Fetches the complete pairwise matrix for one mode, with distances in
    /// meters and durations in seconds as the provider delivers them.
    pub fn fetch(&self, landmarks: &[Landmark], mode: Mode) -> Result<TravelMatrix, CliError> {
        let profile = match mode {
            Mode::Driving => "driving",
            Mode::Walking => "walking",
        };
        let url = format!(
            "{}/directions-matrix/v1/mapbox/{profile}/{}",
            self.endpoint,
            coordinate_list(landmarks)
        );

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_fetch(&url) {
                Ok(matrix) => return Ok(matrix),
                Err(e) if attempt < self.retries && is_retryable(&e) => {
                    warn!("matrix fetch for {profile} failed (attempt {attempt}): {e}");
                    std::thread::sleep(Duration::from_secs(attempt as u64));
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn try_fetch(&self, url: &str) -> Result<TravelMatrix, CliError> {
        let response: MatrixResponse = self
            .client
            .get(url)
            .query(&[
                ("annotations", "duration,distance"),
                ("access_token", self.token.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        if response.code != "Ok" {
            return Err(CliError::Api(format!(
                "provider returned code {}",
                response.code
            )));
        }
        Ok(response.matrix)
    }
}

fn is_retryable(error: &CliError) -> bool {
    match error {
        CliError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        _ => false,
    }
}

/// Semicolon-separated `lon,lat` pairs in the provider's expected order.
fn coordinate_list(landmarks: &[Landmark]) -> String {
    landmarks
        .iter()
        .map(|landmark| format!("{:.6},{:.6}", landmark.lon, landmark.lat))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_are_lon_lat_with_six_decimals() {
        let landmarks = vec![
            Landmark::new(5.65188, -0.18683, "Balme Library"),
            Landmark::new(5.64050, -0.16750, "Great Hall"),
        ];
        assert_eq!(
            coordinate_list(&landmarks),
            "-0.186830,5.651880;-0.167500,5.640500"
        );
    }

    #[test]
    fn response_body_deserializes_with_flattened_matrix() {
        let body = r#"{
            "code": "Ok",
            "distances": [[null, 1000.0], [900.0, null]],
            "durations": [[null, 120.0], [110.0, null]]
        }"#;
        let response: MatrixResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.code, "Ok");
        assert!(response.matrix.cell(0, 1).is_some());
        assert!(response.matrix.cell(0, 0).is_none());
    }
}
