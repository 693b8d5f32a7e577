//! Magnetic declination lookup against NOAA's geomagnetic calculator
//!
//! Declination is informational only: it is displayed next to the computed
//! true headings but never feeds back into the distance or bearing math.
//! The lookup is a single synchronous HTTP call with a bounded timeout,
//! made at most once per invocation for the reference coordinate; any
//! failure surfaces as an error that the caller downgrades to "no value".

use std::time::Duration;

use log::debug;
use serde::Deserialize;

use crate::coordinates::Coordinate;
use crate::{CircumpolarError, Result};

/// NOAA geomagnetic declination endpoint (WMM model)
const NOAA_URL: &str = "https://www.ngdc.noaa.gov/geomag-web/calculators/calculateDeclination";

/// Request timeout for the single declination call
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// A source of magnetic declination values
///
/// The returned value is signed degrees, east-positive.
pub trait DeclinationSource {
    fn declination(&self, location: &Coordinate) -> Result<f64>;
}

/// Envelope of the NOAA calculator's JSON response
#[derive(Debug, Deserialize)]
struct DeclinationResponse {
    result: Vec<DeclinationRecord>,
}

/// One reading inside the NOAA response
#[derive(Debug, Deserialize)]
struct DeclinationRecord {
    declination: f64,
}

/// Blocking client for the NOAA declination service
pub struct NoaaClient {
    client: reqwest::blocking::Client,
}

impl NoaaClient {
    /// Creates a client with the bounded lookup timeout
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| {
                CircumpolarError::DeclinationError(format!("failed to create HTTP client: {}", e))
            })?;
        Ok(NoaaClient { client })
    }

    fn parse_body(body: &str) -> Result<f64> {
        let response: DeclinationResponse = serde_json::from_str(body).map_err(|e| {
            CircumpolarError::DeclinationError(format!("malformed NOAA response: {}", e))
        })?;

        response
            .result
            .first()
            .map(|record| record.declination)
            .ok_or_else(|| {
                CircumpolarError::DeclinationError("empty result set from NOAA".to_string())
            })
    }
}

impl DeclinationSource for NoaaClient {
    fn declination(&self, location: &Coordinate) -> Result<f64> {
        debug!(
            "querying NOAA declination for {}, {}",
            location.latitude(),
            location.longitude()
        );

        let response = self
            .client
            .get(NOAA_URL)
            .query(&[
                ("lat1", location.latitude().to_string()),
                ("lon1", location.longitude().to_string()),
                ("resultFormat", "json".to_string()),
                ("model", "WMM".to_string()),
                ("magneticComponent", "d".to_string()),
            ])
            .send()
            .map_err(|e| {
                CircumpolarError::DeclinationError(format!("declination request failed: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(CircumpolarError::DeclinationError(format!(
                "declination request failed, status: {}",
                response.status()
            )));
        }

        let body = response.text().map_err(|e| {
            CircumpolarError::DeclinationError(format!("failed to read NOAA response: {}", e))
        })?;

        Self::parse_body(&body)
    }
}
