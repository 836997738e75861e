use crate::args::Args;
use crate::model::LatLon;
use anyhow::{ensure, Context};
use commons::log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::default::Default;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub base_url: String,
    pub telemetry_interval: Duration,
    pub alert_count_interval: Duration,
    pub request_timeout: Duration,
    pub dark_mode: bool,
    pub map: MapParameters,
    pub log_level: LevelFilter,
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters {
            base_url: "http://localhost:3000/api".to_string(),
            telemetry_interval: Duration::from_secs(5),
            alert_count_interval: Duration::from_secs(15),
            request_timeout: Duration::from_secs(10),
            dark_mode: false,
            map: MapParameters::default(),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapParameters {
    pub center: LatLon,
    pub zoom: u8,
}

impl Default for MapParameters {
    fn default() -> MapParameters {
        MapParameters {
            center: LatLon::new(13.0827, 80.2707),
            zoom: 12,
        }
    }
}

impl Parameters {
    pub fn load(path: &Path) -> anyhow::Result<Parameters> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Could not read parameters from {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid parameters in {}", path.display()))
    }

    /// Timer periods must be positive.
    fn validate(self) -> anyhow::Result<Parameters> {
        ensure!(
            !self.telemetry_interval.is_zero(),
            "telemetry_interval must be greater than zero"
        );
        ensure!(
            !self.alert_count_interval.is_zero(),
            "alert_count_interval must be greater than zero"
        );
        Ok(self)
    }

    fn override_with(mut self, args: &Args) -> Parameters {
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if args.dark {
            self.dark_mode = true;
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        self
    }
}

impl TryFrom<&Args> for Parameters {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> anyhow::Result<Parameters> {
        let parameters = match &args.config {
            Some(path) => Parameters::load(path)?,
            None => Parameters::default(),
        };
        parameters.override_with(args).validate()
    }
}
