use ::errors::*;

use std::env;

pub const DEFAULT_KAFKA_URI: &'static str = "localhost:9092";
pub const DEFAULT_ROSTER_SERVICE_URL: &'static str = "http://localhost:8080";
pub const DEFAULT_BALANCE_THRESHOLD: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig
{
    pub broker_uris: Vec<String>,
    pub roster_service_url: String,
    /// Serve rosters from this JSON file instead of the data service
    pub roster_file: Option<String>,
    pub balance_threshold: f64,
}

impl ServiceConfig
{
    pub fn from_env() -> Result<ServiceConfig>
    {
        ServiceConfig::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Missing variables fall back to the defaults, malformed ones
    /// are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<ServiceConfig>
        where F: Fn(&str) -> Option<String>
    {
        let broker_uris: Vec<String> = match lookup("KAFKA_URIS")
        {
            Some(uris) => uris.split(',')
                .map(|uri| uri.trim())
                .filter(|uri| !uri.is_empty())
                .map(String::from)
                .collect(),
            None => vec!(String::from(DEFAULT_KAFKA_URI)),
        };

        if broker_uris.is_empty()
        {
            bail!("KAFKA_URIS did not contain any broker");
        }

        let roster_service_url = lookup("ROSTER_SERVICE_URL")
            .unwrap_or_else(|| String::from(DEFAULT_ROSTER_SERVICE_URL));

        let roster_file = lookup("ROSTER_FILE")
            .filter(|path| !path.trim().is_empty());

        let balance_threshold = match lookup("BALANCE_THRESHOLD")
        {
            Some(raw) => raw.trim().parse::<f64>()
                .chain_err(|| format!("BALANCE_THRESHOLD is not a number: {}", raw))?,
            None => DEFAULT_BALANCE_THRESHOLD,
        };

        if !balance_threshold.is_finite() || balance_threshold < 0.0
        {
            bail!("BALANCE_THRESHOLD must be a finite, non negative number: {}", balance_threshold);
        }

        Ok(
            ServiceConfig {
                broker_uris,
                roster_service_url,
                roster_file,
                balance_threshold,
            }
        )
    }
}
