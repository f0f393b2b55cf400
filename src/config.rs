use std::env;

use crate::core::domain_filter::DomainFilter;
use crate::error::Error;

pub const PRODUCTION_API_URL: &str = "https://api.dnsimple.com/v2";
pub const SANDBOX_API_URL: &str = "https://api.sandbox.dnsimple.com/v2";
pub const DEFAULT_TTL: u32 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    /// Resolved through the token's identity when unset.
    pub account_id: Option<String>,
    pub sandbox: bool,
    pub base_url: Option<String>,
    pub domain_filter: DomainFilter,
    pub dry_run: bool,
    pub default_ttl: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let api_token = env::var("DNSIMPLE_OAUTH")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::Config("DNSIMPLE_OAUTH is not set".to_string()))?;

        Ok(Config {
            api_token,
            account_id: non_empty_var("DNSIMPLE_ACCOUNT_ID"),
            sandbox: bool_var("DNSIMPLE_SANDBOX")?.unwrap_or(false),
            base_url: non_empty_var("DNSIMPLE_BASE_URL"),
            domain_filter: DomainFilter::parse(&env::var("DOMAIN_FILTER").unwrap_or_default()),
            dry_run: bool_var("DRY_RUN")?.unwrap_or(false),
            default_ttl: match non_empty_var("DEFAULT_TTL") {
                Some(v) => v
                    .parse()
                    .map_err(|_| Error::Config(format!("DEFAULT_TTL is not a number: {v}")))?,
                None => DEFAULT_TTL,
            },
        })
    }

    /// The explicit base URL if one is set, otherwise sandbox or production.
    pub fn api_url(&self) -> &str {
        match (&self.base_url, self.sandbox) {
            (Some(url), _) => url.trim_end_matches('/'),
            (None, true) => SANDBOX_API_URL,
            (None, false) => PRODUCTION_API_URL,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn bool_var(key: &str) -> Result<Option<bool>, Error> {
    non_empty_var(key).map(|v| parse_bool(key, &v)).transpose()
}

pub(crate) fn parse_bool(key: &str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("{key} is not a boolean: {value}"))),
    }
}
