use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::Error;
use crate::simulation::DEFAULT_SIM_ACCOUNT;

pub const DEFAULT_RPC_URL: &str = "https://rpc.lightsail.network";

/// Settings for an [`Oracle`](crate::Oracle) backed by a Soroban RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Contract address (`C...`) of the SEP-40 oracle
    pub oracle_id: String,

    /// RPC used for every simulation issued by this oracle
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Allow plain `http://` RPC endpoints
    #[serde(default)]
    pub allow_http: bool,

    /// Source account of the simulated transactions
    #[serde(default = "default_sim_account")]
    pub sim_account: String,

    /// HTTP timeout for a single RPC call; none means the transport default
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_sim_account() -> String {
    DEFAULT_SIM_ACCOUNT.to_string()
}

impl OracleConfig {
    pub fn new(oracle_id: impl Into<String>) -> Self {
        Self {
            oracle_id: oracle_id.into(),
            rpc_url: default_rpc_url(),
            allow_http: false,
            sim_account: default_sim_account(),
            timeout_ms: None,
        }
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    pub fn with_allow_http(mut self, allow_http: bool) -> Self {
        self.allow_http = allow_http;
        self
    }

    pub fn with_sim_account(mut self, sim_account: impl Into<String>) -> Self {
        self.sim_account = sim_account.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Load configuration from environment variables.
    ///
    /// `SEP40_ORACLE_ID` is required. `SEP40_ALLOW_HTTP` enables plain HTTP
    /// only for the literal `true` (any case); a `SEP40_RPC_TIMEOUT_MS` that is
    /// not a number is ignored and leaves the transport default in place.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let oracle_id = lookup("SEP40_ORACLE_ID").ok_or(Error::MissingEnv("SEP40_ORACLE_ID"))?;
        let mut config = Self::new(oracle_id.trim());

        // SEP40_RPC_URL
        if let Some(val) = lookup("SEP40_RPC_URL") {
            config.rpc_url = val.trim().to_string();
        }

        // SEP40_ALLOW_HTTP
        if let Some(val) = lookup("SEP40_ALLOW_HTTP") {
            config.allow_http = val.trim().eq_ignore_ascii_case("true");
        }

        // SEP40_SIM_ACCOUNT
        if let Some(val) = lookup("SEP40_SIM_ACCOUNT") {
            config.sim_account = val.trim().to_string();
        }

        // SEP40_RPC_TIMEOUT_MS
        if let Some(val) = lookup("SEP40_RPC_TIMEOUT_MS") {
            if let Ok(num) = val.trim().parse::<u64>() {
                config.timeout_ms = Some(num);
            }
        }

        Ok(config)
    }
}
