use soroban_sdk::xdr;
use thiserror::Error;

use crate::Asset;

#[derive(Debug, Error)]
pub enum Error {
    /// The simulation engine rejected the invocation; message kept verbatim
    #[error("simulation failed: {0}")]
    SimulationFailed(String),

    /// The contract ran but reported no record for the asset
    #[error("{method} for asset {}{} not available", .asset.id(), at_timestamp(.timestamp))]
    NoDataAvailable {
        method: &'static str,
        asset: Asset,
        timestamp: Option<u64>,
    },

    /// HTTP transport failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// JSON-RPC error object returned by the endpoint
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Plain HTTP endpoint used without `allow_http`
    #[error("refusing to use insecure rpc endpoint {0} (allow_http is not set)")]
    InsecureTransport(String),

    #[error("invalid rpc url {0}")]
    InvalidUrl(String),

    /// Not a valid account or contract strkey
    #[error("invalid address {0}")]
    InvalidAddress(String),

    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    #[error(transparent)]
    Xdr(#[from] xdr::Error),

    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// Return value does not have the shape of the SEP-40 method
    #[error("unexpected contract value: expected {expected}, found {found}")]
    UnexpectedValue {
        expected: &'static str,
        found: String,
    },

    /// Successful simulation that carried no return value
    #[error("simulation returned no result")]
    MissingReturnValue,
}

fn at_timestamp(timestamp: &Option<u64>) -> String {
    match timestamp {
        Some(ts) => format!(" at timestamp {ts}"),
        None => String::new(),
    }
}
