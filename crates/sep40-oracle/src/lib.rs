//! Read-only client for SEP-40 price oracles.
//!
//! Every query is answered by simulating a single contract invocation on a
//! Soroban RPC node. Nothing is ever signed or submitted.

use core::fmt;

pub mod codec;
pub mod config;
mod error;
pub mod invoke;
pub mod oracle;
pub mod rpc;
mod sep40;
pub mod simulation;

pub use config::OracleConfig;
pub use error::Error;
pub use oracle::Oracle;
pub use rpc::RpcServer;
pub use sep40::Sep40;
pub use simulation::{SimAccount, SimulateTransaction, SimulationOutcome};

/// Quoted asset definition (SEP-40 compatible)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Can be a Stellar Classic or Soroban asset, identified by its strkey address
    Stellar(String),
    /// For any external tokens/assets/symbols
    Other(String),
}

impl Asset {
    /// Wire tag of the variant, as declared by the contract type.
    pub fn tag(&self) -> &'static str {
        match self {
            Asset::Stellar(_) => "Stellar",
            Asset::Other(_) => "Other",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Asset::Stellar(address) => address,
            Asset::Other(symbol) => symbol,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.tag(), self.id())
    }
}

/// Price record definition (SEP-40 compatible)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceData {
    pub price: i128,    // asset price at given point in time
    pub timestamp: u64, // recording timestamp
}
