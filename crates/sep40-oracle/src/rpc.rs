//! Soroban JSON-RPC transport.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use soroban_sdk::xdr::{Limits, TransactionEnvelope, WriteXdr};
use url::Url;

use crate::Error;
use crate::simulation::SimulateTransaction;

/// `simulateTransaction` result object, as returned by Soroban RPC.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateTransactionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SimulateHostFunctionResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_resource_fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(default)]
    pub latest_ledger: u32,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SimulateHostFunctionResult {
    #[serde(default)]
    pub auth: Vec<String>,
    /// Base64 `ScVal` return value
    pub xdr: String,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

/// HTTP client for a single Soroban RPC endpoint.
#[derive(Clone, Debug)]
pub struct RpcServer {
    url: Url,
    http: Client,
}

impl RpcServer {
    pub fn new(rpc_url: &str, allow_http: bool, timeout: Option<Duration>) -> Result<Self, Error> {
        let url = Url::parse(rpc_url).map_err(|_| Error::InvalidUrl(rpc_url.to_owned()))?;
        match url.scheme() {
            "https" => {}
            "http" if allow_http => {}
            "http" => return Err(Error::InsecureTransport(rpc_url.to_owned())),
            _ => return Err(Error::InvalidUrl(rpc_url.to_owned())),
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url,
            http: builder.build()?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, Error> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        tracing::trace!(url = %self.url, method, "rpc request");

        let response: RpcEnvelope<T> = self
            .http
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = response.error {
            return Err(Error::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        response.result.ok_or_else(|| Error::Rpc {
            code: 0,
            message: format!("{method} returned neither result nor error"),
        })
    }
}

impl SimulateTransaction for RpcServer {
    async fn simulate_transaction(
        &self,
        envelope: &TransactionEnvelope,
    ) -> Result<SimulateTransactionResponse, Error> {
        let transaction = STANDARD.encode(envelope.to_xdr(Limits::none())?);
        self.call(
            "simulateTransaction",
            serde_json::json!({ "transaction": transaction }),
        )
        .await
    }
}
