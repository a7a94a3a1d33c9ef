use soroban_sdk::xdr::{ScAddress, ScVal};

use crate::codec::{self, decode_option};
use crate::invoke::{self, ASSETS, BASE, DECIMALS, LAST_PRICE, PRICE, PRICES, RESOLUTION};
use crate::rpc::RpcServer;
use crate::simulation::{self, SimAccount, SimulateTransaction};
use crate::{Asset, Error, OracleConfig, PriceData, Sep40};

/// SEP-40 oracle contract read through RPC simulation.
///
/// Holds no mutable state; concurrent queries share only the contract
/// address, the RPC handle and the placeholder account.
#[derive(Clone, Debug)]
pub struct Oracle<R = RpcServer> {
    contract: ScAddress,
    rpc: R,
    sim_account: SimAccount,
}

impl Oracle<RpcServer> {
    pub fn new(config: &OracleConfig) -> Result<Self, Error> {
        let rpc = RpcServer::new(&config.rpc_url, config.allow_http, config.timeout())?;
        Self::with_rpc(&config.oracle_id, rpc, SimAccount::new(&config.sim_account)?)
    }
}

impl<R: SimulateTransaction> Oracle<R> {
    pub fn with_rpc(oracle_id: &str, rpc: R, sim_account: SimAccount) -> Result<Self, Error> {
        let contract = codec::parse_address(oracle_id)?;
        if !matches!(contract, ScAddress::Contract(_)) {
            return Err(Error::InvalidAddress(oracle_id.to_owned()));
        }
        Ok(Self {
            contract,
            rpc,
            sim_account,
        })
    }

    pub fn contract(&self) -> &ScAddress {
        &self.contract
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    pub fn sim_account(&self) -> &SimAccount {
        &self.sim_account
    }

    async fn call(&self, method: &'static str, args: Vec<ScVal>) -> Result<ScVal, Error> {
        let operation = invoke::contract_call(&self.contract, method, args)?;
        simulation::simulate(&self.rpc, &self.sim_account, method, operation).await
    }
}

impl<R: SimulateTransaction + Sync> Sep40 for Oracle<R> {
    async fn assets(&self) -> Result<Vec<Asset>, Error> {
        codec::decode_assets(&self.call(ASSETS, vec![]).await?)
    }

    async fn base(&self) -> Result<Asset, Error> {
        codec::decode_asset(&self.call(BASE, vec![]).await?)
    }

    async fn decimals(&self) -> Result<u32, Error> {
        codec::decode_u32(&self.call(DECIMALS, vec![]).await?)
    }

    async fn last_price(&self, asset: &Asset) -> Result<PriceData, Error> {
        let args = vec![codec::encode_asset(asset)?];
        let retval = self.call(LAST_PRICE, args).await?;
        decode_option(&retval, codec::decode_price_data)?.ok_or_else(|| Error::NoDataAvailable {
            method: LAST_PRICE,
            asset: asset.clone(),
            timestamp: None,
        })
    }

    async fn price(&self, asset: &Asset, timestamp: u64) -> Result<PriceData, Error> {
        let args = vec![codec::encode_asset(asset)?, codec::encode_u64(timestamp)];
        let retval = self.call(PRICE, args).await?;
        decode_option(&retval, codec::decode_price_data)?.ok_or_else(|| Error::NoDataAvailable {
            method: PRICE,
            asset: asset.clone(),
            timestamp: Some(timestamp),
        })
    }

    async fn prices(&self, asset: &Asset, records: u32) -> Result<Vec<PriceData>, Error> {
        let args = vec![codec::encode_asset(asset)?, codec::encode_u32(records)];
        let retval = self.call(PRICES, args).await?;
        decode_option(&retval, codec::decode_prices)?.ok_or_else(|| Error::NoDataAvailable {
            method: PRICES,
            asset: asset.clone(),
            timestamp: None,
        })
    }

    async fn resolution(&self) -> Result<u32, Error> {
        codec::decode_u32(&self.call(RESOLUTION, vec![]).await?)
    }
}
