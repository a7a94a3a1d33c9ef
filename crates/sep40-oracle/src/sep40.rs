use core::future::Future;

use crate::{Asset, Error, PriceData};

/// Oracle Consumer Interface from SEP-0040, read through simulation
pub trait Sep40 {
    /// Return all assets quoted by the price feed
    fn assets(&self) -> impl Future<Output = Result<Vec<Asset>, Error>> + Send;

    /// Return the base asset the price is reported in
    fn base(&self) -> impl Future<Output = Result<Asset, Error>> + Send;

    /// Return the number of decimals for all assets quoted by the oracle
    fn decimals(&self) -> impl Future<Output = Result<u32, Error>> + Send;

    /// Get the most recent price for an asset
    fn last_price(&self, asset: &Asset) -> impl Future<Output = Result<PriceData, Error>> + Send;

    /// Get price in base asset at specific timestamp
    fn price(
        &self,
        asset: &Asset,
        timestamp: u64,
    ) -> impl Future<Output = Result<PriceData, Error>> + Send;

    /// Get last N price records, most recent first
    fn prices(
        &self,
        asset: &Asset,
        records: u32,
    ) -> impl Future<Output = Result<Vec<PriceData>, Error>> + Send;

    /// Return default tick period timeframe (in seconds)
    fn resolution(&self) -> impl Future<Output = Result<u32, Error>> + Send;
}
