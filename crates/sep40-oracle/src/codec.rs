//! Conversion between SEP-40 values and the contract host's `ScVal` wire form.
//!
//! Assets travel as the `#[contracttype]` encoding of a two-variant enum:
//! `Vec[Symbol(tag), payload]`, where the payload of `Stellar` is an address
//! and the payload of `Other` is a symbol. Price records travel as a map keyed
//! by field name.

use core::str::FromStr;

use soroban_sdk::xdr::{Int128Parts, ScAddress, ScMap, ScSymbol, ScVal, ScVec, StringM, VecM};

use crate::{Asset, Error, PriceData};

const STELLAR_TAG: &str = "Stellar";
const OTHER_TAG: &str = "Other";

pub fn encode_asset(asset: &Asset) -> Result<ScVal, Error> {
    let payload = match asset {
        Asset::Stellar(address) => ScVal::Address(parse_address(address)?),
        Asset::Other(code) => encode_symbol(code)?,
    };
    Ok(ScVal::Vec(Some(ScVec(VecM::try_from(vec![
        encode_symbol(asset.tag())?,
        payload,
    ])?))))
}

pub fn encode_symbol(symbol: &str) -> Result<ScVal, Error> {
    Ok(ScVal::Symbol(ScSymbol(StringM::try_from(symbol)?)))
}

pub fn encode_u32(value: u32) -> ScVal {
    ScVal::U32(value)
}

pub fn encode_u64(value: u64) -> ScVal {
    ScVal::U64(value)
}

/// Parses a `G...` account or `C...` contract strkey.
pub fn parse_address(address: &str) -> Result<ScAddress, Error> {
    ScAddress::from_str(address).map_err(|_| Error::InvalidAddress(address.to_owned()))
}

pub fn decode_asset(val: &ScVal) -> Result<Asset, Error> {
    let [tag, payload] = items(val, "asset")? else {
        return Err(unexpected("two-element asset vector", val));
    };
    match decode_symbol(tag)?.as_str() {
        STELLAR_TAG => match payload {
            ScVal::Address(address) => Ok(Asset::Stellar(address.to_string())),
            other => Err(unexpected("asset address", other)),
        },
        OTHER_TAG => Ok(Asset::Other(decode_symbol(payload)?)),
        _ => Err(unexpected("Stellar or Other asset tag", tag)),
    }
}

pub fn decode_assets(val: &ScVal) -> Result<Vec<Asset>, Error> {
    items(val, "asset list")?.iter().map(decode_asset).collect()
}

pub fn decode_u32(val: &ScVal) -> Result<u32, Error> {
    match val {
        ScVal::U32(value) => Ok(*value),
        other => Err(unexpected("u32", other)),
    }
}

pub fn decode_price_data(val: &ScVal) -> Result<PriceData, Error> {
    let ScVal::Map(Some(ScMap(entries))) = val else {
        return Err(unexpected("price data map", val));
    };

    let mut price = None;
    let mut timestamp = None;
    for entry in entries.as_slice() {
        match decode_symbol(&entry.key)?.as_str() {
            "price" => price = Some(decode_i128(&entry.val)?),
            "timestamp" => timestamp = Some(decode_u64(&entry.val)?),
            _ => {}
        }
    }

    match (price, timestamp) {
        (Some(price), Some(timestamp)) => Ok(PriceData { price, timestamp }),
        _ => Err(unexpected("price data with price and timestamp", val)),
    }
}

pub fn decode_prices(val: &ScVal) -> Result<Vec<PriceData>, Error> {
    items(val, "price data list")?
        .iter()
        .map(decode_price_data)
        .collect()
}

/// Maps the contract's `None` (a void value) to `None`, anything else through `decode`.
pub fn decode_option<T>(
    val: &ScVal,
    decode: impl FnOnce(&ScVal) -> Result<T, Error>,
) -> Result<Option<T>, Error> {
    match val {
        ScVal::Void => Ok(None),
        other => decode(other).map(Some),
    }
}

fn decode_symbol(val: &ScVal) -> Result<String, Error> {
    match val {
        ScVal::Symbol(symbol) => Ok(symbol.0.to_utf8_string()?),
        other => Err(unexpected("symbol", other)),
    }
}

fn decode_i128(val: &ScVal) -> Result<i128, Error> {
    match val {
        ScVal::I128(Int128Parts { hi, lo }) => Ok(((*hi as i128) << 64) | (*lo as i128)),
        other => Err(unexpected("i128", other)),
    }
}

fn decode_u64(val: &ScVal) -> Result<u64, Error> {
    match val {
        ScVal::U64(value) => Ok(*value),
        other => Err(unexpected("u64", other)),
    }
}

fn items<'a>(val: &'a ScVal, expected: &'static str) -> Result<&'a [ScVal], Error> {
    match val {
        ScVal::Vec(Some(ScVec(items))) => Ok(items.as_slice()),
        other => Err(unexpected(expected, other)),
    }
}

fn unexpected(expected: &'static str, found: &ScVal) -> Error {
    Error::UnexpectedValue {
        expected,
        found: found.name().to_owned(),
    }
}
