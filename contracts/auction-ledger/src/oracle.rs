use soroban_sdk::{contractclient, Address, Env};

use crate::errors::Error;
use crate::types::PRICE_DECIMALS;

/// Aggregator-style price source: one latest answer with a fixed number of
/// fractional digits.
#[allow(dead_code)]
#[contractclient(name = "PriceAggregatorClient")]
pub trait PriceAggregator {
    fn latest_answer(env: Env) -> i128;

    fn decimals(env: Env) -> u32;
}

/// Read `oracle` and express its answer with [`PRICE_DECIMALS`] fractional
/// digits.
pub fn latest_price(env: &Env, oracle: &Address) -> Result<i128, Error> {
    let client = PriceAggregatorClient::new(env, oracle);
    let answer = client.latest_answer();
    let decimals = client.decimals();
    rescale(answer, decimals, PRICE_DECIMALS)
}

fn rescale(value: i128, from: u32, to: u32) -> Result<i128, Error> {
    if from == to {
        return Ok(value);
    }
    let factor = 10i128
        .checked_pow(from.abs_diff(to))
        .ok_or(Error::InvalidPrice)?;
    if from < to {
        value.checked_mul(factor).ok_or(Error::InvalidPrice)
    } else {
        Ok(value / factor)
    }
}
