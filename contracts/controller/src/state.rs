use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub max_commitment_age: u64,
    pub min_commitment_age: u64,
    pub min_registration_duration: u64,
    /// Fraction of collected rent forwarded to an approved referrer,
    /// in basis points (0..=10000).
    pub referral_fee_bps: u64,
    pub registrar_address: CanonicalAddr,
    pub price_oracle_address: CanonicalAddr,
    pub referrers_acl_address: CanonicalAddr,
    pub owner: CanonicalAddr,
}

pub const FEE_DENOM: &str = "uusd";
pub const MAX_REFERRAL_FEE_BPS: u64 = 10_000;

pub const CONFIG: Item<Config> = Item::new("CONFIG");
pub const COMMITMENTS: Map<String, u64> = Map::new("COMMITMENTS");
