use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Interface of the name ledger (registrar) contract. The ledger is the
/// authoritative store of `token_id -> (owner, expiry)`; the register and
/// renew messages are restricted to controllers on its allow-list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Register {
        id: String,
        owner: String,
        name: String,
        duration: u64,
    },
    Renew {
        id: String,
        duration: u64,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// True iff the name is unregistered, or its lease expired past the
    /// ledger's grace period.
    IsAvailable { id: String },
    GetExpires { id: String },
    GetBaseNode {},
    GetRegistry {},
    GetGracePeriod {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsAvailableResponse {
    pub available: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GetExpiresResponse {
    pub expires: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GetBaseNodeResponse {
    pub base_node: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GetRegistryResponse {
    pub registry: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GetGracePeriodResponse {
    pub grace_period: u64,
}
