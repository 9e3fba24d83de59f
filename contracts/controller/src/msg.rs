use cosmwasm_std::{Addr, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub registrar_address: String,
    pub price_oracle_address: String,
    pub referrers_acl_address: String,
    pub max_commitment_age: u64,
    pub min_commitment_age: u64,
    pub min_registration_duration: u64,
    /// Referral cut in basis points, defaults to 0 when omitted.
    pub referral_fee_bps: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Commit {
        commitment: String,
    },
    Register {
        label: String,
        owner: String,
        duration: u64,
        secret: String,
    },
    RegisterWithConfig {
        label: String,
        owner: String,
        duration: u64,
        secret: String,
        resolver: Option<String>,
        address: Option<String>,
    },
    RegisterWithReferrer {
        label: String,
        owner: String,
        duration: u64,
        secret: String,
        referrer: String,
        resolver: Option<String>,
        address: Option<String>,
    },
    Renew {
        label: String,
        duration: u64,
    },
    RenewWithReferrer {
        label: String,
        duration: u64,
        referrer: String,
    },
    RenewAll {
        labels: Vec<String>,
        duration: u64,
        referrer: Option<String>,
    },

    // Only owner
    SetReferralFee {
        basis_points: u64,
    },
    SetReferrersAcl {
        address: String,
    },
    SetPriceOracle {
        address: String,
    },
    Withdraw {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Valid {
        label: String,
    },
    Available {
        label: String,
    },
    MakeCommitment {
        label: String,
        owner: String,
        secret: String,
    },
    MakeCommitmentWithConfig {
        label: String,
        owner: String,
        secret: String,
        resolver: Option<String>,
        address: Option<String>,
    },
    /// Timestamp of a pending commitment, 0 if none was recorded.
    CommitmentTimestamp {
        commitment: String,
    },
    RentPrice {
        label: String,
        duration: u64,
    },
    MinCommitmentAge {},
    MaxCommitmentAge {},
    MinRegistrationDuration {},
    ReferralFee {},
    Owner {},
    Registrar {},
    GetTokenId {
        label: String,
    },
}

// We define a custom struct for each query response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ValidResponse {
    pub valid: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AvailableResponse {
    pub available: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CommitmentResponse {
    pub commitment: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CommitmentTimestampResponse {
    pub timestamp: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RentPriceResponse {
    pub price: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MaxCommitmentAgeResponse {
    pub age: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MinCommitmentAgeResponse {
    pub age: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MinRegistrationDurationResponse {
    pub duration: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ReferralFeeResponse {
    pub basis_points: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RegistrarResponse {
    pub registrar_address: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenIdResponse {
    pub token_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
