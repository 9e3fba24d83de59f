use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotAuthorized: Sender is {sender}, but owner is {owner}.")]
    NotAuthorized { sender: String, owner: String },

    #[error("InvalidLabel: {label:?} is not registrable.")]
    InvalidLabel { label: String },

    #[error("InvalidConfig: an address cannot be set without a resolver.")]
    InvalidConfig {},

    #[error("InvalidCommitmentAges: min {min} must be lower than max {max}.")]
    InvalidCommitmentAges { min: u64, max: u64 },

    #[error("InvalidReferralFee: {basis_points} exceeds 10000 basis points.")]
    InvalidReferralFee { basis_points: u64 },

    #[error("CommitmentTooNew: The commitment {commitment} is still live until {valid_until}. Current time is {current}.")]
    CommitmentTooNew {
        commitment: String,
        valid_until: u64,
        current: u64,
    },

    #[error("CommitmentWindowInvalid: No consumable commitment {commitment} at {current}.")]
    CommitmentWindowInvalid { commitment: String, current: u64 },

    #[error("NameUnavailable: {label} already has a live lease.")]
    NameUnavailable { label: String },

    #[error("NameNotRegistered: {label} has no renewable lease.")]
    NameNotRegistered { label: String },

    #[error("DurationTooShort: {duration} is below the minimum {min_duration}.")]
    DurationTooShort { duration: u64, min_duration: u64 },

    #[error("InsufficientValue: Tendered {tendered}, but {required} is required.")]
    InsufficientValue {
        tendered: Uint128,
        required: Uint128,
    },

    #[error("ReferrerNotApproved: {referrer} is not on the referrer list.")]
    ReferrerNotApproved { referrer: String },
}
