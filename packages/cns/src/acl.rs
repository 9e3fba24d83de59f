use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Interface of the generic access list used for referrer approval. The
/// list itself is administered out of band; the controller only ever asks
/// the membership question.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetAccess { address: String, allowed: bool },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    IsApproved { address: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsApprovedResponse {
    pub approved: bool,
}
