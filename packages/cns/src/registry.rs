use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Interface of the registry contract consumed by the controller. Only the
/// resolver assignment is needed here; record ownership is handled by the
/// registrar on registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetResolver {
        node: Vec<u8>,
        resolver: Option<String>,
    },
}
