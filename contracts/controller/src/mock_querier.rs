use std::collections::{HashMap, HashSet};

use cns::acl::{IsApprovedResponse, QueryMsg as AclQueryMsg};
use cns::oracle::{PriceResponse, QueryMsg as OracleQueryMsg};
use cns::registrar::{
    GetBaseNodeResponse, GetExpiresResponse, GetGracePeriodResponse, GetRegistryResponse,
    IsAvailableResponse, QueryMsg as RegistrarQueryMsg,
};
use cns::utils::namehash;
use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_binary, from_slice, to_binary, Addr, Coin, ContractResult, Empty, OwnedDeps, Querier,
    QuerierResult, QueryRequest, SystemError, SystemResult, Uint128, WasmQuery,
};

pub const MOCK_REGISTRAR_ADDR: &str = "registrar_address";
pub const MOCK_ORACLE_ADDR: &str = "oracle_address";
pub const MOCK_ACL_ADDR: &str = "acl_address";
pub const MOCK_REGISTRY_ADDR: &str = "registry_address";
pub const MOCK_GRACE_PERIOD: u64 = 2_592_000;

/// Dependencies backed by a querier that plays the registrar, the price
/// oracle and the referrers list.
pub fn mock_dependencies(
    contract_balance: &[Coin],
) -> OwnedDeps<MockStorage, MockApi, WasmMockQuerier> {
    let custom_querier =
        WasmMockQuerier::new(MockQuerier::new(&[(MOCK_CONTRACT_ADDR, contract_balance)]));

    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: custom_querier,
    }
}

pub struct WasmMockQuerier {
    base: MockQuerier<Empty>,
    // token id to expiry, as the registrar would hold it
    registered: HashMap<String, u64>,
    approved_referrers: HashSet<String>,
    price_per_second: u128,
}

impl Querier for WasmMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_slice(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {}", e),
                    request: bin_request.into(),
                })
            }
        };
        self.handle_query(&request)
    }
}

impl WasmMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        WasmMockQuerier {
            base,
            registered: HashMap::new(),
            approved_referrers: HashSet::new(),
            price_per_second: 1,
        }
    }

    pub fn register_name(&mut self, token_id: &str, expires: u64) {
        self.registered.insert(token_id.to_string(), expires);
    }

    pub fn set_approved_referrer(&mut self, address: &str) {
        self.approved_referrers.insert(address.to_string());
    }

    pub fn set_price_per_second(&mut self, price_per_second: u128) {
        self.price_per_second = price_per_second;
    }

    fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                match contract_addr.as_str() {
                    MOCK_REGISTRAR_ADDR => self.handle_registrar_query(msg),
                    MOCK_ORACLE_ADDR => self.handle_oracle_query(msg),
                    MOCK_ACL_ADDR => self.handle_acl_query(msg),
                    _ => SystemResult::Err(SystemError::NoSuchContract {
                        addr: contract_addr.clone(),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }

    fn handle_registrar_query(&self, msg: &cosmwasm_std::Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(RegistrarQueryMsg::IsAvailable { id }) => {
                SystemResult::Ok(ContractResult::from(to_binary(&IsAvailableResponse {
                    available: !self.registered.contains_key(&id),
                })))
            }
            Ok(RegistrarQueryMsg::GetExpires { id }) => {
                SystemResult::Ok(ContractResult::from(to_binary(&GetExpiresResponse {
                    expires: self.registered.get(&id).copied().unwrap_or(0),
                })))
            }
            Ok(RegistrarQueryMsg::GetBaseNode {}) => {
                SystemResult::Ok(ContractResult::from(to_binary(&GetBaseNodeResponse {
                    base_node: hex::encode(namehash("cns")),
                })))
            }
            Ok(RegistrarQueryMsg::GetRegistry {}) => {
                SystemResult::Ok(ContractResult::from(to_binary(&GetRegistryResponse {
                    registry: Addr::unchecked(MOCK_REGISTRY_ADDR),
                })))
            }
            Ok(RegistrarQueryMsg::GetGracePeriod {}) => {
                SystemResult::Ok(ContractResult::from(to_binary(&GetGracePeriodResponse {
                    grace_period: MOCK_GRACE_PERIOD,
                })))
            }
            Err(e) => SystemResult::Err(SystemError::InvalidRequest {
                error: format!("Parsing registrar query: {}", e),
                request: msg.clone().into(),
            }),
        }
    }

    fn handle_oracle_query(&self, msg: &cosmwasm_std::Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(OracleQueryMsg::Price { name: _, duration }) => {
                SystemResult::Ok(ContractResult::from(to_binary(&PriceResponse {
                    price: Uint128::from(duration as u128 * self.price_per_second),
                })))
            }
            Err(e) => SystemResult::Err(SystemError::InvalidRequest {
                error: format!("Parsing oracle query: {}", e),
                request: msg.clone().into(),
            }),
        }
    }

    fn handle_acl_query(&self, msg: &cosmwasm_std::Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(AclQueryMsg::IsApproved { address }) => {
                SystemResult::Ok(ContractResult::from(to_binary(&IsApprovedResponse {
                    approved: self.approved_referrers.contains(&address),
                })))
            }
            Err(e) => SystemResult::Err(SystemError::InvalidRequest {
                error: format!("Parsing referrers list query: {}", e),
                request: msg.clone().into(),
            }),
        }
    }
}
