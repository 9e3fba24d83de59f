use crate::error::ContractError;
use crate::msg::{
    AvailableResponse, CommitmentResponse, CommitmentTimestampResponse, MaxCommitmentAgeResponse,
    MinCommitmentAgeResponse, MinRegistrationDurationResponse, OwnerResponse, ReferralFeeResponse,
    RegistrarResponse, RentPriceResponse, TokenIdResponse, ValidResponse,
};
use crate::state::{COMMITMENTS, CONFIG, FEE_DENOM, MAX_REFERRAL_FEE_BPS};
use cns::acl::{IsApprovedResponse, QueryMsg as AclQueryMsg};
use cns::oracle::{PriceResponse, QueryMsg as OracleQueryMsg};
use cns::registrar::{
    ExecuteMsg as RegistrarExecuteMsg, GetBaseNodeResponse, GetExpiresResponse,
    GetRegistryResponse, IsAvailableResponse, QueryMsg as RegistrarQueryMsg,
};
use cns::registry::ExecuteMsg as RegistryExecuteMsg;
use cns::resolver::ExecuteMsg as ResolverExecuteMsg;
use cns::utils::{get_label_from_name, get_token_id_from_label, keccak256};
use cosmwasm_std::{
    attr, to_binary, Attribute, BalanceResponse, BankMsg, BankQuery, Coin, CosmosMsg, Deps,
    DepsMut, Env, MessageInfo, QueryRequest, Response, StdError, StdResult, Uint128, WasmMsg,
    WasmQuery,
};
use hex;

fn only_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.owner {
        return Err(ContractError::NotAuthorized {
            sender: info.sender.to_string(),
            owner: deps.api.addr_humanize(&config.owner)?.to_string(),
        });
    }
    Ok(())
}

/// A label is registrable iff it carries at least three Unicode code
/// points. Surrogate-pair characters such as emoji count once.
pub fn valid_label(label: &str) -> bool {
    label.chars().count() >= 3
}

fn validate_label(label: &str) -> Result<(), ContractError> {
    if !valid_label(label) {
        return Err(ContractError::InvalidLabel {
            label: label.to_string(),
        });
    }
    Ok(())
}

fn tendered_funds(info: &MessageInfo) -> Uint128 {
    info.funds
        .iter()
        .find(|coin| coin.denom == FEE_DENOM)
        .map(|coin| coin.amount)
        .unwrap_or_else(Uint128::zero)
}

fn send_funds(to_address: String, amount: Uint128) -> CosmosMsg {
    CosmosMsg::Bank(BankMsg::Send {
        to_address,
        amount: vec![Coin {
            denom: String::from(FEE_DENOM),
            amount,
        }],
    })
}

pub fn get_commitment(
    label: &String,
    owner: &String,
    secret: &String,
    resolver: &Option<String>,
    address: &Option<String>,
) -> Result<CommitmentResponse, ContractError> {
    // An address without a resolver could never be set.
    if address.is_some() && resolver.is_none() {
        return Err(ContractError::InvalidConfig {});
    }

    let label_hash = get_label_from_name(label);
    let arr = [
        &label_hash[..],
        owner.as_bytes(),
        resolver.as_deref().unwrap_or("").as_bytes(),
        address.as_deref().unwrap_or("").as_bytes(),
        secret.as_bytes(),
    ]
    .concat();

    Ok(CommitmentResponse {
        commitment: hex::encode(keccak256(&arr)),
    })
}

pub fn commit(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    commitment: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let current = env.block.time.seconds();

    // A commitment still inside its window cannot be overwritten, so nobody
    // can grief a registrant by restarting their reveal clock.
    if let Some(recorded) = COMMITMENTS.may_load(deps.storage, commitment.clone())? {
        if recorded + config.max_commitment_age > current {
            return Err(ContractError::CommitmentTooNew {
                commitment,
                valid_until: recorded + config.max_commitment_age,
                current,
            });
        }
    }

    COMMITMENTS.save(deps.storage, commitment.clone(), &current)?;

    Ok(Response::new()
        .add_attribute("method", "commit")
        .add_attribute("commitment", commitment))
}

pub fn consume_commitment(
    deps: DepsMut,
    env: Env,
    commitment: String,
) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let current = env.block.time.seconds();

    let recorded = COMMITMENTS
        .may_load(deps.storage, commitment.clone())?
        .ok_or_else(|| ContractError::CommitmentWindowInvalid {
            commitment: commitment.clone(),
            current,
        })?;

    if recorded + config.min_commitment_age > current
        || recorded + config.max_commitment_age < current
    {
        return Err(ContractError::CommitmentWindowInvalid {
            commitment,
            current,
        });
    }

    COMMITMENTS.remove(deps.storage, commitment);
    Ok(())
}

pub fn get_rent_price(deps: Deps, label: &String, duration: u64) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    let oracle_address = deps
        .api
        .addr_humanize(&config.price_oracle_address)?
        .to_string();
    let price_response: PriceResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: oracle_address,
            msg: to_binary(&OracleQueryMsg::Price {
                name: label.clone(),
                duration,
            })?,
        }))?;
    Ok(price_response.price)
}

pub fn is_available_name(deps: Deps, label: &String) -> StdResult<bool> {
    let id = get_token_id_from_label(&get_label_from_name(label));
    let config = CONFIG.load(deps.storage)?;
    let registrar_address = deps
        .api
        .addr_humanize(&config.registrar_address)?
        .to_string();
    let is_available_response: IsAvailableResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: registrar_address,
            msg: to_binary(&RegistrarQueryMsg::IsAvailable { id })?,
        }))?;
    Ok(is_available_response.available)
}

fn get_name_expires(deps: Deps, label: &String) -> StdResult<u64> {
    let id = get_token_id_from_label(&get_label_from_name(label));
    let config = CONFIG.load(deps.storage)?;
    let registrar_address = deps
        .api
        .addr_humanize(&config.registrar_address)?
        .to_string();
    let get_expires_response: GetExpiresResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: registrar_address,
            msg: to_binary(&RegistrarQueryMsg::GetExpires { id })?,
        }))?;
    Ok(get_expires_response.expires)
}

fn get_nodehash(deps: Deps, label_hash: &[u8]) -> StdResult<Vec<u8>> {
    let config = CONFIG.load(deps.storage)?;
    let registrar_address = deps
        .api
        .addr_humanize(&config.registrar_address)?
        .to_string();
    let get_base_node_response: GetBaseNodeResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: registrar_address,
            msg: to_binary(&RegistrarQueryMsg::GetBaseNode {})?,
        }))?;
    let base_node = hex::decode(get_base_node_response.base_node)
        .map_err(|_| StdError::generic_err("registrar returned a malformed base node"))?;

    let arr = [&base_node[..], label_hash].concat();
    Ok(keccak256(&arr))
}

fn get_registry_address(deps: Deps) -> StdResult<String> {
    let config = CONFIG.load(deps.storage)?;
    let registrar_address = deps
        .api
        .addr_humanize(&config.registrar_address)?
        .to_string();
    let get_registry_response: GetRegistryResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: registrar_address,
            msg: to_binary(&RegistrarQueryMsg::GetRegistry {})?,
        }))?;
    Ok(get_registry_response.registry.to_string())
}

/// Referral settlement for one paid price. The list approval is mandatory
/// whenever a referrer is supplied; the transfer itself is skipped when
/// the configured fee rounds to zero. The returned attributes form the
/// referral-payment notification and must stay behind the registration or
/// renewal attributes they belong to.
fn settle_referral(
    deps: Deps,
    referrer: &str,
    price: Uint128,
) -> Result<(Option<CosmosMsg>, Vec<Attribute>), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let acl_address = deps
        .api
        .addr_humanize(&config.referrers_acl_address)?
        .to_string();
    let referrer = deps.api.addr_validate(referrer)?;

    let is_approved_response: IsApprovedResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: acl_address,
            msg: to_binary(&AclQueryMsg::IsApproved {
                address: referrer.to_string(),
            })?,
        }))?;
    if !is_approved_response.approved {
        return Err(ContractError::ReferrerNotApproved {
            referrer: referrer.to_string(),
        });
    }

    let fee = price.multiply_ratio(config.referral_fee_bps, MAX_REFERRAL_FEE_BPS);
    if fee.is_zero() {
        return Ok((None, vec![]));
    }

    let attributes = vec![
        attr("referrer", referrer.to_string()),
        attr("referral_amount", fee.to_string()),
    ];
    Ok((Some(send_funds(referrer.to_string(), fee)), attributes))
}

#[allow(clippy::too_many_arguments)]
pub fn register(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    label: String,
    owner: String,
    duration: u64,
    secret: String,
    resolver: Option<String>,
    address: Option<String>,
    referrer: Option<String>,
) -> Result<Response, ContractError> {
    let commitment = get_commitment(&label, &owner, &secret, &resolver, &address)?.commitment;
    consume_commitment(deps.branch(), env.clone(), commitment)?;

    validate_label(&label)?;

    if !is_available_name(deps.as_ref(), &label)? {
        return Err(ContractError::NameUnavailable { label });
    }

    let config = CONFIG.load(deps.storage)?;
    if duration < config.min_registration_duration {
        return Err(ContractError::DurationTooShort {
            duration,
            min_duration: config.min_registration_duration,
        });
    }

    let price = get_rent_price(deps.as_ref(), &label, duration)?;
    let tendered = tendered_funds(&info);
    if tendered < price {
        return Err(ContractError::InsufficientValue {
            tendered,
            required: price,
        });
    }

    let registrar_address = deps
        .api
        .addr_humanize(&config.registrar_address)?
        .to_string();
    let owner = deps.api.addr_validate(&owner)?.to_string();
    let label_hash = get_label_from_name(&label);
    let token_id = get_token_id_from_label(&label_hash);

    let mut messages: Vec<CosmosMsg> = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: registrar_address,
        msg: to_binary(&RegistrarExecuteMsg::Register {
            id: token_id.clone(),
            owner: owner.clone(),
            name: label.clone(),
            duration,
        })?,
        funds: vec![],
    })];

    if let Some(resolver) = resolver.clone() {
        let nodehash = get_nodehash(deps.as_ref(), &label_hash)?;
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: get_registry_address(deps.as_ref())?,
            msg: to_binary(&RegistryExecuteMsg::SetResolver {
                node: nodehash.clone(),
                resolver: Some(resolver.clone()),
            })?,
            funds: vec![],
        }));
        if let Some(address) = address {
            messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: resolver,
                msg: to_binary(&ResolverExecuteMsg::SetAddress {
                    node: nodehash,
                    address,
                })?,
                funds: vec![],
            }));
        }
    }

    let refund = tendered - price;
    if !refund.is_zero() {
        messages.push(send_funds(info.sender.to_string(), refund));
    }

    let expires = env.block.time.seconds() + duration;
    let mut attributes = vec![
        attr("method", "register"),
        attr("label", label),
        attr("owner", owner),
        attr("token_id", token_id),
        attr("expires", expires.to_string()),
        attr("price", price.to_string()),
    ];

    if let Some(referrer) = referrer {
        let (fee_msg, fee_attributes) = settle_referral(deps.as_ref(), &referrer, price)?;
        if let Some(fee_msg) = fee_msg {
            messages.push(fee_msg);
        }
        attributes.extend(fee_attributes);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attributes(attributes))
}

pub fn renew(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    label: String,
    duration: u64,
    referrer: Option<String>,
) -> Result<Response, ContractError> {
    // A name past the ledger's grace window reads as available again and
    // must go through a fresh commit/register cycle instead.
    if is_available_name(deps.as_ref(), &label)? {
        return Err(ContractError::NameNotRegistered { label });
    }

    let price = get_rent_price(deps.as_ref(), &label, duration)?;
    let tendered = tendered_funds(&info);
    if tendered < price {
        return Err(ContractError::InsufficientValue {
            tendered,
            required: price,
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let registrar_address = deps
        .api
        .addr_humanize(&config.registrar_address)?
        .to_string();
    let token_id = get_token_id_from_label(&get_label_from_name(&label));

    // Extension stacks on the stored expiry, never on the clock.
    let expires = get_name_expires(deps.as_ref(), &label)? + duration;

    let mut messages: Vec<CosmosMsg> = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: registrar_address,
        msg: to_binary(&RegistrarExecuteMsg::Renew {
            id: token_id.clone(),
            duration,
        })?,
        funds: vec![],
    })];

    let refund = tendered - price;
    if !refund.is_zero() {
        messages.push(send_funds(info.sender.to_string(), refund));
    }

    let mut attributes = vec![
        attr("method", "renew"),
        attr("label", label),
        attr("token_id", token_id),
        attr("expires", expires.to_string()),
        attr("price", price.to_string()),
    ];

    if let Some(referrer) = referrer {
        let (fee_msg, fee_attributes) = settle_referral(deps.as_ref(), &referrer, price)?;
        if let Some(fee_msg) = fee_msg {
            messages.push(fee_msg);
        }
        attributes.extend(fee_attributes);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attributes(attributes))
}

pub fn renew_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    labels: Vec<String>,
    duration: u64,
    referrer: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registrar_address = deps
        .api
        .addr_humanize(&config.registrar_address)?
        .to_string();

    // Price the whole batch before building a single message so an
    // underpaid call cannot renew a prefix of the list.
    let mut priced: Vec<(String, String, Uint128)> = Vec::with_capacity(labels.len());
    let mut required = Uint128::zero();
    for label in labels {
        if is_available_name(deps.as_ref(), &label)? {
            return Err(ContractError::NameNotRegistered { label });
        }
        let price = get_rent_price(deps.as_ref(), &label, duration)?;
        required = required.checked_add(price).map_err(StdError::overflow)?;
        let token_id = get_token_id_from_label(&get_label_from_name(&label));
        priced.push((label, token_id, price));
    }

    let tendered = tendered_funds(&info);
    if tendered < required {
        return Err(ContractError::InsufficientValue { tendered, required });
    }

    let mut messages: Vec<CosmosMsg> = vec![];
    let mut attributes = vec![
        attr("method", "renew_all"),
        attr("duration", duration.to_string()),
        attr("required", required.to_string()),
    ];
    for (label, token_id, price) in priced {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: registrar_address.clone(),
            msg: to_binary(&RegistrarExecuteMsg::Renew {
                id: token_id,
                duration,
            })?,
            funds: vec![],
        }));
        attributes.push(attr("label", label));
        attributes.push(attr("price", price.to_string()));
        // The fee is computed per label on that label's price.
        if let Some(referrer) = &referrer {
            let (fee_msg, fee_attributes) = settle_referral(deps.as_ref(), referrer, price)?;
            if let Some(fee_msg) = fee_msg {
                messages.push(fee_msg);
            }
            attributes.extend(fee_attributes);
        }
    }

    let refund = tendered - required;
    if !refund.is_zero() {
        messages.push(send_funds(info.sender.to_string(), refund));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attributes(attributes))
}

pub fn set_referral_fee(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    basis_points: u64,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    if basis_points > MAX_REFERRAL_FEE_BPS {
        return Err(ContractError::InvalidReferralFee { basis_points });
    }
    let mut config = CONFIG.load(deps.storage)?;
    config.referral_fee_bps = basis_points;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_referral_fee")
        .add_attribute("basis_points", basis_points.to_string()))
}

pub fn set_referrers_acl(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.referrers_acl_address = deps.api.addr_canonicalize(address.as_str())?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_referrers_acl")
        .add_attribute("referrers_acl_address", address))
}

pub fn set_price_oracle(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.price_oracle_address = deps.api.addr_canonicalize(address.as_str())?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_price_oracle")
        .add_attribute("price_oracle_address", address))
}

pub fn withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;

    let balance_response: BalanceResponse =
        deps.querier.query(&QueryRequest::Bank(BankQuery::Balance {
            address: env.contract.address.to_string(),
            denom: String::from(FEE_DENOM),
        }))?;
    let amount = balance_response.amount.amount;

    Ok(Response::new()
        .add_message(send_funds(info.sender.to_string(), amount))
        .add_attribute("method", "withdraw")
        .add_attribute("amount", amount.to_string()))
}

pub fn get_valid(label: &String) -> StdResult<ValidResponse> {
    Ok(ValidResponse {
        valid: valid_label(label),
    })
}

pub fn get_available(deps: Deps, label: &String) -> StdResult<AvailableResponse> {
    Ok(AvailableResponse {
        available: is_available_name(deps, label)?,
    })
}

pub fn get_commitment_timestamp(
    deps: Deps,
    commitment: String,
) -> StdResult<CommitmentTimestampResponse> {
    let timestamp = COMMITMENTS
        .may_load(deps.storage, commitment)?
        .unwrap_or(0);
    Ok(CommitmentTimestampResponse { timestamp })
}

pub fn get_rent_price_response(
    deps: Deps,
    label: String,
    duration: u64,
) -> StdResult<RentPriceResponse> {
    Ok(RentPriceResponse {
        price: get_rent_price(deps, &label, duration)?,
    })
}

pub fn get_max_commitment_age(deps: Deps) -> StdResult<MaxCommitmentAgeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MaxCommitmentAgeResponse {
        age: config.max_commitment_age,
    })
}

pub fn get_min_commitment_age(deps: Deps) -> StdResult<MinCommitmentAgeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MinCommitmentAgeResponse {
        age: config.min_commitment_age,
    })
}

pub fn get_min_registration_duration(deps: Deps) -> StdResult<MinRegistrationDurationResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MinRegistrationDurationResponse {
        duration: config.min_registration_duration,
    })
}

pub fn get_referral_fee(deps: Deps) -> StdResult<ReferralFeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ReferralFeeResponse {
        basis_points: config.referral_fee_bps,
    })
}

pub fn get_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}

pub fn get_registrar(deps: Deps) -> StdResult<RegistrarResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(RegistrarResponse {
        registrar_address: deps.api.addr_humanize(&config.registrar_address)?,
    })
}

pub fn get_token_id(label: &String) -> StdResult<TokenIdResponse> {
    Ok(TokenIdResponse {
        token_id: get_token_id_from_label(&get_label_from_name(label)),
    })
}
