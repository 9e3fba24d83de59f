use crate::error::ContractError;
use crate::handler::{
    commit, get_available, get_commitment, get_commitment_timestamp, get_max_commitment_age,
    get_min_commitment_age, get_min_registration_duration, get_owner, get_referral_fee,
    get_registrar, get_rent_price_response, get_token_id, get_valid, register, renew, renew_all,
    set_price_oracle, set_referral_fee, set_referrers_acl, withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG, MAX_REFERRAL_FEE_BPS};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult};
use cw2::set_contract_version;

const CONTRACT_NAME: &str = "crates.io:cns-controller";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.min_commitment_age >= msg.max_commitment_age {
        return Err(ContractError::InvalidCommitmentAges {
            min: msg.min_commitment_age,
            max: msg.max_commitment_age,
        });
    }
    let referral_fee_bps = msg.referral_fee_bps.unwrap_or(0);
    if referral_fee_bps > MAX_REFERRAL_FEE_BPS {
        return Err(ContractError::InvalidReferralFee {
            basis_points: referral_fee_bps,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let registrar_address = deps.api.addr_canonicalize(msg.registrar_address.as_str())?;
    let price_oracle_address = deps
        .api
        .addr_canonicalize(msg.price_oracle_address.as_str())?;
    let referrers_acl_address = deps
        .api
        .addr_canonicalize(msg.referrers_acl_address.as_str())?;
    let owner = deps.api.addr_canonicalize(info.sender.as_str())?;

    CONFIG.save(
        deps.storage,
        &Config {
            max_commitment_age: msg.max_commitment_age,
            min_commitment_age: msg.min_commitment_age,
            min_registration_duration: msg.min_registration_duration,
            referral_fee_bps,
            registrar_address,
            price_oracle_address,
            referrers_acl_address,
            owner,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Commit { commitment } => commit(deps, env, info, commitment),
        ExecuteMsg::Register {
            label,
            owner,
            duration,
            secret,
        } => register(
            deps, env, info, label, owner, duration, secret, None, None, None,
        ),
        ExecuteMsg::RegisterWithConfig {
            label,
            owner,
            duration,
            secret,
            resolver,
            address,
        } => register(
            deps, env, info, label, owner, duration, secret, resolver, address, None,
        ),
        ExecuteMsg::RegisterWithReferrer {
            label,
            owner,
            duration,
            secret,
            referrer,
            resolver,
            address,
        } => register(
            deps,
            env,
            info,
            label,
            owner,
            duration,
            secret,
            resolver,
            address,
            Some(referrer),
        ),
        ExecuteMsg::Renew { label, duration } => renew(deps, env, info, label, duration, None),
        ExecuteMsg::RenewWithReferrer {
            label,
            duration,
            referrer,
        } => renew(deps, env, info, label, duration, Some(referrer)),
        ExecuteMsg::RenewAll {
            labels,
            duration,
            referrer,
        } => renew_all(deps, env, info, labels, duration, referrer),

        // Only owner
        ExecuteMsg::SetReferralFee { basis_points } => {
            set_referral_fee(deps, env, info, basis_points)
        }
        ExecuteMsg::SetReferrersAcl { address } => set_referrers_acl(deps, env, info, address),
        ExecuteMsg::SetPriceOracle { address } => set_price_oracle(deps, env, info, address),
        ExecuteMsg::Withdraw {} => withdraw(deps, env, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Valid { label } => to_binary(&get_valid(&label)?),
        QueryMsg::Available { label } => to_binary(&get_available(deps, &label)?),
        QueryMsg::MakeCommitment {
            label,
            owner,
            secret,
        } => to_binary(
            &get_commitment(&label, &owner, &secret, &None, &None)
                .map_err(|err| StdError::generic_err(err.to_string()))?,
        ),
        QueryMsg::MakeCommitmentWithConfig {
            label,
            owner,
            secret,
            resolver,
            address,
        } => to_binary(
            &get_commitment(&label, &owner, &secret, &resolver, &address)
                .map_err(|err| StdError::generic_err(err.to_string()))?,
        ),
        QueryMsg::CommitmentTimestamp { commitment } => {
            to_binary(&get_commitment_timestamp(deps, commitment)?)
        }
        QueryMsg::RentPrice { label, duration } => {
            to_binary(&get_rent_price_response(deps, label, duration)?)
        }
        QueryMsg::MinCommitmentAge {} => to_binary(&get_min_commitment_age(deps)?),
        QueryMsg::MaxCommitmentAge {} => to_binary(&get_max_commitment_age(deps)?),
        QueryMsg::MinRegistrationDuration {} => to_binary(&get_min_registration_duration(deps)?),
        QueryMsg::ReferralFee {} => to_binary(&get_referral_fee(deps)?),
        QueryMsg::Owner {} => to_binary(&get_owner(deps)?),
        QueryMsg::Registrar {} => to_binary(&get_registrar(deps)?),
        QueryMsg::GetTokenId { label } => to_binary(&get_token_id(&label)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
