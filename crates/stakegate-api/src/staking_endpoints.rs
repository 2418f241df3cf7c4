// crates/stakegate-api/src/staking_endpoints.rs

use {
    alloy_primitives::Address,
    axum::{
        extract::{Path, State},
        routing::post,
        Json, Router,
    },
    chrono::{DateTime, Utc},
    serde::Deserialize,
    stakegate_staking::{
        DataDecoded, DepositRequest, MappingResult, MultisigTransactionInfo, StakingCall,
        ValidatorsRequest,
    },
    tracing::debug,
};

use crate::rest::AppState;
use crate::types::{ApiError, ApiResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositBody {
    pub to: String,
    pub value: String,
    #[serde(default)]
    pub is_confirmed: bool,
    #[serde(default)]
    pub deposit_execution_date: Option<DateTime<Utc>>,
}

/// Validator call body; either the decoded call or its raw calldata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorsBody {
    pub to: String,
    pub transaction: MultisigTransactionInfo,
    #[serde(default)]
    pub data_decoded: Option<DataDecoded>,
    #[serde(default)]
    pub data: Option<String>,
}

pub fn create_staking_router() -> Router<AppState> {
    Router::new()
        .route("/chains/:chain_id/native-staking/deposit", post(map_deposit))
        .route(
            "/chains/:chain_id/native-staking/validators-exit",
            post(map_validators_exit),
        )
        .route("/chains/:chain_id/native-staking/withdraw", post(map_withdraw))
}

fn parse_address(to: &str) -> Result<Address, ApiError> {
    to.parse::<Address>()
        .map_err(|e| ApiError::BadRequest(format!("Invalid address {}: {}", to, e)))
}

fn validators_request(chain_id: String, body: ValidatorsBody) -> Result<ValidatorsRequest, ApiError> {
    let to = parse_address(&body.to)?;

    let data_decoded = match (body.data_decoded, body.data) {
        (Some(decoded), _) => decoded,
        (None, Some(data)) => StakingCall::decode_hex(&data)?.to_data_decoded(),
        (None, None) => {
            return Err(ApiError::Unprocessable(
                "Either dataDecoded or data is required".to_string(),
            ))
        }
    };

    Ok(ValidatorsRequest {
        chain_id,
        to,
        transaction: body.transaction,
        data_decoded,
    })
}

async fn map_deposit(
    State(state): State<AppState>,
    Path(chain_id): Path<String>,
    Json(body): Json<DepositBody>,
) -> Result<Json<ApiResponse<MappingResult>>, ApiError> {
    debug!("Mapping deposit to {} on chain {}", body.to, chain_id);

    let request = DepositRequest {
        chain_id,
        to: parse_address(&body.to)?,
        value: body.value,
        is_confirmed: body.is_confirmed,
        deposit_execution_date: body.deposit_execution_date,
    };

    let info = state.mapper.map_deposit_info(&request).await?;
    Ok(Json(ApiResponse::success(info.into())))
}

async fn map_validators_exit(
    State(state): State<AppState>,
    Path(chain_id): Path<String>,
    Json(body): Json<ValidatorsBody>,
) -> Result<Json<ApiResponse<MappingResult>>, ApiError> {
    debug!("Mapping validators exit on {} for chain {}", body.to, chain_id);

    let request = validators_request(chain_id, body)?;
    let info = state.mapper.map_validators_exit_info(&request).await?;
    Ok(Json(ApiResponse::success(info.into())))
}

async fn map_withdraw(
    State(state): State<AppState>,
    Path(chain_id): Path<String>,
    Json(body): Json<ValidatorsBody>,
) -> Result<Json<ApiResponse<MappingResult>>, ApiError> {
    debug!("Mapping withdrawal on {} for chain {}", body.to, chain_id);

    let request = validators_request(chain_id, body)?;
    let info = state.mapper.map_withdraw_info(&request).await?;
    Ok(Json(ApiResponse::success(info.into())))
}
