//! Account handlers
//!
//! CRUD endpoints for the customer+account pair, plus the operational
//! build-info and contact-info endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::config::ContactInfo;
use crate::dto::accounts::{
    CreateCustomerRequest, CustomerDetailsResponse, MobileNumberQuery, StatusResponse,
    UpdateCustomerRequest,
};
use crate::error::ApiError;
use crate::AppState;

const STATUS_201: &str = "201";
const MESSAGE_201: &str = "Account created successfully";
const STATUS_200: &str = "200";
const MESSAGE_200: &str = "Request processed successfully";
const STATUS_417: &str = "417";
const MESSAGE_417_UPDATE: &str = "Update operation failed. Please try again or contact Dev team";

/// Creates a new customer and account
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    request.validate()?;
    state.service.create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new(STATUS_201, MESSAGE_201)),
    ))
}

/// Fetches customer and account details by mobile number
pub async fn fetch_account(
    State(state): State<AppState>,
    Query(query): Query<MobileNumberQuery>,
) -> Result<Json<CustomerDetailsResponse>, ApiError> {
    query.validate()?;
    let details = state.service.fetch(&query.mobile_number).await?;
    Ok(Json(details.into()))
}

/// Updates customer and account details by account number
///
/// Responds 417 when the request carried no account sub-object, matching
/// the "nothing to update" contract.
pub async fn update_account(
    State(state): State<AppState>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    request.validate()?;
    let updated = state.service.update(request.into_details()?).await?;
    if updated {
        Ok((
            StatusCode::OK,
            Json(StatusResponse::new(STATUS_200, MESSAGE_200)),
        ))
    } else {
        Ok((
            StatusCode::EXPECTATION_FAILED,
            Json(StatusResponse::new(STATUS_417, MESSAGE_417_UPDATE)),
        ))
    }
}

/// Deletes the customer and account bound to a mobile number
pub async fn delete_account(
    State(state): State<AppState>,
    Query(query): Query<MobileNumberQuery>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    query.validate()?;
    state.service.delete(&query.mobile_number).await?;
    Ok((
        StatusCode::OK,
        Json(StatusResponse::new(STATUS_200, MESSAGE_200)),
    ))
}

/// Returns the deployed build version
pub async fn build_info() -> Json<String> {
    Json(env!("CARGO_PKG_VERSION").to_string())
}

/// Returns the configured contact information
pub async fn contact_info(State(state): State<AppState>) -> Json<ContactInfo> {
    Json(state.config.contact.clone())
}
