//! Invoice HTTP handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;

use crate::core::{ApiError, ApiResult, AppJson, StatusResponse};
use crate::server::AppState;

use super::model::{
    CreateInvoice, InvoiceDetailResponse, InvoiceListResponse, InvoiceResponse, UpdateInvoice,
};
use super::store;

fn invoice_not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Invoice with ID '{}' not found", id))
}

fn require_positive_amount(amt: f64) -> ApiResult<()> {
    if amt <= 0.0 {
        return Err(ApiError::BadRequest(
            "Amount must be a positive number".to_string(),
        ));
    }
    Ok(())
}

/// Parse the path id; non-numeric ids never reach the store.
fn parse_id(raw: &str) -> ApiResult<i32> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid invoice ID '{}'", raw)))
}

/// GET /invoices
pub async fn list_invoices(State(state): State<AppState>) -> ApiResult<Json<InvoiceListResponse>> {
    let invoices = store::list(&state.pool).await?;
    Ok(Json(InvoiceListResponse { invoices }))
}

/// GET /invoices/{id}
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<InvoiceDetailResponse>> {
    let id = parse_id(&id)?;
    let invoice = store::get_with_company(&state.pool, id)
        .await?
        .ok_or_else(|| invoice_not_found(id))?;

    Ok(Json(InvoiceDetailResponse { invoice }))
}

/// POST /invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateInvoice>,
) -> ApiResult<(StatusCode, Json<InvoiceResponse>)> {
    require_positive_amount(body.amt)?;

    let invoice = store::create(&state.pool, &body.comp_code, body.amt)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Company with code '{}' not found", body.comp_code))
        })?;

    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// PUT /invoices/{id}
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateInvoice>,
) -> ApiResult<Json<InvoiceResponse>> {
    let id = parse_id(&id)?;
    require_positive_amount(body.amt)?;

    let today = Utc::now().date_naive();
    let invoice = store::update(&state.pool, id, body.amt, body.paid, today)
        .await?
        .ok_or_else(|| invoice_not_found(id))?;

    Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/{id}
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<StatusResponse>> {
    let id = parse_id(&id)?;
    if !store::delete(&state.pool, id).await? {
        return Err(invoice_not_found(id));
    }

    Ok(Json(StatusResponse::deleted()))
}
