//! Company HTTP handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::{ApiError, ApiResult, AppJson, Slugifier, StatusResponse};
use crate::server::AppState;

use super::model::{
    CompanyDetailResponse, CompanyListResponse, CompanyResponse, CreateCompany, UpdateCompany,
    nest_company,
};
use super::store;

fn company_not_found(code: &str) -> ApiError {
    ApiError::NotFound(format!("Company with code '{}' not found", code))
}

/// GET /companies
pub async fn list_companies(State(state): State<AppState>) -> ApiResult<Json<CompanyListResponse>> {
    let companies = store::list(&state.pool).await?;
    Ok(Json(CompanyListResponse { companies }))
}

/// GET /companies/{code}
///
/// One left-join query; the flat rows are nested into company + invoices +
/// industries in memory.
pub async fn get_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<CompanyDetailResponse>> {
    let rows = store::detail_rows(&state.pool, &code).await?;
    let company = nest_company(&rows).ok_or_else(|| company_not_found(&code))?;

    Ok(Json(CompanyDetailResponse { company }))
}

/// POST /companies
pub async fn create_company(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateCompany>,
) -> ApiResult<(StatusCode, Json<CompanyResponse>)> {
    let (name, description) = match (body.name, body.description) {
        (Some(name), Some(description)) if !name.is_empty() && !description.is_empty() => {
            (name, description)
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Both 'name' and 'description' are required".to_string(),
            ));
        }
    };

    let code = Slugifier::slugify(&name);
    let company = store::create(&state.pool, &code, &name, &description).await?;

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// PUT /companies/{code}
pub async fn update_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    AppJson(body): AppJson<UpdateCompany>,
) -> ApiResult<Json<CompanyResponse>> {
    let company = store::update(&state.pool, &code, &body.name, &body.description)
        .await?
        .ok_or_else(|| company_not_found(&code))?;

    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/{code}
pub async fn delete_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<StatusResponse>> {
    if !store::delete(&state.pool, &code).await? {
        return Err(company_not_found(&code));
    }

    Ok(Json(StatusResponse::deleted()))
}
