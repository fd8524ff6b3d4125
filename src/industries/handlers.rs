//! Industry HTTP handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::{ApiError, ApiResult, AppJson, Slugifier};
use crate::server::AppState;

use super::model::{
    AssociateCompany, CreateIndustry, IndustryListResponse, IndustryResponse, MessageResponse,
    group_industries,
};
use super::store::{self, AssociationOutcome};

/// GET /industries
pub async fn list_industries(
    State(state): State<AppState>,
) -> ApiResult<Json<IndustryListResponse>> {
    let rows = store::list_rows(&state.pool).await?;
    let industries = group_industries(rows);

    Ok(Json(IndustryListResponse { industries }))
}

/// POST /industries
pub async fn create_industry(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateIndustry>,
) -> ApiResult<(StatusCode, Json<IndustryResponse>)> {
    let name = match body.industry {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::BadRequest("Industry name is required".to_string())),
    };

    let code = Slugifier::slugify(&name);
    let industry = store::create(&state.pool, &code, &name).await?;

    Ok((StatusCode::CREATED, Json(IndustryResponse { industry })))
}

/// POST /industries/{code}
///
/// Associates the body's company with the path's industry. A duplicate
/// association succeeds without inserting a second pair.
pub async fn associate_company(
    State(state): State<AppState>,
    Path(industry_code): Path<String>,
    AppJson(body): AppJson<AssociateCompany>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let company_code = match body.company_code {
        Some(code) if !code.is_empty() => code,
        _ => return Err(ApiError::BadRequest("'company_code' is required".to_string())),
    };

    match store::associate(&state.pool, &industry_code, &company_code).await? {
        AssociationOutcome::Linked => Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: format!(
                    "Company '{}' associated with industry '{}'",
                    company_code, industry_code
                ),
            }),
        )),
        AssociationOutcome::IndustryMissing => Err(ApiError::NotFound(format!(
            "Industry with code '{}' not found",
            industry_code
        ))),
        AssociationOutcome::CompanyMissing => Err(ApiError::NotFound(format!(
            "Company with code '{}' not found",
            company_code
        ))),
    }
}
