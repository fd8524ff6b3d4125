//! Industry queries
//!
//! The association insert validates both referenced entities inside one
//! transaction; a duplicate pair is absorbed by `ON CONFLICT DO NOTHING`.

use sqlx::PgPool;

use super::model::{Industry, IndustryRow};

/// Result of an association attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum AssociationOutcome {
    /// Association now exists (inserted, or already present)
    Linked,
    IndustryMissing,
    CompanyMissing,
}

/// Fetch the flat listing rows: every industry, left-joined with the codes
/// of its associated companies.
pub async fn list_rows(pool: &PgPool) -> sqlx::Result<Vec<IndustryRow>> {
    let rows = sqlx::query_as::<_, (String, String, Option<String>)>(
        "SELECT i.code, i.industry, ci.company_code
         FROM industries i
         LEFT JOIN company_industries ci ON i.code = ci.industry_code
         ORDER BY i.code, ci.company_code",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(code, industry, company_code)| IndustryRow {
            code,
            industry,
            company_code,
        })
        .collect())
}

pub async fn create(pool: &PgPool, code: &str, industry: &str) -> sqlx::Result<Industry> {
    let (code, industry) = sqlx::query_as::<_, (String, String)>(
        "INSERT INTO industries (code, industry)
         VALUES ($1, $2)
         RETURNING code, industry",
    )
    .bind(code)
    .bind(industry)
    .fetch_one(pool)
    .await?;

    Ok(Industry { code, industry })
}

/// Associate a company with an industry after validating both exist.
pub async fn associate(
    pool: &PgPool,
    industry_code: &str,
    company_code: &str,
) -> sqlx::Result<AssociationOutcome> {
    let mut tx = pool.begin().await?;

    let industry = sqlx::query_as::<_, (String,)>("SELECT code FROM industries WHERE code = $1")
        .bind(industry_code)
        .fetch_optional(&mut *tx)
        .await?;

    if industry.is_none() {
        return Ok(AssociationOutcome::IndustryMissing);
    }

    let company = sqlx::query_as::<_, (String,)>("SELECT code FROM companies WHERE code = $1")
        .bind(company_code)
        .fetch_optional(&mut *tx)
        .await?;

    if company.is_none() {
        return Ok(AssociationOutcome::CompanyMissing);
    }

    sqlx::query(
        "INSERT INTO company_industries (company_code, industry_code)
         VALUES ($1, $2)
         ON CONFLICT DO NOTHING",
    )
    .bind(company_code)
    .bind(industry_code)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(AssociationOutcome::Linked)
}
