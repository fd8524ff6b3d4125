//! Company queries

use sqlx::PgPool;

use super::model::{Company, CompanyDetailRow, CompanySummary};

pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<CompanySummary>> {
    let rows = sqlx::query_as::<_, (String, String)>(
        "SELECT code, name FROM companies ORDER BY code",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(code, name)| CompanySummary { code, name })
        .collect())
}

/// Fetch the flat detail rows for one company: company columns left-joined
/// with its invoices and with the industries it is associated to.
pub async fn detail_rows(pool: &PgPool, code: &str) -> sqlx::Result<Vec<CompanyDetailRow>> {
    type Row = (
        String,
        String,
        String,
        Option<i32>,
        Option<f64>,
        Option<bool>,
        Option<chrono::NaiveDate>,
        Option<chrono::NaiveDate>,
        Option<String>,
    );

    let rows = sqlx::query_as::<_, Row>(
        "SELECT
            c.code,
            c.name,
            c.description,
            i.id,
            i.amt,
            i.paid,
            i.add_date,
            i.paid_date,
            ind.industry
         FROM companies c
         LEFT JOIN invoices i ON c.code = i.comp_code
         LEFT JOIN company_industries ci ON c.code = ci.company_code
         LEFT JOIN industries ind ON ci.industry_code = ind.code
         WHERE c.code = $1
         ORDER BY i.id, ind.code",
    )
    .bind(code)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(
            |(
                code,
                name,
                description,
                invoice_id,
                invoice_amt,
                invoice_paid,
                invoice_add_date,
                invoice_paid_date,
                industry,
            )| CompanyDetailRow {
                code,
                name,
                description,
                invoice_id,
                invoice_amt,
                invoice_paid,
                invoice_add_date,
                invoice_paid_date,
                industry,
            },
        )
        .collect())
}

pub async fn create(
    pool: &PgPool,
    code: &str,
    name: &str,
    description: &str,
) -> sqlx::Result<Company> {
    let (code, name, description) = sqlx::query_as::<_, (String, String, String)>(
        "INSERT INTO companies (code, name, description)
         VALUES ($1, $2, $3)
         RETURNING code, name, description",
    )
    .bind(code)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(Company {
        code,
        name,
        description,
    })
}

/// Update name and description; the code is immutable. Returns `None` when
/// the code matched no row.
pub async fn update(
    pool: &PgPool,
    code: &str,
    name: &str,
    description: &str,
) -> sqlx::Result<Option<Company>> {
    let row = sqlx::query_as::<_, (String, String, String)>(
        "UPDATE companies SET name = $1, description = $2
         WHERE code = $3
         RETURNING code, name, description",
    )
    .bind(name)
    .bind(description)
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(code, name, description)| Company {
        code,
        name,
        description,
    }))
}

/// Delete by code. Returns whether a row was removed.
pub async fn delete(pool: &PgPool, code: &str) -> sqlx::Result<bool> {
    let row = sqlx::query_as::<_, (String,)>(
        "DELETE FROM companies WHERE code = $1 RETURNING code",
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(row.is_some())
}
