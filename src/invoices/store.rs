//! Invoice queries
//!
//! Check-then-write sequences (create's company lookup, update's prior-state
//! read) run inside a transaction so concurrent requests cannot slip between
//! the check and the write.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::companies::model::Company;

use super::model::{Invoice, InvoiceDetail, derive_paid_date};

type InvoiceRow = (i32, String, f64, bool, NaiveDate, Option<NaiveDate>);

const INVOICE_SELECT: &str = "SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices";

fn row_to_invoice((id, comp_code, amt, paid, add_date, paid_date): InvoiceRow) -> Invoice {
    Invoice {
        id,
        comp_code,
        amt,
        paid,
        add_date,
        paid_date,
    }
}

pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<Invoice>> {
    let sql = format!("{} ORDER BY id", INVOICE_SELECT);
    let rows = sqlx::query_as::<_, InvoiceRow>(&sql).fetch_all(pool).await?;

    Ok(rows.into_iter().map(row_to_invoice).collect())
}

/// Fetch one invoice inner-joined with its owning company.
pub async fn get_with_company(pool: &PgPool, id: i32) -> sqlx::Result<Option<InvoiceDetail>> {
    type Row = (
        i32,
        f64,
        bool,
        NaiveDate,
        Option<NaiveDate>,
        String,
        String,
        String,
    );

    let row = sqlx::query_as::<_, Row>(
        "SELECT
            i.id,
            i.amt,
            i.paid,
            i.add_date,
            i.paid_date,
            c.code,
            c.name,
            c.description
         FROM invoices i
         JOIN companies c ON i.comp_code = c.code
         WHERE i.id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(
        |(id, amt, paid, add_date, paid_date, code, name, description)| InvoiceDetail {
            id,
            amt,
            paid,
            add_date,
            paid_date,
            company: Company {
                code,
                name,
                description,
            },
        },
    ))
}

/// Insert an invoice for an existing company. `paid` defaults to false and
/// `add_date` to the current date, both store-assigned. Returns `None` when
/// the company does not exist.
pub async fn create(pool: &PgPool, comp_code: &str, amt: f64) -> sqlx::Result<Option<Invoice>> {
    let mut tx = pool.begin().await?;

    let company = sqlx::query_as::<_, (String,)>("SELECT code FROM companies WHERE code = $1")
        .bind(comp_code)
        .fetch_optional(&mut *tx)
        .await?;

    if company.is_none() {
        return Ok(None);
    }

    let row = sqlx::query_as::<_, InvoiceRow>(
        "INSERT INTO invoices (comp_code, amt)
         VALUES ($1, $2)
         RETURNING id, comp_code, amt, paid, add_date, paid_date",
    )
    .bind(comp_code)
    .bind(amt)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(row_to_invoice(row)))
}

/// Update amount and paid state. The new `paid_date` follows the paid flag
/// (see [`derive_paid_date`]); an absent flag keeps the prior flag and date.
/// Returns `None` when the id does not exist.
pub async fn update(
    pool: &PgPool,
    id: i32,
    amt: f64,
    paid: Option<bool>,
    today: NaiveDate,
) -> sqlx::Result<Option<Invoice>> {
    let mut tx = pool.begin().await?;

    let sql = format!("{} WHERE id = $1", INVOICE_SELECT);
    let prior = sqlx::query_as::<_, InvoiceRow>(&sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    let Some(prior) = prior.map(row_to_invoice) else {
        return Ok(None);
    };

    let paid_date = derive_paid_date(paid, prior.paid_date, today);
    let paid = paid.unwrap_or(prior.paid);

    let row = sqlx::query_as::<_, InvoiceRow>(
        "UPDATE invoices SET amt = $1, paid = $2, paid_date = $3
         WHERE id = $4
         RETURNING id, comp_code, amt, paid, add_date, paid_date",
    )
    .bind(amt)
    .bind(paid)
    .bind(paid_date)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(row_to_invoice(row)))
}

/// Delete by id. Returns whether a row was removed.
pub async fn delete(pool: &PgPool, id: i32) -> sqlx::Result<bool> {
    let row = sqlx::query_as::<_, (i32,)>("DELETE FROM invoices WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}
