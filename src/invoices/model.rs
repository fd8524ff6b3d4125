//! Invoice request/response schemas and the paid_date rule
//!
//! `paid_date` tracks the `paid` flag: marking an invoice paid stamps the
//! current date, unmarking clears it, and omitting the flag leaves both
//! untouched. [`derive_paid_date`] is that rule as a pure function.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::companies::model::Company;

/// A full invoice row
#[derive(Debug, Serialize)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Invoice detail with the owning company nested
#[derive(Debug, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

/// Request body for POST /invoices
#[derive(Debug, Deserialize)]
pub struct CreateInvoice {
    pub comp_code: String,
    pub amt: f64,
}

/// Request body for PUT /invoices/{id}
///
/// An absent `paid` field leaves the paid flag and paid_date unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateInvoice {
    pub amt: f64,
    pub paid: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<Invoice>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceDetail,
}

/// Next `paid_date` for an invoice update.
///
/// - `Some(true)`: stamped with `today`, even if the invoice was already
///   paid (re-marking refreshes the date)
/// - `Some(false)`: cleared
/// - `None`: the prior value is kept
pub fn derive_paid_date(
    requested_paid: Option<bool>,
    prior_paid_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<NaiveDate> {
    match requested_paid {
        Some(true) => Some(today),
        Some(false) => None,
        None => prior_paid_date,
    }
}
