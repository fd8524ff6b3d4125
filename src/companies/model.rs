//! Company request/response schemas and row aggregation
//!
//! The detail endpoint runs one left-join query over invoices and industry
//! associations; [`nest_company`] turns those flat rows into the nested
//! response object, filtering out the null placeholders the outer joins
//! produce.

use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// `{code, name}` pair for the company listing
#[derive(Debug, Serialize)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// A full company row
#[derive(Debug, Serialize)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Company detail with nested invoices and industry names
#[derive(Debug, Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: String,
    pub industries: Vec<String>,
    pub invoices: Vec<InvoiceSummary>,
}

/// Invoice fields surfaced in the company detail view
#[derive(Debug, Serialize)]
pub struct InvoiceSummary {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Request body for POST /companies
///
/// A missing field gets the same 400 message as an empty one, so absence is
/// modeled rather than rejected at the deserialization layer.
#[derive(Debug, Deserialize)]
pub struct CreateCompany {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request body for PUT /companies/{code}
#[derive(Debug, Deserialize)]
pub struct UpdateCompany {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}

/// One flat row of the company detail left-join query.
///
/// Invoice and industry columns are null when the company has no invoices
/// or no industry associations.
#[derive(Debug, Clone)]
pub struct CompanyDetailRow {
    pub code: String,
    pub name: String,
    pub description: String,
    pub invoice_id: Option<i32>,
    pub invoice_amt: Option<f64>,
    pub invoice_paid: Option<bool>,
    pub invoice_add_date: Option<NaiveDate>,
    pub invoice_paid_date: Option<NaiveDate>,
    pub industry: Option<String>,
}

/// Aggregate the flat join rows for one company into the nested detail view.
///
/// Returns `None` when no rows matched (unknown company code). Invoices are
/// deduplicated by id and industries by exact name, both in first-seen
/// order; the join's null placeholders never reach the output arrays.
pub fn nest_company(rows: &[CompanyDetailRow]) -> Option<CompanyDetail> {
    let first = rows.first()?;

    let mut invoices: IndexMap<i32, InvoiceSummary> = IndexMap::new();
    let mut industries: IndexSet<String> = IndexSet::new();

    for row in rows {
        if let (Some(id), Some(amt), Some(paid), Some(add_date)) = (
            row.invoice_id,
            row.invoice_amt,
            row.invoice_paid,
            row.invoice_add_date,
        ) {
            invoices.entry(id).or_insert(InvoiceSummary {
                id,
                amt,
                paid,
                add_date,
                paid_date: row.invoice_paid_date,
            });
        }

        if let Some(industry) = &row.industry {
            industries.insert(industry.clone());
        }
    }

    Some(CompanyDetail {
        code: first.code.clone(),
        name: first.name.clone(),
        description: first.description.clone(),
        industries: industries.into_iter().collect(),
        invoices: invoices.into_values().collect(),
    })
}
