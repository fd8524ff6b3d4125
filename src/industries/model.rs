//! Industry request/response schemas and listing aggregation
//!
//! The listing left-joins industries with their company associations and
//! arrives as flat rows; [`group_industries`] folds them into one entry per
//! industry. An industry with no associations joins against a single
//! all-null placeholder row, which must produce an empty `companies` array
//! rather than a literal null entry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A full industry row
#[derive(Debug, Serialize)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

/// Listing entry: industry plus the codes of its associated companies
#[derive(Debug, Serialize)]
pub struct IndustryWithCompanies {
    pub code: String,
    pub name: String,
    pub companies: Vec<String>,
}

/// Request body for POST /industries
#[derive(Debug, Deserialize)]
pub struct CreateIndustry {
    pub industry: Option<String>,
}

/// Request body for POST /industries/{code}
#[derive(Debug, Deserialize)]
pub struct AssociateCompany {
    pub company_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IndustryListResponse {
    pub industries: Vec<IndustryWithCompanies>,
}

#[derive(Debug, Serialize)]
pub struct IndustryResponse {
    pub industry: Industry,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One flat row of the industry listing left-join query.
#[derive(Debug, Clone)]
pub struct IndustryRow {
    pub code: String,
    pub industry: String,
    pub company_code: Option<String>,
}

/// Group the flat join rows into one entry per industry, in row order.
/// Null company placeholders from the outer join are dropped.
pub fn group_industries(rows: Vec<IndustryRow>) -> Vec<IndustryWithCompanies> {
    let mut grouped: IndexMap<String, IndustryWithCompanies> = IndexMap::new();

    for row in rows {
        let entry = grouped
            .entry(row.code.clone())
            .or_insert(IndustryWithCompanies {
                code: row.code,
                name: row.industry,
                companies: Vec::new(),
            });

        if let Some(company_code) = row.company_code {
            entry.companies.push(company_code);
        }
    }

    grouped.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, industry: &str, company: Option<&str>) -> IndustryRow {
        IndustryRow {
            code: code.to_string(),
            industry: industry.to_string(),
            company_code: company.map(String::from),
        }
    }

    #[test]
    fn test_group_industries_empty() {
        assert!(group_industries(vec![]).is_empty());
    }

    #[test]
    fn test_group_industries_without_associations_has_empty_companies() {
        let industries = group_industries(vec![row("acct", "Accounting", None)]);
        assert_eq!(industries.len(), 1);
        assert_eq!(industries[0].code, "acct");
        assert_eq!(industries[0].name, "Accounting");
        assert!(industries[0].companies.is_empty());
    }

    #[test]
    fn test_group_industries_collects_company_codes() {
        let industries = group_industries(vec![
            row("tech", "Technology", Some("apple")),
            row("tech", "Technology", Some("ibm")),
        ]);
        assert_eq!(industries.len(), 1);
        assert_eq!(industries[0].companies, vec!["apple", "ibm"]);
    }

    #[test]
    fn test_group_industries_mixed_rows_keep_order() {
        let industries = group_industries(vec![
            row("acct", "Accounting", None),
            row("tech", "Technology", Some("apple")),
        ]);
        assert_eq!(industries.len(), 2);
        assert_eq!(industries[0].code, "acct");
        assert!(industries[0].companies.is_empty());
        assert_eq!(industries[1].companies, vec!["apple"]);
    }

    #[test]
    fn test_listing_entry_serializes_with_name_key() {
        let entry = IndustryWithCompanies {
            code: "tech".to_string(),
            name: "Technology".to_string(),
            companies: vec!["apple".to_string()],
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "code": "tech",
                "name": "Technology",
                "companies": ["apple"],
            })
        );
    }
}
