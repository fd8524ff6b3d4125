//! # BizTime
//!
//! A small REST API for tracking companies, the invoices they owe, and the
//! industries they operate in, backed by PostgreSQL.
//!
//! ## Architecture
//!
//! - **Resources**: `companies`, `invoices`, and `industries` each bundle
//!   their request/response schemas, sqlx queries, and axum handlers
//! - **Aggregation as pure functions**: outer-join row sets are nested and
//!   deduplicated in memory, independently of the database
//! - **Typed errors**: every failure flows through [`core::ApiError`] and is
//!   rendered as a JSON `{"message": ...}` body with the matching status
//! - **Injected storage**: a single `PgPool` created at startup and carried
//!   in [`server::AppState`]
//!
//! ## HTTP surface
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET    | /companies | list `{code, name}` pairs |
//! | GET    | /companies/{code} | company with invoices and industries |
//! | POST   | /companies | create; code slugified from the name |
//! | PUT    | /companies/{code} | update name and description |
//! | DELETE | /companies/{code} | delete (cascades to invoices/associations) |
//! | GET    | /invoices | list all invoices |
//! | GET    | /invoices/{id} | invoice with its company |
//! | POST   | /invoices | create for an existing company |
//! | PUT    | /invoices/{id} | update amount and paid state |
//! | DELETE | /invoices/{id} | delete |
//! | GET    | /industries | industries with associated company codes |
//! | POST   | /industries | create; code slugified from the name |
//! | POST   | /industries/{code} | associate a company with the industry |

pub mod companies;
pub mod config;
pub mod core;
pub mod industries;
pub mod invoices;
pub mod server;
pub mod storage;
