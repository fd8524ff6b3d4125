//! PostgreSQL storage setup using sqlx.
//!
//! The process owns a single [`sqlx::PgPool`], created at startup and
//! injected into every handler through the server state. No pooling policy
//! beyond the driver's defaults, no retries.
//!
//! # Schema
//!
//! Four tables: `companies`, `invoices`, `industries`, and the
//! `company_industries` association. Deleting a company cascades to its
//! invoices and associations.

use anyhow::{Result, anyhow};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Advisory lock key for schema creation.
const SCHEMA_LOCK_KEY: i64 = 0x62697a74696d65; // "biztime"

/// Connect to PostgreSQL with the driver's default pool settings.
pub async fn connect(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .connect(database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to PostgreSQL: {}", e))?;

    Ok(pool)
}

/// Apply the required tables (idempotent).
///
/// Safe to call on every startup. Concurrent callers serialize on a
/// transaction-scoped advisory lock.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| anyhow!("Failed to open schema transaction: {}", e))?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await
        .map_err(|e| anyhow!("Failed to take schema lock: {}", e))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS companies (
            code TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL
        )",
    )
    .execute(&mut *tx)
    .await
    .map_err(|e| anyhow!("Failed to create companies table: {}", e))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS invoices (
            id SERIAL PRIMARY KEY,
            comp_code TEXT NOT NULL REFERENCES companies(code) ON DELETE CASCADE,
            amt DOUBLE PRECISION NOT NULL,
            paid BOOLEAN NOT NULL DEFAULT false,
            add_date DATE NOT NULL DEFAULT CURRENT_DATE,
            paid_date DATE
        )",
    )
    .execute(&mut *tx)
    .await
    .map_err(|e| anyhow!("Failed to create invoices table: {}", e))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS industries (
            code TEXT PRIMARY KEY,
            industry TEXT NOT NULL UNIQUE
        )",
    )
    .execute(&mut *tx)
    .await
    .map_err(|e| anyhow!("Failed to create industries table: {}", e))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS company_industries (
            company_code TEXT NOT NULL REFERENCES companies(code) ON DELETE CASCADE,
            industry_code TEXT NOT NULL REFERENCES industries(code) ON DELETE CASCADE,
            PRIMARY KEY (company_code, industry_code)
        )",
    )
    .execute(&mut *tx)
    .await
    .map_err(|e| anyhow!("Failed to create company_industries table: {}", e))?;

    tx.commit()
        .await
        .map_err(|e| anyhow!("Failed to commit schema: {}", e))?;

    Ok(())
}
