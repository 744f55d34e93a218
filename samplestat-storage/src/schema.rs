//! Table definitions for samples and their distribution parameters.
//!
//! Parameter tables reference `samples(id)` with `ON DELETE CASCADE`, so
//! dropping or deleting samples also clears their parameter rows as long as
//! the connection has foreign keys enabled.

use samplestat_core::Result;
use sqlx::SqlitePool;

const DROP_SAMPLES: &str = "DROP TABLE IF EXISTS samples";

const CREATE_SAMPLES: &str = r#"
    CREATE TABLE IF NOT EXISTS samples (
        id                INTEGER PRIMARY KEY,
        distribution_type TEXT NOT NULL
            CHECK (distribution_type IN ('uniform', 'normal', 'weibull')),
        data_points       TEXT NOT NULL,
        value_count       INTEGER NOT NULL CHECK (value_count > 0)
    )
"#;

const CREATE_UNIFORM: &str = r#"
    CREATE TABLE IF NOT EXISTS uniform (
        sample_id INTEGER PRIMARY KEY REFERENCES samples(id) ON DELETE CASCADE,
        low       REAL NOT NULL,
        high      REAL NOT NULL
    )
"#;

const CREATE_NORMAL: &str = r#"
    CREATE TABLE IF NOT EXISTS normal (
        sample_id INTEGER PRIMARY KEY REFERENCES samples(id) ON DELETE CASCADE,
        loc       REAL NOT NULL,
        scale     REAL NOT NULL
    )
"#;

const CREATE_WEIBULL: &str = r#"
    CREATE TABLE IF NOT EXISTS weibull (
        sample_id INTEGER PRIMARY KEY REFERENCES samples(id) ON DELETE CASCADE,
        shape     REAL NOT NULL
    )
"#;

const CREATE_TABLES: [&str; 4] = [CREATE_SAMPLES, CREATE_UNIFORM, CREATE_NORMAL, CREATE_WEIBULL];

/// Drop and recreate the `samples` table, then make sure the parameter
/// tables exist. Every stored sample and parameter row is discarded.
pub async fn initialize(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(DROP_SAMPLES).execute(&mut *tx).await?;
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    tracing::warn!("Sample schema initialized; all existing samples were discarded");
    Ok(())
}

/// Create any missing tables without touching existing data.
pub async fn ensure(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    tracing::debug!("Sample schema present");
    Ok(())
}
