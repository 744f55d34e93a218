use async_trait::async_trait;
use samplestat_core::{
    CoreError, DistributionParams, NewSample, Result, SampleId, SampleStore, StoredSample,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

pub struct SampleRepository {
    pool: SqlitePool,
}

impl SampleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a sample and its parameter row in one transaction.
    ///
    /// A caller-supplied id that is already taken yields
    /// [`CoreError::AlreadyExists`] and leaves the store untouched.
    pub async fn create(&self, sample: &NewSample) -> Result<SampleId> {
        let mut tx = self.pool.begin().await?;

        // NULL for `id` lets SQLite assign the next rowid.
        let inserted: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO samples (id, distribution_type, data_points, value_count)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT (id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(sample.id.map(i64::from))
        .bind(sample.distribution_type().as_str())
        .bind(sample.encoded_values())
        .bind(sample.sample_count)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(id) = inserted.map(SampleId::new) else {
            let requested = sample
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "<unassigned>".to_string());
            return Err(CoreError::AlreadyExists(format!(
                "the sample with id: {} already exists in the database",
                requested
            )));
        };

        insert_parameters(&mut *tx, id, &sample.params).await?;
        tx.commit().await?;

        tracing::debug!(
            sample_id = %id,
            distribution = %sample.distribution_type(),
            sample_count = sample.sample_count,
            "Sample stored"
        );

        Ok(id)
    }

    /// Get the sample rows matching an id (zero or one)
    pub async fn get_by_id(&self, id: SampleId) -> Result<Vec<StoredSample>> {
        let rows = sqlx::query(
            r#"
            SELECT id, distribution_type, data_points, value_count
            FROM samples
            WHERE id = ?1
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_stored_sample).collect()
    }

    /// List every sample ordered by id
    pub async fn list(&self) -> Result<Vec<StoredSample>> {
        let rows = sqlx::query(
            r#"
            SELECT id, distribution_type, data_points, value_count
            FROM samples
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_stored_sample).collect()
    }
}

#[async_trait]
impl SampleStore for SampleRepository {
    async fn insert(&self, sample: &NewSample) -> Result<SampleId> {
        self.create(sample).await
    }

    async fn find_by_id(&self, id: SampleId) -> Result<Vec<StoredSample>> {
        self.get_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<StoredSample>> {
        SampleRepository::list(self).await
    }

    async fn ping(&self) -> Result<()> {
        crate::sqlite::health_check(&self.pool)
            .await
            .map_err(|e| CoreError::Database(e.to_string()))
    }
}

async fn insert_parameters(
    conn: &mut SqliteConnection,
    id: SampleId,
    params: &DistributionParams,
) -> Result<()> {
    let query = match *params {
        DistributionParams::Uniform { low, high } => {
            sqlx::query("INSERT INTO uniform (sample_id, low, high) VALUES (?1, ?2, ?3)")
                .bind(id.as_i64())
                .bind(low)
                .bind(high)
        }
        DistributionParams::Normal { loc, scale } => {
            sqlx::query("INSERT INTO normal (sample_id, loc, scale) VALUES (?1, ?2, ?3)")
                .bind(id.as_i64())
                .bind(loc)
                .bind(scale)
        }
        DistributionParams::Weibull { shape } => {
            sqlx::query("INSERT INTO weibull (sample_id, shape) VALUES (?1, ?2)")
                .bind(id.as_i64())
                .bind(shape)
        }
    };

    query.execute(conn).await?;
    Ok(())
}

fn row_to_stored_sample(row: &SqliteRow) -> Result<StoredSample> {
    let distribution: String = row.try_get("distribution_type")?;

    Ok(StoredSample {
        id: SampleId::new(row.try_get("id")?),
        distribution_type: distribution.parse()?,
        data_points: row.try_get("data_points")?,
        value_count: row.try_get("value_count")?,
    })
}
