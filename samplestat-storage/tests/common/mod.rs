use samplestat_core::domain::{
    DistributionParams, DistributionType, NewSample, SampleDraft, SampleId,
};
use sqlx::Row;
use samplestat_storage::{schema, sqlite, SampleRepository};

/// Fresh in-memory repository with the schema initialized
pub async fn setup_repository() -> SampleRepository {
    let pool = sqlite::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    schema::initialize(&pool)
        .await
        .expect("Failed to initialize schema");
    SampleRepository::new(pool)
}

/// Normalized uniform sample over [0, 10]
pub fn uniform_sample(values: Vec<i64>) -> NewSample {
    SampleDraft::uniform(values, 0.0, 10.0)
        .normalize()
        .expect("valid uniform draft")
}

/// Normalized uniform sample with a caller-supplied id
pub fn uniform_sample_with_id(id: i64, values: Vec<i64>) -> NewSample {
    SampleDraft::uniform(values, 0.0, 10.0)
        .with_id(id)
        .normalize()
        .expect("valid uniform draft")
}

/// Number of rows in the `samples` table
pub async fn count_samples(repo: &SampleRepository) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM samples")
        .fetch_one(repo.pool())
        .await
        .expect("Failed to count samples")
}

/// Parameters stored for a sample in the table of the given distribution
pub async fn stored_parameters(
    repo: &SampleRepository,
    id: SampleId,
    distribution: DistributionType,
) -> Option<DistributionParams> {
    let sql = match distribution {
        DistributionType::Uniform => "SELECT low, high FROM uniform WHERE sample_id = ?1",
        DistributionType::Normal => "SELECT loc, scale FROM normal WHERE sample_id = ?1",
        DistributionType::Weibull => "SELECT shape FROM weibull WHERE sample_id = ?1",
    };

    let row = sqlx::query(sql)
        .bind(id.as_i64())
        .fetch_optional(repo.pool())
        .await
        .expect("Failed to read parameters")?;

    Some(match distribution {
        DistributionType::Uniform => DistributionParams::Uniform {
            low: row.get("low"),
            high: row.get("high"),
        },
        DistributionType::Normal => DistributionParams::Normal {
            loc: row.get("loc"),
            scale: row.get("scale"),
        },
        DistributionType::Weibull => DistributionParams::Weibull {
            shape: row.get("shape"),
        },
    })
}
