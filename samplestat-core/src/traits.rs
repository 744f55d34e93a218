use async_trait::async_trait;

use crate::domain::{NewSample, SampleId, StoredSample};
use crate::error::Result;

/// Persistence seam for samples.
///
/// Implementations must make `insert` atomic: the identity check, the sample
/// row and its parameter row either all land or none do.
#[async_trait]
pub trait SampleStore: Send + Sync {
    /// Insert a sample with its distribution parameters, returning the
    /// resolved identity. Fails with [`CoreError::AlreadyExists`] when a
    /// caller-supplied id is taken.
    ///
    /// [`CoreError::AlreadyExists`]: crate::CoreError::AlreadyExists
    async fn insert(&self, sample: &NewSample) -> Result<SampleId>;

    /// Rows matching `id`; empty when no such sample exists.
    async fn find_by_id(&self, id: SampleId) -> Result<Vec<StoredSample>>;

    /// Every stored sample ordered by id.
    async fn list(&self) -> Result<Vec<StoredSample>>;

    /// Round-trip to the backing store.
    async fn ping(&self) -> Result<()>;
}
