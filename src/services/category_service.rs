//! Category service contracts
//!
//! The read side and the write side are separate traits so handlers can be
//! wired against any pair of implementations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::category::{CategoryDetailOutput, CategoryInput};
use crate::models::page::PageModel;

/// Read side: listing and lookup of category projections
#[async_trait]
pub trait CategoryQueryService: Send + Sync {
    /// Page `page` (zero-based) of `size` categories, ordered by name.
    /// Disabled categories are included.
    async fn filter(
        &self,
        size: u64,
        page: u64,
    ) -> Result<PageModel<CategoryDetailOutput>, ServiceError>;

    /// Fails with `ServiceError::NotFound` when no category has this id
    async fn find_by_id(&self, id: Uuid) -> Result<CategoryDetailOutput, ServiceError>;
}

/// Write side: creation, update and disabling
#[async_trait]
pub trait CategoryManagementService: Send + Sync {
    /// Validate and persist a new category, returning its generated id
    async fn create(&self, input: CategoryInput) -> Result<Uuid, ServiceError>;

    async fn update(&self, id: Uuid, input: CategoryInput) -> Result<(), ServiceError>;

    /// Mark the category as disabled. It stays readable with `enabled: false`.
    async fn disable(&self, id: Uuid) -> Result<(), ServiceError>;
}
