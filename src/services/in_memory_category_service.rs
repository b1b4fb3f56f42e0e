//! In-memory category service
//!
//! Same semantics as the database service, backed by a lock-protected map.
//! Selected with `CATALOG_STORAGE=memory` and used by the HTTP tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::category::{CategoryDetailOutput, CategoryInput};
use crate::models::page::{PageModel, page_offset};
use crate::services::category_service::{CategoryManagementService, CategoryQueryService};

#[derive(Debug, Clone)]
struct CategoryRecord {
    id: Uuid,
    name: String,
    enabled: bool,
}

impl From<&CategoryRecord> for CategoryDetailOutput {
    fn from(record: &CategoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            enabled: record.enabled,
        }
    }
}

#[derive(Default)]
pub struct InMemoryCategoryService {
    categories: RwLock<HashMap<Uuid, CategoryRecord>>,
}

impl InMemoryCategoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.categories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.read().is_empty()
    }
}

#[async_trait]
impl CategoryQueryService for InMemoryCategoryService {
    async fn filter(
        &self,
        size: u64,
        page: u64,
    ) -> Result<PageModel<CategoryDetailOutput>, ServiceError> {
        if size == 0 {
            return Err(ServiceError::validation("size must be at least 1"));
        }

        let mut all: Vec<CategoryDetailOutput> = self
            .categories
            .read()
            .values()
            .map(CategoryDetailOutput::from)
            .collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        let total = all.len() as u64;
        let content: Vec<CategoryDetailOutput> = match page_offset(page, size) {
            Some(start) => all
                .into_iter()
                .skip(usize::try_from(start).unwrap_or(usize::MAX))
                .take(usize::try_from(size).unwrap_or(usize::MAX))
                .collect(),
            None => Vec::new(),
        };

        debug!(page, size, total, returned = content.len(), "Fetched category page");

        Ok(PageModel::new(content, page, size, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<CategoryDetailOutput, ServiceError> {
        self.categories
            .read()
            .get(&id)
            .map(CategoryDetailOutput::from)
            .ok_or_else(|| ServiceError::category_not_found(id))
    }
}

#[async_trait]
impl CategoryManagementService for InMemoryCategoryService {
    async fn create(&self, input: CategoryInput) -> Result<Uuid, ServiceError> {
        let valid = input.check()?;
        let id = Uuid::new_v4();

        self.categories.write().insert(
            id,
            CategoryRecord {
                id,
                name: valid.name,
                enabled: valid.enabled,
            },
        );

        info!(category_id = %id, "Inserted category");
        Ok(id)
    }

    async fn update(&self, id: Uuid, input: CategoryInput) -> Result<(), ServiceError> {
        let valid = input.check()?;

        let mut categories = self.categories.write();
        let record = categories
            .get_mut(&id)
            .ok_or_else(|| ServiceError::category_not_found(id))?;
        record.name = valid.name;
        record.enabled = valid.enabled;

        info!(category_id = %id, "Updated category");
        Ok(())
    }

    async fn disable(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut categories = self.categories.write();
        let record = categories
            .get_mut(&id)
            .ok_or_else(|| ServiceError::category_not_found(id))?;

        if !record.enabled {
            debug!(category_id = %id, "Category already disabled");
            return Ok(());
        }
        record.enabled = false;

        info!(category_id = %id, "Disabled category");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(service: &InMemoryCategoryService, names: &[&str]) -> Vec<Uuid> {
        let mut ids = Vec::new();
        for name in names {
            ids.push(service.create(CategoryInput::new(*name, true)).await.unwrap());
        }
        ids
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let service = InMemoryCategoryService::new();
        let id = service
            .create(CategoryInput::new("Electronics", true))
            .await
            .unwrap();

        let found = service.find_by_id(id).await.unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.name, "Electronics");
        assert!(found.enabled);
    }

    #[tokio::test]
    async fn test_invalid_create_allocates_nothing() {
        let service = InMemoryCategoryService::new();
        let result = service.create(CategoryInput::default()).await;

        assert!(matches!(result, Err(ServiceError::Validation { .. })));
        assert!(service.is_empty());
    }

    #[tokio::test]
    async fn test_find_unknown_is_not_found() {
        let service = InMemoryCategoryService::new();
        let result = service.find_by_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_filter_orders_by_name_and_pages() {
        let service = InMemoryCategoryService::new();
        seed(&service, &["Toys", "Books", "Garden", "Audio", "Electronics"]).await;

        let first = service.filter(2, 0).await.unwrap();
        let names: Vec<&str> = first.content.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Audio", "Books"]);
        assert_eq!(first.total_elements, 5);
        assert_eq!(first.total_pages, 3);

        let last = service.filter(2, 2).await.unwrap();
        assert_eq!(last.content.len(), 1);
        assert_eq!(last.content[0].name, "Toys");

        let beyond = service.filter(2, 7).await.unwrap();
        assert!(beyond.content.is_empty());
        assert_eq!(beyond.number, 7);
        assert_eq!(beyond.total_elements, 5);
    }

    #[tokio::test]
    async fn test_filter_never_exceeds_size() {
        let service = InMemoryCategoryService::new();
        seed(&service, &["a", "b", "c", "d", "e", "f", "g"]).await;

        for size in 1..=8 {
            for page in 0..=8 {
                let result = service.filter(size, page).await.unwrap();
                assert!(result.content.len() as u64 <= size);
            }
        }
    }

    #[tokio::test]
    async fn test_filter_with_unreachable_offset_is_empty() {
        let service = InMemoryCategoryService::new();
        seed(&service, &["Audio", "Books"]).await;

        let page = service.filter(100, 200_000_000_000_000_000).await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.number, 200_000_000_000_000_000);
    }

    #[tokio::test]
    async fn test_filter_rejects_zero_size() {
        let service = InMemoryCategoryService::new();
        assert!(service.filter(0, 0).await.is_err());
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let service = InMemoryCategoryService::new();
        let ids = seed(&service, &["Electronics"]).await;

        service
            .update(ids[0], CategoryInput::new("Consumer Electronics", false))
            .await
            .unwrap();

        let found = service.find_by_id(ids[0]).await.unwrap();
        assert_eq!(found.name, "Consumer Electronics");
        assert!(!found.enabled);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let service = InMemoryCategoryService::new();
        let result = service
            .update(Uuid::new_v4(), CategoryInput::new("Books", true))
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let service = InMemoryCategoryService::new();
        let result = service.update(Uuid::new_v4(), CategoryInput::default()).await;
        assert!(matches!(result, Err(ServiceError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_disable_keeps_category_readable() {
        let service = InMemoryCategoryService::new();
        let ids = seed(&service, &["Garden"]).await;

        service.disable(ids[0]).await.unwrap();
        let found = service.find_by_id(ids[0]).await.unwrap();
        assert!(!found.enabled);

        // Disabling twice is not an error
        service.disable(ids[0]).await.unwrap();

        let page = service.filter(10, 0).await.unwrap();
        assert_eq!(page.total_elements, 1);
    }

    #[tokio::test]
    async fn test_disable_unknown_is_not_found() {
        let service = InMemoryCategoryService::new();
        let result = service.disable(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
