//! PostgreSQL-backed category service
//!
//! Implements both the query and the management side against the
//! `categories` table.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryOrder, Set,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::entities::{categories, prelude::*};
use crate::error::ServiceError;
use crate::models::category::{CategoryDetailOutput, CategoryInput};
use crate::models::page::{PageModel, page_offset};
use crate::services::category_service::{CategoryManagementService, CategoryQueryService};

#[derive(Clone)]
pub struct DbCategoryService {
    db: DatabaseConnection,
}

impl DbCategoryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: Uuid) -> Result<categories::Model, ServiceError> {
        Categories::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::category_not_found(id))
    }
}

#[async_trait]
impl CategoryQueryService for DbCategoryService {
    async fn filter(
        &self,
        size: u64,
        page: u64,
    ) -> Result<PageModel<CategoryDetailOutput>, ServiceError> {
        if size == 0 {
            return Err(ServiceError::validation("size must be at least 1"));
        }

        let paginator = Categories::find()
            .order_by_asc(categories::Column::Name)
            .order_by_asc(categories::Column::Id)
            .paginate(&self.db, size);

        let total = paginator.num_items().await?;
        // Offsets past i64::MAX cannot reach Postgres; such pages are empty
        let models = match page_offset(page, size) {
            Some(_) => paginator.fetch_page(page).await?,
            None => Vec::new(),
        };

        debug!(page, size, total, returned = models.len(), "Fetched category page");

        let content = models.into_iter().map(CategoryDetailOutput::from).collect();
        Ok(PageModel::new(content, page, size, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<CategoryDetailOutput, ServiceError> {
        self.find_model(id).await.map(CategoryDetailOutput::from)
    }
}

#[async_trait]
impl CategoryManagementService for DbCategoryService {
    async fn create(&self, input: CategoryInput) -> Result<Uuid, ServiceError> {
        let valid = input.check()?;
        let now = Utc::now().fixed_offset();
        let id = Uuid::new_v4();

        categories::ActiveModel {
            id: Set(id),
            name: Set(valid.name),
            enabled: Set(valid.enabled),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        info!(category_id = %id, "Inserted category");
        Ok(id)
    }

    async fn update(&self, id: Uuid, input: CategoryInput) -> Result<(), ServiceError> {
        let valid = input.check()?;
        let existing = self.find_model(id).await?;

        let mut active_model = existing.into_active_model();
        active_model.name = Set(valid.name);
        active_model.enabled = Set(valid.enabled);
        active_model.updated_at = Set(Utc::now().fixed_offset());
        active_model.update(&self.db).await?;

        info!(category_id = %id, "Updated category");
        Ok(())
    }

    async fn disable(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = self.find_model(id).await?;
        if !existing.enabled {
            debug!(category_id = %id, "Category already disabled");
            return Ok(());
        }

        let mut active_model = existing.into_active_model();
        active_model.enabled = Set(false);
        active_model.updated_at = Set(Utc::now().fixed_offset());
        active_model.update(&self.db).await?;

        info!(category_id = %id, "Disabled category");
        Ok(())
    }
}
