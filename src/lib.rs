// src/lib.rs

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use services::{
    category_service::{CategoryManagementService, CategoryQueryService},
    db_category_service::DbCategoryService,
    in_memory_category_service::InMemoryCategoryService,
};

/// Shared handler state: the read and write sides of the category services
#[derive(Clone)]
pub struct AppState {
    pub category_query: Arc<dyn CategoryQueryService>,
    pub category_management: Arc<dyn CategoryManagementService>,
}

impl AppState {
    pub fn new(
        category_query: Arc<dyn CategoryQueryService>,
        category_management: Arc<dyn CategoryManagementService>,
    ) -> Self {
        Self {
            category_query,
            category_management,
        }
    }

    pub fn with_database(db: DatabaseConnection) -> Self {
        let service = Arc::new(DbCategoryService::new(db));
        Self::new(service.clone(), service)
    }

    pub fn in_memory() -> Self {
        let service = Arc::new(InMemoryCategoryService::new());
        Self::new(service.clone(), service)
    }
}

pub mod entities {
    pub mod prelude;
    pub mod categories;
}

pub mod services {
    pub mod category_service;
    pub mod db_category_service;
    pub mod in_memory_category_service;
}

pub mod config;
pub mod error;
pub mod extractors;
pub mod models;
pub mod handlers;
