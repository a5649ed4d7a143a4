use std::sync::Arc;

use contracts::domain::a001_category::{Category, CategoryDto, CategoryId};

use super::api::{CategoryApi, CategoryApiError};
use super::store::{use_categories, CategoryStore, CategoryStoreOptions, LOG_TARGET};

pub const CREATE_ERROR_MESSAGE: &str = "Error al crear la categoría";
pub const UPDATE_ERROR_MESSAGE: &str = "Error al actualizar la categoría";
pub const DELETE_ERROR_MESSAGE: &str = "Error al eliminar la categoría";
pub const TOGGLE_ERROR_MESSAGE: &str = "Error al cambiar el estado de la categoría";

/// Result of a mutation plus the outcome of the reload that follows it.
///
/// `result` only describes the write. `refreshed` is `true` when the list was
/// reloaded successfully afterwards; it is always `false` for a failed write,
/// which never triggers a reload.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome<T> {
    pub result: Result<T, String>,
    pub refreshed: bool,
}

impl<T> MutationOutcome<T> {
    fn failed(message: String) -> Self {
        Self {
            result: Err(message),
            refreshed: false,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&str> {
        self.result.as_ref().err().map(String::as_str)
    }
}

/// Category store with write operations, always including inactive records.
///
/// Local state is never patched: each successful write is followed by a full
/// reload that completes before the operation returns.
#[derive(Clone)]
pub struct CategoryAdminStore {
    store: CategoryStore,
}

impl CategoryAdminStore {
    pub fn new(api: Arc<dyn CategoryApi>, options: CategoryStoreOptions) -> Self {
        let options = CategoryStoreOptions {
            include_inactive: true,
            ..options
        };
        Self {
            store: CategoryStore::new(api, options),
        }
    }

    pub async fn create(&self, dto: CategoryDto) -> MutationOutcome<Category> {
        if let Err(message) = dto.validate() {
            return MutationOutcome::failed(message);
        }
        let result = self.store.api().create(&dto).await;
        self.settle("create", result, CREATE_ERROR_MESSAGE).await
    }

    pub async fn update(&self, id: CategoryId, dto: CategoryDto) -> MutationOutcome<Category> {
        if let Err(message) = dto.validate() {
            return MutationOutcome::failed(message);
        }
        let result = self.store.api().update(id, &dto).await;
        self.settle("update", result, UPDATE_ERROR_MESSAGE).await
    }

    pub async fn delete(&self, id: CategoryId) -> MutationOutcome<()> {
        let result = self.store.api().delete(id).await;
        self.settle("delete", result, DELETE_ERROR_MESSAGE).await
    }

    pub async fn toggle_active(&self, id: CategoryId) -> MutationOutcome<Category> {
        let result = self.store.api().toggle_active(id).await;
        self.settle("toggle", result, TOGGLE_ERROR_MESSAGE).await
    }

    async fn settle<T>(
        &self,
        operation: &str,
        result: Result<T, CategoryApiError>,
        fallback: &str,
    ) -> MutationOutcome<T> {
        match result {
            Ok(data) => {
                let refreshed = self.store.load(None).await.is_ok();
                if !refreshed {
                    log::warn!(
                        target: LOG_TARGET,
                        "category {} succeeded but the reload failed",
                        operation
                    );
                }
                MutationOutcome {
                    result: Ok(data),
                    refreshed,
                }
            }
            Err(err) => {
                log::error!(target: LOG_TARGET, "category {} failed: {}", operation, err);
                MutationOutcome::failed(err.user_message(fallback))
            }
        }
    }
}

impl std::ops::Deref for CategoryAdminStore {
    type Target = CategoryStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

/// Admin store with the initial load already started
pub fn use_category_admin(api: Arc<dyn CategoryApi>) -> CategoryAdminStore {
    let store = use_categories(
        api,
        CategoryStoreOptions {
            include_inactive: true,
            ..CategoryStoreOptions::default()
        },
    );
    CategoryAdminStore { store }
}
