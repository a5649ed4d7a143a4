use std::future::Future;
use std::sync::Arc;

use contracts::domain::a001_category::{
    decode_category_list, filter_by_icon_type, search_categories, Category, CategoryId,
    CategoryListParams, CategoryStats,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::CategoryApi;

pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar las categorías";
pub const FETCH_ERROR_MESSAGE: &str = "Error al obtener la categoría";

pub(crate) const LOG_TARGET: &str = "categories";

#[derive(Clone)]
pub struct CategoryStoreOptions {
    /// Run one `load` as soon as the store is created by [`use_categories`]
    pub auto_load: bool,
    /// Ask the backend for inactive categories too (admin screens)
    pub include_inactive: bool,
    /// Called with the message whenever a list load fails
    pub on_error: Option<Callback<String>>,
}

impl Default for CategoryStoreOptions {
    fn default() -> Self {
        Self {
            auto_load: true,
            include_inactive: false,
            on_error: None,
        }
    }
}

/// Reactive category list with its loading/error state.
///
/// `categorias` keeps backend order. While a reload is in flight the previous
/// list stays visible; a failed load empties it and sets `error`.
#[derive(Clone)]
pub struct CategoryStore {
    pub categorias: RwSignal<Vec<Category>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    api: Arc<dyn CategoryApi>,
    include_inactive: bool,
    on_error: Option<Callback<String>>,
    /// Number of the latest issued list request
    request_seq: StoredValue<u64>,
}

impl CategoryStore {
    pub fn new(api: Arc<dyn CategoryApi>, options: CategoryStoreOptions) -> Self {
        Self {
            categorias: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            api,
            include_inactive: options.include_inactive,
            on_error: options.on_error,
            request_seq: StoredValue::new(0),
        }
    }

    pub fn api(&self) -> Arc<dyn CategoryApi> {
        Arc::clone(&self.api)
    }

    pub fn includes_inactive(&self) -> bool {
        self.include_inactive
    }

    fn base_params(&self) -> CategoryListParams {
        if self.include_inactive {
            CategoryListParams::with_inactive()
        } else {
            CategoryListParams::active_only()
        }
    }

    fn next_request(&self) -> u64 {
        self.request_seq.update_value(|seq| *seq += 1);
        self.request_seq.get_value()
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.request_seq.get_value() == seq
    }

    /// Load the list. `overrides` are merged over the base filter.
    ///
    /// The request is issued (numbered, `loading` raised) when `load` is called,
    /// not when the future is first polled. Only the latest issued request writes
    /// the shared state; an older one that settles later still returns its own
    /// result to its caller.
    pub fn load(
        &self,
        overrides: Option<CategoryListParams>,
    ) -> impl Future<Output = Result<Vec<Category>, String>> + 'static {
        let params = self.base_params().merged_with(overrides);
        let seq = self.next_request();
        self.loading.set(true);
        self.error.set(None);

        let store = self.clone();
        async move { store.settle_load(seq, params).await }
    }

    async fn settle_load(
        self,
        seq: u64,
        params: CategoryListParams,
    ) -> Result<Vec<Category>, String> {
        let outcome = self.api.list(&params).await;

        let is_latest = self.is_latest(seq);
        if !is_latest {
            log::debug!(target: LOG_TARGET, "discarding stale category list response #{}", seq);
        }

        match outcome {
            Ok(payload) => {
                let categories = match decode_category_list(payload) {
                    Ok(decoded) => {
                        if decoded.skipped > 0 {
                            log::warn!(
                                target: LOG_TARGET,
                                "skipped {} unreadable category records",
                                decoded.skipped
                            );
                        }
                        decoded.categories
                    }
                    Err(malformed) => {
                        log::warn!(target: LOG_TARGET, "malformed category list payload: {}", malformed);
                        Vec::new()
                    }
                };

                if is_latest {
                    self.categorias.set(categories.clone());
                    self.error.set(None);
                    self.loading.set(false);
                }
                Ok(categories)
            }
            Err(err) => {
                log::error!(target: LOG_TARGET, "failed to load categories: {}", err);
                let message = err.user_message(LOAD_ERROR_MESSAGE);

                if is_latest {
                    self.categorias.set(Vec::new());
                    self.error.set(Some(message.clone()));
                    self.loading.set(false);
                    if let Some(on_error) = self.on_error {
                        on_error.run(message.clone());
                    }
                }
                Err(message)
            }
        }
    }

    /// Re-run `load` with the base filter (the "retry" control)
    pub fn retry(&self) {
        let pending = self.load(None);
        spawn_local(async move {
            let _ = pending.await;
        });
    }

    /// Case-insensitive search over the loaded set; blank term returns everything
    pub fn search(&self, term: &str) -> Vec<Category> {
        self.categorias.with(|all| search_categories(all, term))
    }

    pub fn filter_by_icon_type(&self, icon_type: &str) -> Vec<Category> {
        self.categorias.with(|all| filter_by_icon_type(all, icon_type))
    }

    pub fn compute_stats(&self) -> CategoryStats {
        self.categorias.with(|all| CategoryStats::collect(all))
    }

    /// Distinct `TipoIcono` values of the loaded set, sorted
    pub fn icon_types(&self) -> Vec<String> {
        self.compute_stats().counts_by_icon_type.into_keys().collect()
    }

    /// Fetch one record directly from the backend; shared state is not touched
    pub async fn obtain_by_id(&self, id: CategoryId) -> Result<Category, String> {
        self.api.get_by_id(id).await.map_err(|err| {
            log::error!(target: LOG_TARGET, "failed to fetch category {}: {}", id, err);
            err.user_message(FETCH_ERROR_MESSAGE)
        })
    }

    pub async fn obtain_by_slug(&self, slug: &str) -> Result<Category, String> {
        self.api.get_by_slug(slug).await.map_err(|err| {
            log::error!(target: LOG_TARGET, "failed to fetch category '{}': {}", slug, err);
            err.user_message(FETCH_ERROR_MESSAGE)
        })
    }
}

/// Create a store and, if configured, start the initial load
pub fn use_categories(api: Arc<dyn CategoryApi>, options: CategoryStoreOptions) -> CategoryStore {
    let auto_load = options.auto_load;
    let store = CategoryStore::new(api, options);
    if auto_load {
        store.retry();
    }
    store
}
