use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use async_trait::async_trait;
use leptos::prelude::Owner;
use contracts::domain::a001_category::{Category, CategoryDto, CategoryId, CategoryListParams};
use serde_json::{json, Value};
use tokio::sync::oneshot;

use super::api::{CategoryApi, CategoryApiError};

type Reply = Result<Value, CategoryApiError>;

enum ListReply {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

/// Scripted in-memory backend. Replies are consumed in push order.
#[derive(Default)]
pub(crate) struct MockCategoryApi {
    list_replies: Mutex<VecDeque<ListReply>>,
    record_replies: Mutex<VecDeque<Reply>>,
    delete_replies: Mutex<VecDeque<Result<(), CategoryApiError>>>,
    list_params: Mutex<Vec<CategoryListParams>>,
    calls: Mutex<Vec<String>>,
}

impl MockCategoryApi {
    pub fn push_list(&self, reply: Reply) {
        self.list_replies
            .lock()
            .unwrap()
            .push_back(ListReply::Ready(reply));
    }

    /// The list call waits until the paired sender fires
    pub fn push_gated_list(&self, gate: oneshot::Receiver<Reply>) {
        self.list_replies
            .lock()
            .unwrap()
            .push_back(ListReply::Gated(gate));
    }

    /// Reply for the next single-record call (get/create/update/toggle)
    pub fn push_record(&self, reply: Reply) {
        self.record_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_delete(&self, reply: Result<(), CategoryApiError>) {
        self.delete_replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_params.lock().unwrap().len()
    }

    pub fn last_params(&self) -> Option<CategoryListParams> {
        self.list_params.lock().unwrap().last().cloned()
    }

    fn record(&self, call: String) -> Result<Category, CategoryApiError> {
        self.calls.lock().unwrap().push(call);
        let reply = self
            .record_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(CategoryApiError::Server {
                    status: 404,
                    message: None,
                })
            })?;
        Category::from_value(&reply)
            .ok_or_else(|| CategoryApiError::Decode("not a category".to_string()))
    }
}

#[async_trait(?Send)]
impl CategoryApi for MockCategoryApi {
    async fn list(&self, params: &CategoryListParams) -> Result<Value, CategoryApiError> {
        self.calls.lock().unwrap().push("list".to_string());
        self.list_params.lock().unwrap().push(params.clone());
        let reply = self.list_replies.lock().unwrap().pop_front();
        match reply {
            Some(ListReply::Ready(reply)) => reply,
            Some(ListReply::Gated(gate)) => gate
                .await
                .unwrap_or_else(|_| Err(CategoryApiError::Network("gate dropped".to_string()))),
            None => Ok(json!([])),
        }
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Category, CategoryApiError> {
        self.record(format!("get:{}", id))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Category, CategoryApiError> {
        self.record(format!("slug:{}", slug))
    }

    async fn create(&self, _dto: &CategoryDto) -> Result<Category, CategoryApiError> {
        self.record("create".to_string())
    }

    async fn update(&self, id: CategoryId, _dto: &CategoryDto) -> Result<Category, CategoryApiError> {
        self.record(format!("update:{}", id))
    }

    async fn delete(&self, id: CategoryId) -> Result<(), CategoryApiError> {
        self.calls.lock().unwrap().push(format!("delete:{}", id));
        self.delete_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn toggle_active(&self, id: CategoryId) -> Result<Category, CategoryApiError> {
        self.record(format!("toggle:{}", id))
    }
}

/// Reactive owner for signals created by a test; keep it alive for the test body
pub(crate) fn test_owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

/// Log record kept by [`CapturedLog`]
#[derive(Debug, Clone)]
pub(crate) struct LogLine {
    pub level: log::Level,
    pub target: String,
    pub message: String,
}

/// Process-wide logger that keeps every record for later assertions
pub(crate) struct CapturedLog {
    lines: Mutex<Vec<LogLine>>,
}

impl log::Log for CapturedLog {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.lines.lock().unwrap().push(LogLine {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

impl CapturedLog {
    /// Install the capturing logger (once per test binary)
    pub fn install() -> &'static CapturedLog {
        static LOGGER: OnceLock<&'static CapturedLog> = OnceLock::new();
        LOGGER.get_or_init(|| {
            let logger: &'static CapturedLog = Box::leak(Box::new(CapturedLog {
                lines: Mutex::new(Vec::new()),
            }));
            log::set_logger(logger).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
            logger
        })
    }

    pub fn contains(&self, level: log::Level, target: &str, fragment: &str) -> bool {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .any(|l| l.level == level && l.target == target && l.message.contains(fragment))
    }
}

/// Let tasks started with `spawn_local` run on the test's `LocalSet`
pub(crate) async fn drain_local_tasks() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Route `leptos::task::spawn_local` to tokio; idempotent across tests
pub(crate) fn init_executor() {
    let _ = any_spawner::Executor::init_tokio();
}
