use async_trait::async_trait;
use contracts::domain::a001_category::{Category, CategoryDto, CategoryId, CategoryListParams};
use gloo_net::http::{Request, Response};
use serde_json::Value;
use thiserror::Error;

use crate::shared::api_utils::{api_base, join_url};

const COLLECTION_PATH: &str = "/api/categorias";

/// Ошибка транспортного уровня
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl CategoryApiError {
    /// Message sent by the backend, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            CategoryApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for the user: the backend message or the given fallback
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Pull a readable message out of an error body.
///
/// Accepts `{"error": "..."}`, `{"error": {"message": "..."}}` and `{"message": "..."}`.
pub fn extract_error_message(body: &Value) -> Option<String> {
    let text = match body.get("error") {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(Value::Object(inner)) => inner.get("message").and_then(Value::as_str),
        _ => body.get("message").and_then(Value::as_str),
    };
    text.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Backend operations the category store depends on.
///
/// `list` hands back the raw payload: deciding what to do with a malformed
/// list is the store's job. Single-record operations decode here.
#[async_trait(?Send)]
pub trait CategoryApi: Send + Sync {
    async fn list(&self, params: &CategoryListParams) -> Result<Value, CategoryApiError>;

    async fn get_by_id(&self, id: CategoryId) -> Result<Category, CategoryApiError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Category, CategoryApiError>;

    async fn create(&self, dto: &CategoryDto) -> Result<Category, CategoryApiError>;

    async fn update(&self, id: CategoryId, dto: &CategoryDto) -> Result<Category, CategoryApiError>;

    async fn delete(&self, id: CategoryId) -> Result<(), CategoryApiError>;

    async fn toggle_active(&self, id: CategoryId) -> Result<Category, CategoryApiError>;
}

/// [`CategoryApi`] over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpCategoryApi {
    base_url: String,
}

impl HttpCategoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Backend on the current host (see [`api_base`])
    pub fn from_window() -> Self {
        Self::new(api_base())
    }

    fn collection_url(&self) -> String {
        join_url(&self.base_url, COLLECTION_PATH)
    }

    fn item_url(&self, id: CategoryId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    pub fn list_url(&self, params: &CategoryListParams) -> Result<String, CategoryApiError> {
        let query =
            serde_qs::to_string(params).map_err(|e| CategoryApiError::Serialize(e.to_string()))?;
        if query.is_empty() {
            Ok(self.collection_url())
        } else {
            Ok(format!("{}?{}", self.collection_url(), query))
        }
    }
}

async fn send(request: Request) -> Result<Response, CategoryApiError> {
    request
        .send()
        .await
        .map_err(|e| CategoryApiError::Network(e.to_string()))
}

async fn ensure_ok(response: Response) -> Result<Response, CategoryApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .json::<Value>()
        .await
        .ok()
        .as_ref()
        .and_then(extract_error_message);
    Err(CategoryApiError::Server { status, message })
}

async fn read_json(response: Response) -> Result<Value, CategoryApiError> {
    ensure_ok(response)
        .await?
        .json::<Value>()
        .await
        .map_err(|e| CategoryApiError::Decode(e.to_string()))
}

async fn read_category(response: Response) -> Result<Category, CategoryApiError> {
    let value = read_json(response).await?;
    Category::from_value(&value)
        .ok_or_else(|| CategoryApiError::Decode("response is not a category record".to_string()))
}

fn with_json_body(
    request: gloo_net::http::RequestBuilder,
    dto: &CategoryDto,
) -> Result<Request, CategoryApiError> {
    request
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| CategoryApiError::Serialize(e.to_string()))
}

fn bare(request: gloo_net::http::RequestBuilder) -> Result<Request, CategoryApiError> {
    request
        .header("Accept", "application/json")
        .build()
        .map_err(|e| CategoryApiError::Serialize(e.to_string()))
}

#[async_trait(?Send)]
impl CategoryApi for HttpCategoryApi {
    async fn list(&self, params: &CategoryListParams) -> Result<Value, CategoryApiError> {
        let request = bare(Request::get(&self.list_url(params)?))?;
        read_json(send(request).await?).await
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Category, CategoryApiError> {
        let request = bare(Request::get(&self.item_url(id)))?;
        read_category(send(request).await?).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Category, CategoryApiError> {
        let url = format!("{}/slug/{}", self.collection_url(), urlencoding::encode(slug));
        let request = bare(Request::get(&url))?;
        read_category(send(request).await?).await
    }

    async fn create(&self, dto: &CategoryDto) -> Result<Category, CategoryApiError> {
        let request = with_json_body(Request::post(&self.collection_url()), dto)?;
        read_category(send(request).await?).await
    }

    async fn update(&self, id: CategoryId, dto: &CategoryDto) -> Result<Category, CategoryApiError> {
        let request = with_json_body(Request::put(&self.item_url(id)), dto)?;
        read_category(send(request).await?).await
    }

    async fn delete(&self, id: CategoryId) -> Result<(), CategoryApiError> {
        let request = bare(Request::delete(&self.item_url(id)))?;
        ensure_ok(send(request).await?).await?;
        Ok(())
    }

    async fn toggle_active(&self, id: CategoryId) -> Result<Category, CategoryApiError> {
        let url = format!("{}/toggle", self.item_url(id));
        let request = bare(Request::patch(&url))?;
        read_category(send(request).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(&json!({ "error": "Nombre duplicado" })),
            Some("Nombre duplicado".to_string())
        );
        assert_eq!(
            extract_error_message(&json!({ "error": { "message": "Sin permiso" } })),
            Some("Sin permiso".to_string())
        );
        assert_eq!(
            extract_error_message(&json!({ "message": "Not found" })),
            Some("Not found".to_string())
        );
        assert_eq!(extract_error_message(&json!({ "error": "  " })), None);
        assert_eq!(extract_error_message(&json!([1, 2])), None);
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let server = CategoryApiError::Server {
            status: 409,
            message: Some("Slug en uso".into()),
        };
        assert_eq!(server.user_message("fallback"), "Slug en uso");

        let silent = CategoryApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(silent.user_message("fallback"), "fallback");
        assert_eq!(silent.to_string(), "HTTP 500: no message");

        let network = CategoryApiError::Network("offline".into());
        assert_eq!(network.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_list_url() {
        let api = HttpCategoryApi::new("http://localhost:3000");
        assert_eq!(
            api.list_url(&CategoryListParams::default()).unwrap(),
            "http://localhost:3000/api/categorias"
        );
        assert_eq!(
            api.list_url(&CategoryListParams::active_only()).unwrap(),
            "http://localhost:3000/api/categorias?active=true"
        );
        assert_eq!(
            api.list_url(&CategoryListParams::with_inactive()).unwrap(),
            "http://localhost:3000/api/categorias?includeInactive=true"
        );
    }
}
