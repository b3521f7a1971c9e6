//! Item endpoints
//!
//! GET/POST /items, GET/PUT/DELETE /items/{id}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::db::repos::Item;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ValidItemId};
use crate::http::server::AppState;
use crate::models::{ItemDraft, ItemName};

/// Create/update item request
///
/// Clients may echo back an `id`; it is accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<ItemPayload> for ItemDraft {
    type Error = ApiError;

    fn try_from(req: ItemPayload) -> Result<Self, Self::Error> {
        let name = ItemName::new(req.name.as_deref().unwrap_or_default())?;
        Ok(ItemDraft::new(name, req.description))
    }
}

impl ItemPayload {
    /// Decode a request body that has already been checked to be a JSON object.
    ///
    /// Taking a map rules out array bodies, which derived `Deserialize`
    /// would otherwise fill positionally.
    fn from_object(body: Map<String, Value>) -> Result<Self, ApiError> {
        serde_json::from_value(Value::Object(body)).map_err(|e| ApiError::MalformedBody {
            message: format!("Failed to deserialize the JSON body into the target type: {}", e),
        })
    }
}

/// Item response
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            description: item.description,
        }
    }
}

/// GET /items - list all items
async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.store.list().await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// POST /items - create an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    // Validate before touching storage so a bad name never creates a row
    let draft = ItemDraft::try_from(ItemPayload::from_object(body)?)?;
    let item = state.store.create(draft).await?;

    tracing::info!(id = item.id, "Item created");
    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// GET /items/{id} - get a single item
async fn get_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.store.get(id).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// PUT /items/{id} - replace name and description
async fn update_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> Result<Json<ItemResponse>, ApiError> {
    let draft = ItemDraft::try_from(ItemPayload::from_object(body)?)?;
    let item = state.store.update(id, draft).await?;

    tracing::info!(%id, "Item updated");
    Ok(Json(ItemResponse::from(item)))
}

/// DELETE /items/{id} - delete an item
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;

    tracing::info!(%id, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> ItemPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn payload_with_name_becomes_draft() {
        let draft = ItemDraft::try_from(payload(r#"{"name":"widget","description":"a widget"}"#))
            .unwrap();
        assert_eq!(draft.name.as_str(), "widget");
        assert_eq!(draft.description.as_deref(), Some("a widget"));
    }

    #[test]
    fn payload_id_is_ignored() {
        let draft = ItemDraft::try_from(payload(r#"{"id":"99","name":"widget"}"#)).unwrap();
        assert_eq!(draft.name.as_str(), "widget");
        assert_eq!(draft.description, None);
    }

    #[test]
    fn missing_or_empty_name_is_validation_error() {
        for json in [r#"{}"#, r#"{"name":""}"#, r#"{"description":"only"}"#] {
            let err = ItemDraft::try_from(payload(json)).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "{json}");
        }
    }

    #[test]
    fn object_with_wrong_field_type_is_malformed() {
        let body = match serde_json::json!({ "name": 42 }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let err = ItemPayload::from_object(body).unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody { .. }));
    }

    #[test]
    fn response_uses_string_id_and_omits_null_description() {
        let body = serde_json::to_value(ItemResponse::from(Item {
            id: 3,
            name: "bare".into(),
            description: None,
        }))
        .unwrap();

        assert_eq!(body, serde_json::json!({ "id": "3", "name": "bare" }));
    }
}
