use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::database::ActivityRegistry;
use crate::services::activities_service;

/// Kept for clients of the old participant-id endpoint; rosters are keyed
/// by email, see `activity::unregister_handler`.
pub async fn unregister_participant_handler(
    Path(participant_id): Path<String>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Json<Value> {
    let message = activities_service::unregister_participant(&registry, &participant_id);
    Json(json!({ "message": message }))
}
