use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::database::{ActivityRegistry, RegistryError};
use crate::services::activities_service;

#[derive(Debug, Deserialize, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let email = query.email.unwrap_or_default();
    activities_service::signup(&registry, &activity_name, &email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            rejection(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let email = query.email.unwrap_or_default();
    activities_service::unregister_from(&registry, &activity_name, &email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            rejection(e)
        })
}

pub(crate) fn rejection(err: RegistryError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RegistryError::NotFound => StatusCode::NOT_FOUND,
        RegistryError::AlreadyRegistered
        | RegistryError::CapacityExceeded
        | RegistryError::NotRegistered
        | RegistryError::InvalidEmail => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": err.to_string() })))
}
