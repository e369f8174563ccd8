use std::sync::Arc;

use axum::{extract::State, Json};

use crate::database::ActivityRegistry;
use crate::models::ActivityListing;
use crate::services::activities_service;

pub async fn activities_handler(
    State(registry): State<Arc<ActivityRegistry>>,
) -> Json<ActivityListing> {
    Json(activities_service::list_activities(&registry))
}
