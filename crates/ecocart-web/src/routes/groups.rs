//! Group-buy route handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::state::AppState;
use ecocart_core::groups::{GroupOrder, NewGroupOrder};
use ecocart_core::EcoCartError;

#[derive(Deserialize)]
pub struct JoinRequest {
    pub member: String,
}

pub async fn list_groups(State(state): State<AppState>) -> Json<Vec<GroupOrder>> {
    let groups = state.groups.read().await;
    Json(groups.orders().to_vec())
}

pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<NewGroupOrder>,
) -> Result<(StatusCode, Json<GroupOrder>), (StatusCode, String)> {
    let mut groups = state.groups.write().await;
    let order = groups.create(req).map_err(group_error)?;

    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn join_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<JoinRequest>,
) -> Result<Json<GroupOrder>, (StatusCode, String)> {
    let mut groups = state.groups.write().await;
    let order = groups.join(&id, &req.member).map_err(group_error)?;

    Ok(Json(order))
}

fn group_error(err: EcoCartError) -> (StatusCode, String) {
    let status = match &err {
        EcoCartError::GroupNotFound(_) => StatusCode::NOT_FOUND,
        EcoCartError::GroupFull { .. } | EcoCartError::AlreadyJoined { .. } => {
            StatusCode::CONFLICT
        }
        _ => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string())
}
