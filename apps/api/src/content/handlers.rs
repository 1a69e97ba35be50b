use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::content::models::{
    ContentQuery, CreateContentRequest, CreateContentResponse, ParseRequest, ParseResponse,
    StoredContent,
};
use crate::errors::AppError;
use crate::parser::{parse_agent_output, unexpected_platforms};
use crate::state::AppState;

fn check_size(agent_response: &str, limit: usize) -> Result<(), AppError> {
    if agent_response.len() > limit {
        return Err(AppError::Validation(format!(
            "agent_response is {} bytes; the limit is {limit}",
            agent_response.len()
        )));
    }
    Ok(())
}

/// POST /api/content/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    check_size(&req.agent_response, state.config.max_agent_response_bytes)?;

    let result = parse_agent_output(&req.agent_response, req.platform, &req.requested_platforms);
    let unexpected = unexpected_platforms(&result.content_items, &req.requested_platforms);

    Ok(Json(ParseResponse {
        content_items: result.content_items,
        completeness_score: result.completeness_score,
        missing_platforms: result.missing_platforms,
        unexpected_platforms: unexpected,
    }))
}

/// POST /api/content
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateContentRequest>,
) -> Result<(StatusCode, Json<CreateContentResponse>), AppError> {
    let user_id = req.user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::Validation("user_id must not be blank".to_string()));
    }
    check_size(&req.agent_response, state.config.max_agent_response_bytes)?;

    let result = parse_agent_output(&req.agent_response, req.platform, &req.requested_platforms);
    let unexpected = unexpected_platforms(&result.content_items, &req.requested_platforms);

    let items: Vec<StoredContent> = result
        .content_items
        .into_iter()
        .map(|item| StoredContent::from_item(user_id, item, req.media_urls.clone()))
        .collect();

    state.store.insert_many(items.clone()).await?;

    info!(
        user_id,
        items = items.len(),
        score = result.completeness_score,
        "Stored parsed content"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateContentResponse {
            items,
            completeness_score: result.completeness_score,
            missing_platforms: result.missing_platforms,
            unexpected_platforms: unexpected,
        }),
    ))
}

/// GET /api/content?user_id=...&platform=...
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ContentQuery>,
) -> Result<Json<Vec<StoredContent>>, AppError> {
    let items = state
        .store
        .list_for_user(params.user_id.trim(), params.platform.as_ref())
        .await?;
    Ok(Json(items))
}

/// GET /api/content/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredContent>, AppError> {
    let item = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Content {id} not found")))?;
    Ok(Json(item))
}
