use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use vexchat_core::knowledge::{CompetitionLevel, Resource, TopicInfo};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{InfoQuery, ResourcesQuery};
use crate::response_types::GameManualsResponse;

pub async fn competition_levels(
    State(state): State<Arc<AppState>>,
) -> Json<&'static [CompetitionLevel]> {
    Json(state.knowledge_service.competition_levels())
}

pub async fn resources(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResourcesQuery>,
) -> Json<Vec<Resource>> {
    let resources =
        state.knowledge_service.find_resources(query.category.as_deref(), query.search.as_deref());
    Json(resources)
}

pub async fn topic_info(
    State(state): State<Arc<AppState>>,
    Path(topic): Path<String>,
    Query(query): Query<InfoQuery>,
) -> Result<Json<TopicInfo>, ApiError> {
    let info_type = query.info_type.unwrap_or_default();
    state
        .knowledge_service
        .topic_info(&info_type, &topic)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Information not found".to_owned()))
}

pub async fn game_manuals(State(state): State<Arc<AppState>>) -> Json<GameManualsResponse> {
    let (v5_push_back, iq_mix_match) = state.knowledge_service.game_manuals();
    Json(GameManualsResponse { v5_push_back, iq_mix_match })
}
