use crate::api::{AppState, Json};
use crate::error::Result;
use crate::models::{Incident, IncidentInput, IncidentUpdate, NoteInput};
use crate::state::IncidentFilter;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// List incidents, optionally filtered by severity/status/free-text query
pub async fn list_incidents(
    State(state): State<AppState>,
    Query(params): Query<ListIncidentsQuery>,
) -> Json<ListIncidentsResponse> {
    let filter = IncidentFilter::new(&params.severity, &params.status, &params.q);
    let items = filter.apply(state.store.list());
    Json(ListIncidentsResponse { items })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListIncidentsQuery {
    pub severity: String,
    pub status: String,
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct ListIncidentsResponse {
    pub items: Vec<Incident>,
}

/// Create an incident
pub async fn create_incident(
    State(state): State<AppState>,
    Json(request): Json<IncidentInput>,
) -> Result<(StatusCode, Json<Incident>)> {
    request.validate()?;

    let incident = state.store.create(request);

    tracing::info!(
        incident_id = %incident.id,
        severity = %incident.severity,
        "Incident created"
    );

    Ok((StatusCode::CREATED, Json(incident)))
}

/// Get an incident by id
pub async fn get_incident(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Incident>> {
    let incident = state.store.get(&id)?;
    Ok(Json(incident))
}

/// Partially update an incident's severity/status/owner
pub async fn update_incident(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<IncidentUpdate>,
) -> Result<Json<Incident>> {
    let incident = state.store.update(&id, request)?;

    tracing::info!(
        incident_id = %incident.id,
        status = %incident.status,
        "Incident updated"
    );

    Ok(Json(incident))
}

/// Append an investigation note to an incident
pub async fn add_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<NoteInput>,
) -> Result<Json<Incident>> {
    let incident = state.store.add_note(&id, request)?;

    tracing::info!(incident_id = %incident.id, "Note added");

    Ok(Json(incident))
}
