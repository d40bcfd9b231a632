//! Workflow collection and resource handlers.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use lattice_runtime::definition::{WorkflowDraft, WorkflowGraph};
use lattice_runtime::service::WorkflowService;
use serde::{Deserialize, Serialize};

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::request::PageQuery;
use crate::handler::response::{WorkflowCreated, WorkflowList};
use crate::service::ServiceState;

/// Tracing target for workflow operations.
const TRACING_TARGET: &str = "lattice_server::handler::workflows";

/// Path parameters for workflow resource operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkflowPathParams {
    /// The identifier of the workflow.
    pub id: String,
}

/// Lists one page of the merged workflow collection.
#[tracing::instrument(skip(workflows))]
async fn list_workflows(
    State(workflows): State<WorkflowService>,
    Query(query): Query<PageQuery>,
) -> Result<(StatusCode, Json<WorkflowList>)> {
    let (page, page_size) = (query.page(), query.page_size());
    let listed = workflows.list(page, page_size);

    tracing::debug!(
        target: TRACING_TARGET,
        page,
        page_size,
        total = listed.total,
        returned = listed.items.len(),
        "workflows listed"
    );

    let response = WorkflowList::new(listed, page, page_size);
    Ok((StatusCode::OK, Json(response)))
}

/// Returns the full graph for any workflow id.
///
/// Stored workflows take precedence; other ids resolve through the catalog,
/// so this endpoint never reports not-found.
#[tracing::instrument(skip(workflows))]
async fn get_workflow(
    State(workflows): State<WorkflowService>,
    Path(path_params): Path<WorkflowPathParams>,
) -> Result<(StatusCode, Json<WorkflowGraph>)> {
    let graph = workflows.fetch(&path_params.id);

    tracing::debug!(
        target: TRACING_TARGET,
        id = %path_params.id,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "workflow resolved"
    );

    Ok((StatusCode::OK, Json(graph)))
}

/// Creates a user workflow.
#[tracing::instrument(skip(workflows, draft))]
async fn create_workflow(
    State(workflows): State<WorkflowService>,
    Json(draft): Json<WorkflowDraft>,
) -> Result<(StatusCode, Json<WorkflowCreated>)> {
    let created = workflows.create(draft)?;

    tracing::info!(
        target: TRACING_TARGET,
        id = %created.summary.id,
        nodes = created.node_count,
        edges = created.edge_count,
        "workflow created"
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Replaces a stored workflow and returns the new graph.
#[tracing::instrument(skip(workflows, draft))]
async fn update_workflow(
    State(workflows): State<WorkflowService>,
    Path(path_params): Path<WorkflowPathParams>,
    Json(draft): Json<WorkflowDraft>,
) -> Result<(StatusCode, Json<WorkflowGraph>)> {
    let graph = workflows.update(&path_params.id, draft)?;

    tracing::info!(
        target: TRACING_TARGET,
        id = %path_params.id,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "workflow replaced"
    );

    Ok((StatusCode::OK, Json(graph)))
}

/// Deletes a stored workflow.
#[tracing::instrument(skip(workflows))]
async fn delete_workflow(
    State(workflows): State<WorkflowService>,
    Path(path_params): Path<WorkflowPathParams>,
) -> Result<StatusCode> {
    workflows.delete(&path_params.id)?;

    tracing::info!(target: TRACING_TARGET, id = %path_params.id, "workflow deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with the workflow routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/workflows", get(list_workflows).post(create_workflow))
        .route(
            "/workflows/{id}",
            get(get_workflow)
                .put(update_workflow)
                .delete(delete_workflow),
        )
}
