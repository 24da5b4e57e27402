//! Route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

use sitelens_core::{AnalysisError, AnalysisReport};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../../assets/web/index.html");

/// GET / - Serve the analyzer page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub ollama: bool,
    pub model: String,
}

/// POST /api/analyze - Run one analysis cycle.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, (StatusCode, Json<ErrorBody>)> {
    // A second submission while one is in flight gets 409 instead of queueing.
    let mut session = state
        .session
        .try_write()
        .map_err(|_| error_response(AnalysisError::Busy))?;

    let report = session
        .submit(state.client.as_ref(), &req.url)
        .await
        .map_err(error_response)?;

    Ok(Json(report))
}

/// GET /api/health - Endpoint and model availability.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let ollama = state.client.health_check().await;
    Json(HealthResponse {
        ollama,
        model: state.client.model().to_string(),
    })
}

fn error_response(err: AnalysisError) -> (StatusCode, Json<ErrorBody>) {
    let status = match &err {
        AnalysisError::EmptyUrl => StatusCode::BAD_REQUEST,
        AnalysisError::Busy => StatusCode::CONFLICT,
        AnalysisError::Network(_) | AnalysisError::Endpoint { .. } => StatusCode::BAD_GATEWAY,
        AnalysisError::MalformedResponse(_) | AnalysisError::SchemaMismatch(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorBody {
            error: err.kind(),
            message: err.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let (status, body) = error_response(AnalysisError::EmptyUrl);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "empty_url");

        let (status, _) = error_response(AnalysisError::Busy);
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = error_response(AnalysisError::Network("refused".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = error_response(AnalysisError::Endpoint {
            status: 404,
            body: String::new(),
        });
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, body) = error_response(AnalysisError::schema("bad"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "schema_mismatch");
    }
}
