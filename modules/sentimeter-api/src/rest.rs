use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::warn;

use sentimeter_client::{tally, Comment, CommentStats, ScoredComment};
use sentimeter_core::{analyze_guarded, overrides};

use crate::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    text: Option<String>,
}

#[derive(Deserialize)]
pub struct BatchRequest {
    comments: Vec<Comment>,
}

pub async fn api_analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let text = body.text.unwrap_or_default();
    if text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Text is required"})),
        )
            .into_response();
    }

    if state.canned_responses {
        if let Some(result) = overrides::lookup(&text) {
            return Json(result).into_response();
        }
    }

    match analyze_guarded(&text) {
        Ok(result) => {
            if let Some(detail) = &result.error {
                warn!(error = %detail, "Scoring degraded to neutral fallback");
            }
            Json(result).into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "Failed to analyze text",
                "details": e.to_string(),
            })),
        )
            .into_response(),
    }
}

pub async fn api_analyze_batch(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BatchRequest>,
) -> impl IntoResponse {
    let mut scored: Vec<ScoredComment> = Vec::with_capacity(body.comments.len());

    for comment in body.comments {
        let canned = if state.canned_responses {
            overrides::lookup(&comment.text)
        } else {
            None
        };

        let result = match canned {
            Some(result) => result,
            // Comments with empty text carry no signal; skip them rather
            // than failing the whole batch
            None => match analyze_guarded(&comment.text) {
                Ok(result) => result,
                Err(_) => continue,
            },
        };

        scored.push(ScoredComment {
            id: comment.id,
            text: comment.text,
            sentiment: result.sentiment,
            score: result.score,
            confidence: result.confidence,
        });
    }

    let stats: CommentStats = tally(&scored);

    Json(serde_json::json!({
        "results": scored,
        "stats": stats,
    }))
    .into_response()
}
