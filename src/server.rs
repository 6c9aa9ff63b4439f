// HTTP API server - serves the mocked insights endpoint

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tokio_util::sync::CancellationToken;

use crate::insights::{computeInsights, InsightsRequest};

pub const API_PORT: u16 = 44060;
pub const API_BIND_ADDRESS: &str = "127.0.0.1:44060";

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

/// POST /api/ai-insights with `{ "todos": Task[] }`
async fn aiInsights(payload: Result<Json<InsightsRequest>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(request)) => Json(computeInsights(&request.todos)).into_response(),
        Err(rejection) => {
            tracing::warn!("rejected insights request: {}", rejection.body_text());
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Failed to generate insights".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub fn createRouter() -> Router {
    Router::new().route("/api/ai-insights", post(aiInsights))
}

/// Serve the API until the cancellation token fires
pub async fn startServer(ct: CancellationToken) -> Result<(), String> {
    let listener = tokio::net::TcpListener::bind(API_BIND_ADDRESS)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", API_BIND_ADDRESS, e))?;

    tracing::info!("API server started on {}", API_BIND_ADDRESS);

    axum::serve(listener, createRouter())
        .with_graceful_shutdown(async move {
            ct.cancelled().await;
        })
        .await
        .map_err(|e| e.to_string())?;

    tracing::info!("API server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::models::Task;

    async fn responseJson(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn insightsRequest(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/ai-insights")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_returns_report() {
        let mut done = Task::new("t1".to_string(), "Ship release".to_string(), "work".to_string());
        done.completed = true;
        let pending = Task::new("t2".to_string(), "Write notes".to_string(), "work".to_string());

        let body = serde_json::to_string(&InsightsRequest {
            todos: vec![done, pending],
        })
        .unwrap();

        let response = createRouter().oneshot(insightsRequest(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = responseJson(response).await;
        assert_eq!(json["productivity"]["total"], 2);
        assert_eq!(json["productivity"]["completed"], 1);
        assert_eq!(json["productivity"]["score"], 50);
        assert_eq!(json["suggestedTasks"].as_array().unwrap().len(), 3);
        assert!(json["insights"].as_array().unwrap().len() >= 2);
    }

    #[tokio::test]
    async fn test_malformed_body_returns_error_payload() {
        let response = createRouter()
            .oneshot(insightsRequest(r#"{"todos": "not a list"}"#.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = responseJson(response).await;
        assert_eq!(json["error"], "Failed to generate insights");
    }

    #[tokio::test]
    async fn test_missing_body_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/ai-insights")
            .body(Body::empty())
            .unwrap();

        let response = createRouter().oneshot(request).await.unwrap();
        assert!(!response.status().is_success());
    }
}
