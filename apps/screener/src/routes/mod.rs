pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

/// Uploaded resumes may be larger than axum's 2 MB default.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            delete(handlers::handle_delete_session),
        )
        // Resume upload + breakdown
        .route(
            "/api/v1/sessions/:id/resume",
            post(handlers::handle_upload_resume).get(handlers::handle_get_resume),
        )
        .route(
            "/api/v1/sessions/:id/resume/text",
            post(handlers::handle_submit_resume_text).get(handlers::handle_get_resume_text),
        )
        .route(
            "/api/v1/sessions/:id/resume/sections",
            get(handlers::handle_list_sections),
        )
        .route(
            "/api/v1/sessions/:id/resume/sections/:section",
            get(handlers::handle_get_section),
        )
        // Question answering
        .route(
            "/api/v1/sessions/:id/questions",
            post(handlers::handle_ask_question),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::knowledge::embedder::testing::{BagOfWordsEmbedder, FailingEmbedder};
    use crate::knowledge::{Embedder, TextSplitter};
    use crate::llm_client::testing::ScriptedGenerator;
    use crate::session::SessionStore;

    const EXTRACTION_REPLY: &str = "Name: Jane Doe\n\
        Email: jane@example.com\n\
        Phone: 555-0100\n\
        Work Experience:\n\
        • Acme Corp (Jan 2020 - Mar 2022, Remote)\n\
        * Built payment services\n\
        Technical Skills: Rust, SQL\n";

    const RESUME_TEXT: &str = "Jane Doe\njane@example.com\n\n\
        Acme Corp, Jan 2020 - Mar 2022. Built payment services in Rust and SQL.";

    fn test_config() -> Config {
        Config {
            llm_api_url: "http://localhost/chat/completions".into(),
            llm_api_key: "test".into(),
            llm_model: "test-model".into(),
            embedding_api_url: "http://localhost/embeddings".into(),
            embedding_api_key: "test".into(),
            embedding_model: "test-embed".into(),
            tenure_reference_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            session_ttl_minutes: 60,
            port: 0,
            rust_log: "info".into(),
        }
    }

    fn app_with(llm: Arc<ScriptedGenerator>, embedder: Arc<dyn Embedder>) -> Router {
        build_router(AppState {
            llm,
            embedder,
            sessions: SessionStore::default(),
            splitter: TextSplitter::default(),
            config: test_config(),
        })
    }

    fn app(replies: &[&str]) -> (Router, Arc<ScriptedGenerator>) {
        let llm = Arc::new(ScriptedGenerator::new(replies.iter().copied()));
        let app = app_with(llm.clone(), Arc::new(BagOfWordsEmbedder::default()));
        (app, llm)
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn create_session(app: &Router) -> String {
        let response = send(app, post_json("/api/v1/sessions", json!({}))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await["session_id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app(&[]);
        let response = send(&app, get("/health")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "screener");
        assert_eq!(body["sessions"], 0);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let (app, _) = app(&[]);
        let uri = format!("/api/v1/sessions/{}/resume", uuid::Uuid::new_v4());
        let response = send(&app, get(&uri)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_question_before_upload_returns_advisory() {
        let (app, llm) = app(&[]);
        let id = create_session(&app).await;

        let response = send(
            &app,
            post_json(
                &format!("/api/v1/sessions/{id}/questions"),
                json!({ "question": "What is the candidate's email?" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["answer"], "Please process a resume first.");
        assert_eq!(body["mode"], "standard");
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected() {
        let (app, _) = app(&[]);
        let id = create_session(&app).await;

        let response = send(
            &app,
            post_json(
                &format!("/api/v1/sessions/{id}/questions"),
                json!({ "question": "   " }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_text_upload_then_breakdown_and_question() {
        let (app, llm) = app(&[EXTRACTION_REPLY, "- jane@example.com"]);
        let id = create_session(&app).await;

        let response = send(
            &app,
            post_json(
                &format!("/api/v1/sessions/{id}/resume/text"),
                json!({ "resume_text": RESUME_TEXT }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["resume"]["basic_info"]["name"], "Jane Doe");
        assert_eq!(body["resume"]["work_experience"][0]["company"], "Acme Corp");
        assert_eq!(body["resume"]["work_experience"][0]["location"], "Remote");
        assert_eq!(body["chunk_count"], 1);

        let response = send(&app, get(&format!("/api/v1/sessions/{id}/resume"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["technical_skills"], "Rust, SQL");

        let response = send(&app, get(&format!("/api/v1/sessions/{id}/resume/text"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["resume_text"], RESUME_TEXT);

        let response = send(
            &app,
            get(&format!(
                "/api/v1/sessions/{id}/resume/sections/work_experience"
            )),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let section = json_body(response).await;
        assert_eq!(section["title"], "Work Experience");
        assert_eq!(section["is_empty"], false);
        assert_eq!(
            section["content"][0]["responsibilities"],
            json!(["Built payment services"])
        );

        let response = send(
            &app,
            get(&format!("/api/v1/sessions/{id}/resume/sections/projects")),
        )
        .await;
        let section = json_body(response).await;
        assert_eq!(section["is_empty"], true);
        assert_eq!(section["content"], json!([]));

        let response = send(&app, get(&format!("/api/v1/sessions/{id}/resume/sections"))).await;
        let sections = json_body(response).await;
        assert_eq!(sections.as_array().unwrap().len(), 7);
        assert_eq!(sections[0]["section"], "basic_info");
        assert_eq!(sections[0]["content"]["phone"], "555-0100");

        let response = send(
            &app,
            post_json(
                &format!("/api/v1/sessions/{id}/questions"),
                json!({ "question": "What is the candidate's email?" }),
            ),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["answer"], "- jane@example.com");
        assert_eq!(body["mode"], "standard");
        assert!(llm.prompts()[1].contains("jane@example.com"));
    }

    #[tokio::test]
    async fn test_multipart_text_upload() {
        let (app, _) = app(&[EXTRACTION_REPLY]);
        let id = create_session(&app).await;

        let boundary = "screener-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"resume.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {RESUME_TEXT}\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/v1/sessions/{id}/resume"))
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["resume"]["basic_info"]["email"],
            "jane@example.com"
        );
    }

    #[tokio::test]
    async fn test_multipart_without_file_field() {
        let (app, _) = app(&[]);
        let id = create_session(&app).await;

        let boundary = "b";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"note\"\r\n\r\n\
             hello\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/v1/sessions/{id}/resume"))
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_embedding_failure_is_bad_gateway_and_keeps_session_empty() {
        let llm = Arc::new(ScriptedGenerator::new([EXTRACTION_REPLY]));
        let app = app_with(llm, Arc::new(FailingEmbedder));
        let id = create_session(&app).await;

        let response = send(
            &app,
            post_json(
                &format!("/api/v1/sessions/{id}/resume/text"),
                json!({ "resume_text": RESUME_TEXT }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"]["code"], "EMBEDDING_ERROR");

        let response = send(&app, get(&format!("/api/v1/sessions/{id}/resume"))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, get(&format!("/api/v1/sessions/{id}/resume/text"))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let (app, _) = app(&[]);
        let id = create_session(&app).await;

        let delete = || {
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/sessions/{id}"))
                .body(Body::empty())
                .unwrap()
        };

        assert_eq!(send(&app, delete()).await.status(), StatusCode::NO_CONTENT);
        assert_eq!(send(&app, delete()).await.status(), StatusCode::NOT_FOUND);
    }
}
