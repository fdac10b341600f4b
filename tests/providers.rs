use eventra::configuration::{AiProviderType, AiSettings};
use eventra::flows::Flows;
use eventra::forms::ai::{ChatRequest, IdeaRequest, ImageRequest};
use eventra::providers::{create_provider, GenerationProvider, GenerationRequest, ProviderError};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(provider: AiProviderType, endpoint: &str) -> AiSettings {
    AiSettings {
        enabled: true,
        provider,
        endpoint: Some(endpoint.to_string()),
        api_key: Some("test-key".to_string()),
        timeout_secs: 5,
        ..Default::default()
    }
}

fn gemini_text(text: &str) -> serde_json::Value {
    json!({ "candidates": [ { "content": { "role": "model", "parts": [ { "text": text } ] } } ] })
}

async fn gemini_flows(server: &MockServer) -> Flows {
    let settings = settings(AiProviderType::Gemini, &server.uri());
    let provider = create_provider(&settings).unwrap();
    Flows::new(provider, &settings).unwrap()
}

#[tokio::test]
async fn gemini_structured_output_reaches_the_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text(
            r#"{"projectIdeas":[{"title":"Pitch Deck Builder","description":"Slides from a short brief."}]}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let flows = gemini_flows(&server).await;
    let ideas = flows
        .ideas
        .run(&IdeaRequest {
            skills: "Marketing".to_string(),
            job_role: "Product Manager".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].title, "Pitch Deck Builder");
}

#[tokio::test]
async fn gemini_chat_sends_system_instruction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [ { "text": eventra::flows::chat::SYSTEM_PROMPT } ] }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_text(r#"{"answer":"Use Create Event."}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let flows = gemini_flows(&server).await;
    let response = flows
        .chat
        .run(&ChatRequest {
            history: vec![],
            question: "How do I add an event?".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.answer, "Use Create Event.");
}

#[tokio::test]
async fn gemini_inline_image_becomes_data_uri() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/gemini-2.0-flash-preview-image-generation:generateContent",
        ))
        .and(body_partial_json(json!({
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [ { "content": { "parts": [
                { "text": "Here is your banner" },
                { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
            ] } } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let flows = gemini_flows(&server).await;
    let image = flows
        .image
        .run(&ImageRequest {
            event_name: "Design Workshop".to_string(),
            event_description: "Prototyping and usability testing".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(image.image_url, "data:image/png;base64,iVBORw0KGgo=");
}

#[tokio::test]
async fn gemini_server_error_is_a_single_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let flows = gemini_flows(&server).await;
    let err = flows
        .ideas
        .run(&IdeaRequest {
            skills: "Rust".to_string(),
            job_role: "Backend Developer".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "PROVIDER_UNAVAILABLE");
}

#[tokio::test]
async fn provider_status_codes_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/quota:generateContent"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/denied:generateContent"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let provider: Arc<dyn GenerationProvider> =
        create_provider(&settings(AiProviderType::Gemini, &server.uri())).unwrap();

    let err = provider
        .generate(GenerationRequest::structured("t", "quota", "p".to_string(), json!({})))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::RateLimited(_)));

    let err = provider
        .generate(GenerationRequest::structured("t", "denied", "p".to_string(), json!({})))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Unauthorized(_)));
}

#[tokio::test]
async fn openai_chat_completion_reaches_the_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "response_format": { "type": "json_schema", "json_schema": { "name": "project_ideas" } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [ { "message": { "role": "assistant",
                "content": "```json\n{\"projectIdeas\":[{\"title\":\"Budget Bot\",\"description\":\"Track spending.\"}]}\n```"
            } } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = AiSettings {
        text_model: "gpt-4o-mini".to_string(),
        ..settings(AiProviderType::Openai, &server.uri())
    };
    let flows = Flows::new(create_provider(&settings).unwrap(), &settings).unwrap();

    let ideas = flows
        .ideas
        .run(&IdeaRequest {
            skills: "Python".to_string(),
            job_role: "Data Analyst".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(ideas[0].title, "Budget Bot");
}

#[tokio::test]
async fn openai_image_generation_returns_base64() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(body_partial_json(json!({ "response_format": "b64_json" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": [ { "b64_json": "AAAA" } ] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let settings = AiSettings {
        image_model: "gpt-image-1".to_string(),
        ..settings(AiProviderType::Openai, &server.uri())
    };
    let flows = Flows::new(create_provider(&settings).unwrap(), &settings).unwrap();

    let image = flows
        .image
        .run(&ImageRequest {
            event_name: "Tech Conference 2024".to_string(),
            event_description: "Cloud and AI talks".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(image.image_url, "data:image/png;base64,AAAA");
}
