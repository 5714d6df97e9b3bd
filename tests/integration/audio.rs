//! Integration tests for audio translation and speech synthesis

use super::*;
use integrations_genmedia::errors::{NetworkError, ValidationError};
use integrations_genmedia::prelude::*;
use integrations_genmedia::Credentials;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header};

const MP3_FRAME: [u8; 4] = [0xFF, 0xF3, 0x44, 0xC4];

#[tokio::test]
async fn test_translate_audio_integration_success() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("/v1/audio/translations")
        .respond_with(success_response(json!({"text": "hi"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .translate_audio(AudioAsset::from_bytes(MP3_FRAME.to_vec()))
        .await
        .unwrap();

    assert_eq!(result.text, "hi");
}

#[tokio::test]
async fn test_translate_audio_sends_multipart_file_then_model() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("/v1/audio/translations")
        .respond_with(success_response(json!({"text": "ok"})))
        .mount(&mock_server)
        .await;

    test_client(&mock_server)
        .translate_audio(AudioAsset::from_bytes(MP3_FRAME.to_vec()))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .expect("multipart content type");

    let body = String::from_utf8_lossy(&requests[0].body).to_string();
    let file_at = body.find("name=\"file\"; filename=\"audio.mp3\"").unwrap();
    let model_at = body.find("name=\"model\"").unwrap();
    assert!(file_at < model_at);
    assert!(body.contains("Content-Type: audio/mp3"));
    assert!(body.contains("whisper-1"));
    assert!(body.ends_with(&format!("--{}--\r\n", boundary)));
}

#[tokio::test]
async fn test_translate_audio_unauthorized() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/audio/translations"))
        .respond_with(error_response(
            401,
            "Incorrect API key provided",
            "invalid_request_error",
            "invalid_api_key",
        ))
        .mount(&mock_server)
        .await;

    let error = test_client(&mock_server)
        .translate_audio(AudioAsset::from_bytes(MP3_FRAME.to_vec()))
        .await
        .unwrap_err();

    assert!(error.is_authentication_error());
    match error {
        MediaError::Api {
            status,
            body,
            message,
            ..
        } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid_api_key"));
            assert_eq!(message.as_deref(), Some("Incorrect API key provided"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_translate_empty_audio_never_sends() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(success_response(json!({"text": "unexpected"})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server)
        .translate_audio(AudioAsset::default())
        .await;

    assert!(matches!(
        result,
        Err(MediaError::InvalidInput(ValidationError::EmptyAudio))
    ));
}

#[tokio::test]
async fn test_speech_integration_returns_raw_bytes() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("/v1/audio/speech")
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"model": "tts-1", "input": "hello", "voice": "nova"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "audio/mpeg")
                .set_body_bytes(MP3_FRAME.to_vec()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server)
        .synthesize_speech("hello", Voice::Nova)
        .await
        .unwrap();

    assert_eq!(result.audio.to_vec(), MP3_FRAME.to_vec());
}

#[tokio::test]
async fn test_speech_with_options_in_body() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("/v1/audio/speech")
        .and(body_json(json!({
            "model": "tts-1",
            "input": "slowly",
            "voice": "fable",
            "response_format": "opus",
            "speed": 0.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(MP3_FRAME.to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = SpeechRequest::new("slowly", Voice::Fable)
        .with_response_format(integrations_genmedia::SpeechResponseFormat::Opus)
        .with_speed(0.5);

    test_client(&mock_server)
        .synthesize_speech_with(request)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_organization_header_integration() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("/v1/audio/speech")
        .and(header("OpenAI-Organization", "org-test"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(MP3_FRAME.to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server)
        .with_credentials(Credentials::new(TEST_API_KEY).with_organization("org-test"));
    let client = MediaClient::builder().with_config(config).build().unwrap();

    client.synthesize_speech("hi", Voice::Echo).await.unwrap();
}

#[tokio::test]
async fn test_speech_timeout() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(MP3_FRAME.to_vec())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server)
        .with_options(RequestOptions::new().with_timeout(Duration::from_millis(100)))
        .synthesize_speech("hello", Voice::Alloy)
        .await;

    assert!(matches!(
        result,
        Err(MediaError::Network(NetworkError::Timeout { .. }))
    ));
}

#[tokio::test]
async fn test_speech_cancellation() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(MP3_FRAME.to_vec())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let client = test_client(&mock_server)
        .with_options(RequestOptions::new().with_cancellation(token.clone()));

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let started = std::time::Instant::now();
    let result = client.synthesize_speech("hello", Voice::Onyx).await;
    canceller.await.unwrap();

    assert!(matches!(result, Err(MediaError::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_connection_refused() {
    let config = MediaClientConfig::new(TEST_API_KEY)
        .with_base_url(Url::parse("http://127.0.0.1:9/v1").unwrap())
        .with_timeout(Duration::from_secs(2));
    let client = MediaClient::builder().with_config(config).build().unwrap();

    let result = client.synthesize_speech("hello", Voice::Alloy).await;

    assert!(matches!(result, Err(MediaError::Network(_))));
}
