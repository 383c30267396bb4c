//! End-to-end widget behaviour against a mock translation endpoint.

use std::sync::Arc;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use live_translator::translate::LibreTranslateClient;
use live_translator::widget::{TargetLanguage, TranslateOutcome, TranslatorWidget};

fn widget(server: &MockServer) -> TranslatorWidget {
    TranslatorWidget::new(Arc::new(LibreTranslateClient::new(format!(
        "{}/translate",
        server.uri()
    ))))
}

#[tokio::test]
async fn hello_becomes_bonjour() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_partial_json(serde_json::json!({
            "q": "Hello",
            "source": "auto",
            "target": "fr"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "translatedText": "Bonjour" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let widget = widget(&server);
    widget.update_source_text("Hello").await;
    widget.select_language("fr").await;

    assert_eq!(widget.translate().await, TranslateOutcome::Translated);
    assert_eq!(widget.snapshot().await.translated_text, "Bonjour");
}

#[tokio::test]
async fn empty_text_makes_zero_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let widget = widget(&server);
    widget.select_language("de").await;

    assert_eq!(widget.translate().await, TranslateOutcome::Skipped);
}

#[tokio::test]
async fn each_option_sets_the_request_target() {
    let server = MockServer::start().await;

    for lang in TargetLanguage::ALL {
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "source": "auto",
                "target": lang.code()
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translatedText": format!("in {}", lang.label())
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let widget = widget(&server);
    widget.update_source_text("Thank you").await;

    for lang in TargetLanguage::ALL {
        widget.select_language(lang.code()).await;
        assert_eq!(widget.translate().await, TranslateOutcome::Translated);
        assert_eq!(
            widget.snapshot().await.translated_text,
            format!("in {}", lang.label())
        );
    }
}

#[tokio::test]
async fn server_error_keeps_previous_translation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({ "q": "Hello" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "translatedText": "Hola" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({ "q": "Goodbye" })))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let widget = widget(&server);
    widget.update_source_text("Hello").await;
    widget.select_language("es").await;
    widget.translate().await;

    widget.update_source_text("Goodbye").await;
    assert_eq!(widget.translate().await, TranslateOutcome::Failed);
    assert_eq!(widget.snapshot().await.translated_text, "Hola");
}

#[tokio::test]
async fn loose_response_shapes_still_apply() {
    let cases = [
        (
            serde_json::json!({ "translatedText": "Bonjour", "detectedLanguage": { "confidence": 90 } }),
            "Bonjour",
        ),
        (
            serde_json::json!({ "translatedText": "Bonjour", "detectedLanguage": "en" }),
            "Bonjour",
        ),
    ];

    for (body, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let widget = widget(&server);
        widget.update_source_text("Hello").await;
        widget.select_language("fr").await;

        assert_eq!(widget.translate().await, TranslateOutcome::Translated);
        assert_eq!(widget.snapshot().await.translated_text, expected);
    }
}

#[tokio::test]
async fn null_translation_clears_previous_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({ "q": "Hello" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "translatedText": "Bonjour" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({ "q": "Goodbye" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "translatedText": null })),
        )
        .mount(&server)
        .await;

    let widget = widget(&server);
    widget.update_source_text("Hello").await;
    widget.select_language("fr").await;
    widget.translate().await;
    assert_eq!(widget.snapshot().await.translated_text, "Bonjour");

    widget.update_source_text("Goodbye").await;
    assert_eq!(widget.translate().await, TranslateOutcome::Translated);
    assert_eq!(widget.snapshot().await.translated_text, "");
}
