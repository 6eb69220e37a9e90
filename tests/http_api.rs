//! Route-level tests over the warp filter tree, no network involved.

use std::sync::Arc;

use async_trait::async_trait;
use persona_forge::{
    server, IdentityAdapter, IdentityError, Result, TextGenerator, EXPECTED_KEYS,
};
use serde_json::{json, Value};

struct FixedGenerator {
    reply: fn() -> Result<String>,
}

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn generate_text(&self, _prompt: &str) -> Result<String> {
        (self.reply)()
    }
}

fn adapter_with(reply: fn() -> Result<String>) -> IdentityAdapter {
    IdentityAdapter::new(Arc::new(FixedGenerator { reply }))
}

fn full_record_reply() -> Result<String> {
    let mut map = serde_json::Map::new();
    for key in EXPECTED_KEYS {
        map.insert(key.to_string(), Value::String(format!("value of {key}")));
    }
    Ok(format!(
        "Sure!\n{}",
        serde_json::to_string(&Value::Object(map)).unwrap()
    ))
}

#[tokio::test]
async fn options_lists_the_closed_sets() {
    let routes = server::routes(adapter_with(full_record_reply));

    let response = warp::test::request()
        .method("GET")
        .path("/api/options")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["genders"].as_array().unwrap().len(), 3);
    assert_eq!(body["nameSets"].as_array().unwrap().len(), 37);
    assert_eq!(body["countries"].as_array().unwrap().len(), 31);
    assert!(body["nameSets"]
        .as_array()
        .unwrap()
        .contains(&json!("Hobbit")));
    assert!(body["countries"]
        .as_array()
        .unwrap()
        .contains(&json!("United States")));
}

#[tokio::test]
async fn generate_returns_the_record_on_success() {
    let routes = server::routes(adapter_with(full_record_reply));

    let response = warp::test::request()
        .method("POST")
        .path("/api/generate")
        .json(&json!({
            "gender": "male",
            "nameSet": "Klingon",
            "country": "Norway",
        }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["name"], "value of name");
    assert_eq!(body["mothersMaidenName"], "value of mothersMaidenName");
}

#[tokio::test]
async fn generate_defaults_missing_fields_to_the_preset() {
    let routes = server::routes(adapter_with(full_record_reply));

    let response = warp::test::request()
        .method("POST")
        .path("/api/generate")
        .json(&json!({}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn generation_failure_maps_to_bad_gateway_with_the_generic_message() {
    let routes = server::routes(adapter_with(|| {
        Err(IdentityError::bad_status(429, "slow down"))
    }));

    let response = warp::test::request()
        .method("POST")
        .path("/api/generate")
        .json(&json!({}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 502);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"], "could not generate identity");
}

#[tokio::test]
async fn out_of_set_labels_are_rejected_before_generation() {
    let routes = server::routes(adapter_with(|| {
        panic!("adapter must not be reached for invalid labels")
    }));

    let response = warp::test::request()
        .method("POST")
        .path("/api/generate")
        .json(&json!({ "nameSet": "Elvish" }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert!(body["error"].as_str().unwrap().contains("Elvish"));
}

#[tokio::test]
async fn healthz_answers_ok() {
    let routes = server::routes(adapter_with(full_record_reply));

    let response = warp::test::request()
        .method("GET")
        .path("/healthz")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.body(), "ok");
}
