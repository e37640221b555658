//! Error assertion example demonstrating code and status checks.
//!
//! This example shows how to:
//! - Build an error envelope with the canonical formatter
//! - Serve it from a local mock server
//! - Assert the error code with and without an expected status
//!
//! # Running
//!
//! ```bash
//! cargo run --example assert_error
//! ```

use envelope_assert::{EnvelopeFormatter, ResponseFormatter, TestResponse};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    // Build the error envelope the way a conforming service would
    let formatter = EnvelopeFormatter;
    let not_found = formatter.error("NOT_FOUND", Some(404));
    let validation = formatter.error("VALIDATION", None);

    Mock::given(method("GET"))
        .and(path("/users/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found.to_value()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(422).set_body_json(validation.to_value()))
        .mount(&server)
        .await;

    // Missing resource: assert the code and the 404 status
    println!("Fetching {}/users/99 ...", server.uri());
    let response = reqwest::get(format!("{}/users/99", server.uri())).await?;
    let response = TestResponse::from_reqwest(response).await?;
    response.assertions().assert_error("NOT_FOUND", 404);
    println!("NOT_FOUND envelope matched (status 404).");

    // Validation failure: the envelope carries no status, so only the
    // code is asserted
    println!("\nPosting to {}/users ...", server.uri());
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/users", server.uri()))
        .send()
        .await?;
    let response = TestResponse::from_reqwest(response).await?;
    response.assertions().assert_error("VALIDATION", None);
    println!("VALIDATION envelope matched (no status expected).");

    Ok(())
}
