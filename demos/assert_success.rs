//! Basic success assertion example demonstrating the full flow.
//!
//! This example shows how to:
//! - Serve a canonical success envelope from a local mock server
//! - Capture the live response for assertion
//! - Assert the envelope and its nested data payload
//! - Extract the data payload for further checks
//!
//! # Running
//!
//! ```bash
//! cargo run --example assert_success
//! ```

use envelope_assert::TestResponse;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Serve the envelope a conforming service would return
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "status": 200,
            "data": {
                "user": { "id": 5, "name": "Al", "address": { "city": "Oslo" } },
                "roles": ["admin", "editor"],
            },
        })))
        .mount(&server)
        .await;

    println!("Fetching {}/users/5 ...", server.uri());

    // Capture the live response
    let response = reqwest::get(format!("{}/users/5", server.uri())).await?;
    let response = TestResponse::from_reqwest(response).await?;

    // Assert the envelope and walk the nested payload
    response.assertions().assert_success(
        json!({
            "user": { "id": 5, "name": "Al" },
            "roles": ["admin", "editor"],
        }),
        200,
    );
    println!("Success envelope matched.");

    // Extract the payload for further inspection
    let data = response.assertions().success_data()?;
    println!("\ndata payload: {data}");
    println!("user name: {}", data["user"]["name"]);

    Ok(())
}
