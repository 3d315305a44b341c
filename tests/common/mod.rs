//! Shared setup for the live specs.
//!
//! Each scenario owns the fixtures it creates and tears them down in
//! [`run_then`], which runs the cleanup even when an assertion panics.

#![allow(dead_code)]

use std::future::Future;
use std::panic::{AssertUnwindSafe, resume_unwind};
use std::path::PathBuf;

use futures::FutureExt;
use reqwest::StatusCode;
use serde_json::{Value, json};
use storefront_api::config::{self, Settings};
use storefront_api::helpers::{BRAND_NAME_PREFIX, random_suffix, unique_name};
use storefront_api::types::Brand;
use storefront_api::{ApiClient, ApiResponse, telemetry};
use tracing::{info, warn};

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub const BRAND_DESCRIPTION: &str = "Automation Brand Desc";
/// Well-formed ObjectId that the service never assigns.
pub const UNASSIGNED_ID: &str = "123456789012345678901234";

pub fn settings() -> TestResult<Settings> {
    let settings = config::load()?;
    telemetry::init_for_tests(&settings.logging);
    Ok(settings)
}

pub fn client() -> TestResult<ApiClient> {
    Ok(ApiClient::from_settings(&settings()?)?)
}

pub fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

pub fn brand_payload() -> Value {
    json!({
        "name": unique_name(BRAND_NAME_PREFIX),
        "description": BRAND_DESCRIPTION,
    })
}

pub fn updated_brand_name() -> String {
    format!("Updated Brand {}", random_suffix(1000))
}

/// Log a response body at info so it shows next to a failure.
pub fn log_body(label: &str, response: &ApiResponse) {
    info!(status = response.status_code(), body = %response.body(), "{label}");
}

/// Run `scenario`, then `cleanup`, whatever the scenario's outcome.
pub async fn run_then<S, C>(scenario: S, cleanup: C) -> TestResult
where
    S: Future<Output = TestResult>,
    C: Future<Output = TestResult>,
{
    let outcome = AssertUnwindSafe(scenario).catch_unwind().await;
    let cleaned = cleanup.await;
    match outcome {
        Err(panic) => resume_unwind(panic),
        Ok(result) => {
            result?;
            cleaned
        }
    }
}

pub async fn create_brand(client: &ApiClient, payload: &Value) -> TestResult<Brand> {
    let response = client.brands().create(payload).await?;
    if response.status() != StatusCode::OK {
        return Err(format!(
            "brand fixture not created: {} {}",
            response.status(),
            response.body()
        )
        .into());
    }
    Ok(response.json()?)
}

pub async fn delete_brand(client: &ApiClient, id: Option<String>) -> TestResult {
    let Some(id) = id else {
        return Ok(());
    };
    let response = client.brands().delete(&id).await?;
    if !response.status().is_success() {
        // Scenarios that delete their own fixture leave nothing to remove.
        info!(brand_id = %id, status = response.status_code(), "brand already gone at teardown");
    }
    Ok(())
}

/// Remove a brand that a negative create scenario did not expect to exist.
pub async fn discard_created_brand(client: &ApiClient, response: &ApiResponse) -> TestResult {
    if response.status().is_success() {
        let id = created_id(response);
        warn!(brand_id = ?id, "create unexpectedly succeeded; removing it");
        delete_brand(client, id).await?;
    }
    Ok(())
}

/// Create a brand from `payload`, hand it to `scenario`, delete it afterwards.
pub async fn with_brand<F, Fut>(client: &ApiClient, payload: &Value, scenario: F) -> TestResult
where
    F: FnOnce(Brand) -> Fut,
    Fut: Future<Output = TestResult>,
{
    let brand = create_brand(client, payload).await?;
    let id = brand.id.clone();
    run_then(scenario(brand), delete_brand(client, Some(id))).await
}

pub async fn delete_category(client: &ApiClient, token: &str, id: Option<String>) -> TestResult {
    let Some(id) = id else {
        return Ok(());
    };
    let response = client.categories().delete(&id).bearer(token).await?;
    if !response.status().is_success() {
        info!(category_id = %id, status = response.status_code(), "category already gone at teardown");
    }
    Ok(())
}

pub fn created_id(response: &ApiResponse) -> Option<String> {
    response
        .field("_id")
        .and_then(Value::as_str)
        .map(str::to_owned)
}
