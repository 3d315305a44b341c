//! Setup shortcuts shared by the specs.

use serde_json::Value;
use storefront_api_types::{CategoryPayload, LoginRequest, LoginResponse};
use tracing::info;
use uuid::Uuid;

use crate::client::{ApiClient, ClientError};
use crate::config::AdminCredentials;

pub const BRAND_NAME_PREFIX: &str = "API Automation Brand";
pub const CATEGORY_NAME_PREFIX: &str = "API Automation Category";
const NAME_SUFFIX_BOUND: u32 = 100_000;

/// A number in `0..bound`, fresh per call.
pub fn random_suffix(bound: u32) -> u32 {
    let bound = bound.max(1);
    let value = Uuid::new_v4().as_u128() % u128::from(bound);
    u32::try_from(value).unwrap_or_default()
}

/// `"<prefix> <n>"` with `n < 100000`, so fixtures from parallel or repeated
/// runs rarely collide.
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix} {}", random_suffix(NAME_SUFFIX_BOUND))
}

/// Log in as admin and return the session token.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<String, ClientError> {
    let response = client
        .admin()
        .login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    let body: LoginResponse = response.json().map_err(|_| {
        ClientError::UnexpectedBody(format!(
            "login answered {} without a token: {}",
            response.status(),
            response.body()
        ))
    })?;
    Ok(body.token)
}

pub async fn login_with(
    client: &ApiClient,
    credentials: &AdminCredentials,
) -> Result<String, ClientError> {
    login(client, &credentials.email, &credentials.password).await
}

/// Create a throwaway category with `token` and return its `_id`. The caller
/// owns the category and must delete it.
pub async fn create_category(client: &ApiClient, token: &str) -> Result<String, ClientError> {
    let payload = CategoryPayload {
        name: unique_name(CATEGORY_NAME_PREFIX),
    };
    let response = client.categories().create(&payload).bearer(token).await?;

    let id = response
        .field("_id")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            ClientError::UnexpectedBody(format!(
                "category create answered {} without an _id: {}",
                response.status(),
                response.body()
            ))
        })?;
    info!(category_id = %id, name = %payload.name, "created category fixture");
    Ok(id)
}
