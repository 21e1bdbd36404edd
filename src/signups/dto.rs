use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo::Signup;

/// Incoming body for POST /items. Every field is optional at the serde level
/// so that a missing key, an explicit null, and an empty string all reach the
/// same presence check instead of being rejected by the deserializer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub product_page_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub product_page_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Signup> for SignupResponse {
    fn from(signup: Signup) -> Self {
        Self {
            id: signup.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: signup.name,
            email: signup.email,
            mobile_number: signup.mobile_number,
            product_page_url: signup.product_page_url,
            created_at: signup.created_at,
        }
    }
}
