use time::OffsetDateTime;
use tracing::debug;

use crate::state::AppState;

use super::dto::CreateSignupRequest;
use super::error::SignupError;
use super::repo::{self, Signup};

/// Validate the request, persist a new signup, then read the stored document
/// back by its assigned id so the caller sees exactly what the database holds
/// rather than the insert echo.
pub async fn intake(state: &AppState, req: CreateSignupRequest) -> Result<Signup, SignupError> {
    let (name, email, mobile_number, product_page_url) = require_fields(req)?;

    let signup = Signup {
        id: None,
        name,
        email,
        mobile_number,
        product_page_url,
        created_at: OffsetDateTime::now_utc(),
    };

    let inserted_id = repo::insert(&state.signups, &signup).await?;
    let id = inserted_id.as_object_id().ok_or(SignupError::ReadBack)?;
    let saved = repo::find_by_id(&state.signups, id)
        .await?
        .ok_or(SignupError::ReadBack)?;

    debug!(id = %id, "signup stored");
    Ok(saved)
}

pub async fn list_all(state: &AppState) -> Result<Vec<Signup>, SignupError> {
    Ok(repo::list_newest_first(&state.signups).await?)
}

/// Presence check only: a missing key, an explicit null, and an empty string
/// are all treated as absent. Any non-empty string (including "0") passes.
fn require_fields(
    req: CreateSignupRequest,
) -> Result<(String, String, String, String), SignupError> {
    match (req.name, req.email, req.mobile_number, req.product_page_url) {
        (Some(name), Some(email), Some(mobile_number), Some(product_page_url))
            if !name.is_empty()
                && !email.is_empty()
                && !mobile_number.is_empty()
                && !product_page_url.is_empty() =>
        {
            Ok((name, email, mobile_number, product_page_url))
        }
        _ => Err(SignupError::MissingFields),
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    fn request(
        name: Option<&str>,
        email: Option<&str>,
        mobile_number: Option<&str>,
        product_page_url: Option<&str>,
    ) -> CreateSignupRequest {
        CreateSignupRequest {
            name: name.map(Into::into),
            email: email.map(Into::into),
            mobile_number: mobile_number.map(Into::into),
            product_page_url: product_page_url.map(Into::into),
        }
    }

    #[test]
    fn all_fields_present_passes() {
        let fields = require_fields(request(
            Some("Alice"),
            Some("a@x.com"),
            Some("12345"),
            Some("http://x.com/p"),
        ))
        .expect("valid request");
        assert_eq!(
            fields,
            (
                "Alice".into(),
                "a@x.com".into(),
                "12345".into(),
                "http://x.com/p".into()
            )
        );
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = require_fields(request(
            Some("Bob"),
            None,
            Some("12345"),
            Some("http://x.com/p"),
        ))
        .unwrap_err();
        assert!(matches!(err, SignupError::MissingFields));
    }

    #[test]
    fn empty_string_counts_as_absent() {
        let err = require_fields(request(
            Some("Bob"),
            Some("b@x.com"),
            Some(""),
            Some("http://x.com/p"),
        ))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "All fields (name, email, mobileNumber, productPageUrl) are required."
        );
    }

    #[test]
    fn zero_string_is_valid() {
        assert!(require_fields(request(
            Some("0"),
            Some("0"),
            Some("0"),
            Some("0"),
        ))
        .is_ok());
    }
}
