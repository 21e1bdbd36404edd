use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    options::FindOptions,
    Collection,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One stored notify-me request. `_id` is absent until the store assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub product_page_url: String,
    #[serde(with = "bson::serde_helpers::time_0_3_offsetdatetime_as_bson_datetime")]
    pub created_at: OffsetDateTime,
}

pub async fn insert(
    signups: &Collection<Signup>,
    signup: &Signup,
) -> mongodb::error::Result<Bson> {
    let result = signups.insert_one(signup, None).await?;
    Ok(result.inserted_id)
}

pub async fn find_by_id(
    signups: &Collection<Signup>,
    id: ObjectId,
) -> mongodb::error::Result<Option<Signup>> {
    signups.find_one(doc! { "_id": id }, None).await
}

pub async fn list_newest_first(
    signups: &Collection<Signup>,
) -> mongodb::error::Result<Vec<Signup>> {
    let options = FindOptions::builder()
        .sort(doc! { "createdAt": -1 })
        .build();
    let cursor = signups.find(doc! {}, options).await?;
    cursor.try_collect().await
}

#[cfg(test)]
mod document_tests {
    use super::*;
    use time::macros::datetime;

    fn sample() -> Signup {
        Signup {
            id: None,
            name: "Alice".into(),
            email: "a@x.com".into(),
            mobile_number: "12345".into(),
            product_page_url: "http://x.com/p".into(),
            created_at: datetime!(2026-08-06 12:00:00 UTC),
        }
    }

    #[test]
    fn unsaved_signup_omits_id_from_document() {
        let doc = mongodb::bson::to_document(&sample()).expect("to_document");
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn document_uses_camel_case_keys_and_bson_datetime() {
        let doc = mongodb::bson::to_document(&sample()).expect("to_document");
        assert_eq!(doc.get_str("mobileNumber").unwrap(), "12345");
        assert_eq!(doc.get_str("productPageUrl").unwrap(), "http://x.com/p");
        assert!(matches!(doc.get("createdAt"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn document_round_trips_through_bson() {
        let mut signup = sample();
        signup.id = Some(ObjectId::new());
        let doc = mongodb::bson::to_document(&signup).expect("to_document");
        let back: Signup = mongodb::bson::from_document(doc).expect("from_document");
        assert_eq!(back.id, signup.id);
        assert_eq!(back.name, signup.name);
        assert_eq!(back.created_at, signup.created_at);
    }
}
