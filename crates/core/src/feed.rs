//! Post records and the pure half of the fetch pipeline.
//!
//! The remote API returns a JSON array of post objects with camelCase field
//! names. Decoding is strict: a body that is not an array, or whose elements
//! are missing required fields or carry wrong types, is a `DecodeError`.
//! Status validation accepts exactly the [200, 300) range.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A single post returned by the API.
///
/// Immutable once decoded; `id` is the stable key for list rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Terminal outcome of one fetch cycle.
pub type FetchOutcome = Result<Vec<Post>, FetchError>;

/// Accept only 2xx statuses; anything else is a bad server response.
pub fn validate_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::BadServerResponse(format!("HTTP {status}")))
    }
}

/// Decode a response body into posts, preserving server order.
pub fn decode_posts(body: &str) -> Result<Vec<Post>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::DecodeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_posts_accepts_well_formed_array() {
        let body = r#"[{"userId":1,"id":1,"title":"A","body":"B"}]"#;
        let posts = decode_posts(body).unwrap();
        assert_eq!(
            posts,
            vec![Post {
                user_id: 1,
                id: 1,
                title: "A".to_string(),
                body: "B".to_string(),
            }]
        );
    }

    #[test]
    fn decode_posts_preserves_server_order() {
        let body = r#"[
            {"userId":1,"id":3,"title":"third","body":"c"},
            {"userId":1,"id":1,"title":"first","body":"a"},
            {"userId":2,"id":2,"title":"second","body":"b"}
        ]"#;
        let posts = decode_posts(body).unwrap();
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn decode_posts_accepts_empty_array() {
        assert_eq!(decode_posts("[]").unwrap(), vec![]);
    }

    #[test]
    fn decode_posts_rejects_non_array_body() {
        let err = decode_posts(r#"{"userId":1,"id":1,"title":"A","body":"B"}"#).unwrap_err();
        assert!(matches!(err, FetchError::DecodeError(_)));
    }

    #[test]
    fn decode_posts_rejects_missing_title() {
        let err = decode_posts(r#"[{"userId":1,"id":1,"body":"B"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::DecodeError(_)));
    }

    #[test]
    fn decode_posts_rejects_string_elements() {
        let err = decode_posts(r#"["not","posts"]"#).unwrap_err();
        assert!(matches!(err, FetchError::DecodeError(_)));
    }

    #[test]
    fn decode_posts_rejects_wrong_field_types() {
        let err = decode_posts(r#"[{"userId":"one","id":1,"title":"A","body":"B"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::DecodeError(_)));
    }

    #[test]
    fn decode_posts_rejects_invalid_json() {
        let err = decode_posts("not json").unwrap_err();
        assert!(matches!(err, FetchError::DecodeError(_)));
    }

    #[test]
    fn post_serializes_with_camel_case_names() {
        let post = Post {
            user_id: 7,
            id: 42,
            title: "T".to_string(),
            body: "B".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 7);
        assert_eq!(json["id"], 42);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn validate_status_accepts_2xx_range() {
        assert!(validate_status(200).is_ok());
        assert!(validate_status(204).is_ok());
        assert!(validate_status(299).is_ok());
    }

    #[test]
    fn validate_status_rejects_everything_else() {
        for status in [199, 300, 301, 404, 500] {
            let err = validate_status(status).unwrap_err();
            assert!(matches!(err, FetchError::BadServerResponse(_)));
            assert!(err.to_string().contains(&status.to_string()));
        }
    }
}
