use serde::{Deserialize, Serialize};

/// A rating plus free-text review. Immutable once created; the client
/// re-fetches the full list after submitting rather than appending locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub rating: u8,
    // Older API revisions emitted `comment`; both map here.
    #[serde(default, alias = "comment")]
    pub review: String,
    #[serde(rename = "createdAt", default, alias = "submitted_at")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<FeedbackAuthor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackAuthor {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub rating: u8,
    pub review: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_rating_and_review() {
        let body = FeedbackRequest {
            rating: 5,
            review: "great".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["rating"], 5);
        assert_eq!(json["review"], "great");
    }

    #[test]
    fn legacy_comment_field_maps_to_review() {
        let fb: Feedback = serde_json::from_value(serde_json::json!({
            "id": 1,
            "user_id": 2,
            "book_id": 3,
            "rating": 4,
            "comment": "solid read",
            "createdAt": "2024-03-15T10:00:00Z",
            "user": {"name": "A"}
        }))
        .unwrap();
        assert_eq!(fb.review, "solid read");
        assert_eq!(fb.user.unwrap().name.as_deref(), Some("A"));
    }
}
