use serde::{Deserialize, Serialize};

/// Standard single-entity envelope returned by most endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Paged list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Mutation acknowledgement: only the optional human-readable message
/// is consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_envelope_parses_meta() {
        let paged: Paged<i64> = serde_json::from_value(serde_json::json!({
            "data": [1, 2, 3],
            "meta": {"current_page": 2, "last_page": 5, "per_page": 12, "total": 55}
        }))
        .unwrap();
        assert_eq!(paged.data, vec![1, 2, 3]);
        assert_eq!(paged.meta.current_page, 2);
        assert_eq!(paged.meta.last_page, 5);
    }

    #[test]
    fn meta_tolerates_missing_extras() {
        let meta: PageMeta = serde_json::from_str(r#"{"current_page":1,"last_page":1}"#).unwrap();
        assert!(meta.per_page.is_none());
        assert!(meta.total.is_none());
    }

    #[test]
    fn api_response_message_is_optional() {
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(resp.message.is_none());
        assert!(resp.data.is_empty());
    }
}
