use serde::{Deserialize, Serialize};

/// Forward-only state label driven entirely by the remote system; the
/// client only requests transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
    Returned,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "pending",
            LoanStatus::Approved => "approved",
            LoanStatus::Rejected => "rejected",
            LoanStatus::Returned => "returned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "Pending",
            LoanStatus::Approved => "Approved",
            LoanStatus::Rejected => "Rejected",
            LoanStatus::Returned => "Returned",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRef {
    pub id: i64,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookLoan {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub status: LoanStatus,
    pub requested_at: String,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub returned_at: Option<String>,
    pub book: BookRef,
}

/// Loan stub embedded in a `Book` payload. Only ever read opportunistically,
/// so every field tolerates absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoanSummary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub status: Option<LoanStatus>,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    pub book_id: i64,
}

/// Body for the due-date extension call. The API expects the camelCase
/// `dueDate` key next to a snake_case `reason`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionRequest {
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        let loan: BookLoan = serde_json::from_value(serde_json::json!({
            "id": 7,
            "book_id": 1,
            "user_id": 2,
            "status": "approved",
            "requested_at": "2024-03-01T09:00:00Z",
            "approved_at": "2024-03-02T09:00:00Z",
            "due_date": "2024-03-16",
            "returned_at": null,
            "book": {"id": 1, "title": "T", "author": "A"}
        }))
        .unwrap();
        assert_eq!(loan.status, LoanStatus::Approved);
        assert_eq!(loan.due_date.as_deref(), Some("2024-03-16"));
        assert!(loan.returned_at.is_none());
    }

    #[test]
    fn extension_body_carries_date_and_reason() {
        let body = ExtensionRequest {
            due_date: "2024-03-23".into(),
            reason: "Still reading".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["dueDate"], "2024-03-23");
        assert_eq!(json["reason"], "Still reading");
    }
}
