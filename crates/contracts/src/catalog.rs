use serde::{Deserialize, Serialize};

use crate::feedback::Feedback;
use crate::loans::LoanSummary;

/// A catalog entry. The API mixes camelCase and snake_case field names;
/// the renames below mirror the wire shape exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "hasPhysical", default)]
    pub has_physical: i64,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(rename = "physicalStock", default)]
    pub physical_stock: Option<i64>,
    #[serde(default)]
    pub ebook: Option<String>,
    /// Legacy flag the API still emits alongside `ebook`.
    #[serde(default)]
    pub has_pdf: Option<i64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(default)]
    pub feedback: Option<Vec<Feedback>>,
    #[serde(rename = "bookLoans", default)]
    pub book_loans: Option<Vec<LoanSummary>>,
}

impl Book {
    /// The API signals eBook availability through two overlapping fields:
    /// the `ebook` URL and the legacy `has_pdf` flag. They are OR'd here,
    /// once, so callers never re-derive the rule.
    pub fn has_ebook(&self) -> bool {
        self.ebook.as_deref().is_some_and(|url| !url.is_empty()) || self.has_pdf == Some(1)
    }

    pub fn offers_physical(&self) -> bool {
        self.has_physical == 1
    }

    /// Stock gate for the request button: unknown quantity counts as
    /// available, the server has the final word.
    pub fn in_stock(&self) -> bool {
        self.quantity.map_or(true, |q| q > 0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Format filter for the catalog listing. Absence means "both".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookFormat {
    Physical,
    Ebook,
}

impl BookFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookFormat::Physical => "physical",
            BookFormat::Ebook => "ebook",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(ebook: Option<&str>, has_pdf: Option<i64>) -> Book {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "T",
            "author": "A",
            "description": "D",
            "category": "Fiction",
            "hasPhysical": 1,
            "quantity": 3,
            "physicalStock": 3,
            "ebook": ebook,
            "has_pdf": has_pdf,
            "createdAt": "2024-03-15T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn ebook_availability_is_or_of_both_signals() {
        assert!(book(Some("https://cdn/x.pdf"), Some(0)).has_ebook());
        assert!(book(None, Some(1)).has_ebook());
        assert!(book(Some("https://cdn/x.pdf"), Some(1)).has_ebook());
        assert!(!book(None, Some(0)).has_ebook());
        assert!(!book(None, None).has_ebook());
        assert!(!book(Some(""), None).has_ebook());
    }

    #[test]
    fn camel_case_fields_map() {
        let b = book(None, None);
        assert_eq!(b.has_physical, 1);
        assert_eq!(b.physical_stock, Some(3));
        assert_eq!(b.created_at, "2024-03-15T10:00:00Z");
    }

    #[test]
    fn stock_gate() {
        let mut b = book(None, None);
        assert!(b.in_stock());
        b.quantity = Some(0);
        assert!(!b.in_stock());
        b.quantity = None;
        assert!(b.in_stock());
    }
}
