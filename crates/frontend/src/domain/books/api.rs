//! Catalog gateways.

use contracts::catalog::{Book, BookFormat, Category};
use contracts::envelope::{ApiResponse, Paged};

use crate::shared::api_utils::api_url;
use crate::shared::http;
use crate::shared::toast::Toasts;

/// Query string for the catalog listing. The page is always present;
/// empty or unset filters are omitted entirely.
fn books_query(page: u32, search: &str, category: Option<i64>, format: Option<BookFormat>) -> String {
    let mut params = format!("page={}", page);
    if !search.is_empty() {
        params += &format!("&search={}", urlencoding::encode(search));
    }
    if let Some(category) = category {
        params += &format!("&category={}", category);
    }
    if let Some(format) = format {
        params += &format!("&format={}", format.as_str());
    }
    params
}

/// GET /books — paged listing with optional search/category/format filters.
pub async fn fetch_books(
    toasts: Toasts,
    page: u32,
    search: &str,
    category: Option<i64>,
    format: Option<BookFormat>,
) -> Option<Paged<Book>> {
    let url = format!(
        "{}?{}",
        api_url("/books"),
        books_query(page, search, category, format)
    );
    match http::get_json::<Paged<Book>>(&url).await {
        Ok(paged) => Some(paged),
        Err(failure) => {
            failure.report(toasts);
            None
        }
    }
}

/// GET /books/{id}.
pub async fn fetch_book(toasts: Toasts, id: i64) -> Option<Book> {
    match http::get_json::<ApiResponse<Book>>(&api_url(&format!("/books/{}", id))).await {
        Ok(response) => Some(response.data),
        Err(failure) => {
            failure.report(toasts);
            None
        }
    }
}

/// GET /categories.
pub async fn fetch_categories(toasts: Toasts) -> Option<Vec<Category>> {
    match http::get_json::<ApiResponse<Vec<Category>>>(&api_url("/categories")).await {
        Ok(response) => Some(response.data),
        Err(failure) => {
            failure.report(toasts);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_always_present() {
        assert_eq!(books_query(1, "", None, None), "page=1");
        assert_eq!(books_query(3, "", None, None), "page=3");
    }

    #[test]
    fn search_is_percent_encoded() {
        assert_eq!(
            books_query(1, "rust & wasm", None, None),
            "page=1&search=rust%20%26%20wasm"
        );
    }

    #[test]
    fn filters_appended_when_set() {
        assert_eq!(
            books_query(2, "tolkien", Some(4), Some(BookFormat::Ebook)),
            "page=2&search=tolkien&category=4&format=ebook"
        );
        assert_eq!(
            books_query(1, "", None, Some(BookFormat::Physical)),
            "page=1&format=physical"
        );
    }
}
