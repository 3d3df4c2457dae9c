//! Page switching with URL query synchronization.
//!
//! Routing proper is out of scope; the active page is mirrored into the
//! location query (`?page=...`) via `history.replaceState` so reloads and
//! shared links restore it.

use std::collections::HashMap;

use leptos::prelude::*;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Books { search: Option<String> },
    BookDetail(i64),
    Loans,
    Profile,
    Login,
}

impl Page {
    /// Catalog page without a preset search.
    pub fn books() -> Self {
        Page::Books { search: None }
    }

    fn to_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        match self {
            Page::Home => {}
            Page::Books { search } => {
                params.insert("page".to_string(), "books".to_string());
                if let Some(search) = search {
                    if !search.is_empty() {
                        params.insert("search".to_string(), search.clone());
                    }
                }
            }
            Page::BookDetail(id) => {
                params.insert("page".to_string(), "book".to_string());
                params.insert("id".to_string(), id.to_string());
            }
            Page::Loans => {
                params.insert("page".to_string(), "loans".to_string());
            }
            Page::Profile => {
                params.insert("page".to_string(), "profile".to_string());
            }
            Page::Login => {
                params.insert("page".to_string(), "login".to_string());
            }
        }
        params
    }

    fn from_params(params: &HashMap<String, String>) -> Self {
        match params.get("page").map(String::as_str) {
            Some("books") => Page::Books {
                search: params.get("search").cloned(),
            },
            Some("book") => params
                .get("id")
                .and_then(|id| id.parse().ok())
                .map(Page::BookDetail)
                .unwrap_or_else(Page::books),
            Some("loans") => Page::Loans,
            Some("profile") => Page::Profile,
            Some("login") => Page::Login,
            _ => Page::Home,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Nav {
    current: RwSignal<Page>,
}

impl Nav {
    /// Restores the active page from the current location query.
    pub fn new() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        Self {
            current: RwSignal::new(Page::from_params(&params)),
        }
    }

    pub fn page(&self) -> Page {
        self.current.get()
    }

    pub fn goto(&self, page: Page) {
        self.current.set(page);
    }

    /// Mirror every page change into the URL. Runs once per mutation; the
    /// URL is only touched when it actually differs.
    pub fn init_url_sync(&self) {
        let this = *self;
        Effect::new(move |_| {
            let query =
                serde_qs::to_string(&this.current.get().to_params()).unwrap_or_default();
            let new_url = if query.is_empty() {
                window()
                    .and_then(|w| w.location().pathname().ok())
                    .unwrap_or_else(|| "/".to_string())
            } else {
                format!("?{}", query)
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav() -> Nav {
    use_context::<Nav>().expect("Nav not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(page: Page) {
        let params = page.to_params();
        assert_eq!(Page::from_params(&params), page);
    }

    #[test]
    fn pages_round_trip_through_params() {
        round_trip(Page::Home);
        round_trip(Page::books());
        round_trip(Page::BookDetail(42));
        round_trip(Page::Loans);
        round_trip(Page::Profile);
        round_trip(Page::Login);
    }

    #[test]
    fn books_search_survives_round_trip() {
        round_trip(Page::Books {
            search: Some("tolkien".to_string()),
        });
    }

    #[test]
    fn empty_search_is_dropped_from_the_url() {
        let page = Page::Books {
            search: Some(String::new()),
        };
        let params = page.to_params();
        assert!(!params.contains_key("search"));
        assert_eq!(Page::from_params(&params), Page::books());
    }

    #[test]
    fn unknown_params_fall_back_to_home() {
        let mut params = HashMap::new();
        params.insert("page".to_string(), "nonsense".to_string());
        assert_eq!(Page::from_params(&params), Page::Home);
        assert_eq!(Page::from_params(&HashMap::new()), Page::Home);
    }

    #[test]
    fn bad_book_id_falls_back_to_the_catalog() {
        let mut params = HashMap::new();
        params.insert("page".to_string(), "book".to_string());
        params.insert("id".to_string(), "not-a-number".to_string());
        assert_eq!(Page::from_params(&params), Page::books());
    }
}
