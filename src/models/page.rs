//! Response normalization boundary.
//!
//! List endpoints answer with either a bare JSON array or a paginated
//! `{results, count}` envelope depending on backend pagination settings.
//! Every ingestion point decodes through [`ApiPayload`] and works with the
//! canonical [`Page`] shape; no caller inspects the raw body.

use serde::Deserialize;

/// Raw wire shape of a collection response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub enum ApiPayload<T> {
    /// Paginated envelope. `count` is the server-side total and may exceed
    /// the number of results in this page.
    Paged {
        #[serde(default)]
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
    /// Unpaginated bare array.
    Bare(Vec<T>),
}

impl<T> ApiPayload<T> {
    /// Normalize to the canonical page shape.
    pub fn into_page(self) -> Page<T> {
        match self {
            ApiPayload::Paged { results, count } => {
                let total = count.unwrap_or(results.len() as u64);
                Page {
                    items: results,
                    total,
                }
            }
            ApiPayload::Bare(items) => Page {
                total: items.len() as u64,
                items,
            },
        }
    }
}

/// A normalized collection page.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Fetched items (one page when the server paginates)
    pub items: Vec<T>,
    /// Total matches server-side; displays prefer this over `items.len()`
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(value: serde_json::Value) -> Page<serde_json::Value> {
        serde_json::from_value::<ApiPayload<serde_json::Value>>(value)
            .unwrap()
            .into_page()
    }

    #[test]
    fn bare_array() {
        let page = normalize(json!([{"id": 1}, {"id": 2}]));
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn envelope_with_count() {
        let page = normalize(json!({"results": [{"id": 1}], "count": 40}));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 40);
        assert!(page.total >= page.items.len() as u64);
    }

    #[test]
    fn envelope_without_count() {
        let page = normalize(json!({"results": [{"id": 1}, {"id": 2}]}));
        assert_eq!(page.total, 2);
    }

    #[test]
    fn envelope_without_results() {
        let page = normalize(json!({"count": 7}));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 7);
    }

    #[test]
    fn empty_object_normalizes_empty() {
        let page = normalize(json!({}));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}
