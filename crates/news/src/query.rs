//! Search query model for the Perigon `/v1/all` endpoint.
//!
//! `SearchQuery` is a fluent builder over the endpoint's query parameters.
//! Typed helpers cover the documented filters; `param` passes anything else
//! through verbatim. The `size` and `page` parameters are client-managed:
//! raw entries under those names are dropped so pagination stays coherent.
//!
//! # Example
//!
//! ```rust,ignore
//! use perigon_news::SearchQuery;
//! use chrono::NaiveDate;
//!
//! let query = SearchQuery::new()
//!     .q("electric vehicles")
//!     .from_date(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap())
//!     .language("en")
//!     .exclude_label("Opinion")
//!     .exclude_label("Roundup");
//! ```

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

/// Default number of records per page. The remote maximum is also 100.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Parameter names the client manages itself.
const RESERVED_PARAMS: [&str; 2] = ["size", "page"];

/// A single query parameter value.
///
/// List values serialize as repeated keys (`label=A&label=B`).
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    List(Vec<String>),
    Int(i64),
    Float(f64),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::List(values.into_iter().map(String::from).collect())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

/// Fluent builder for `/v1/all` search parameters.
///
/// Parameters keep their insertion order on the wire. The same name may
/// appear more than once; repeats are sent as repeated keys.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    params: Vec<(String, ParamValue)>,
    size: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            params: Vec::new(),
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    /// Create an empty query with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary query parameter.
    ///
    /// `size` and `page` are reserved for the client; entries under those
    /// names are dropped with a warning.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let name = name.into();
        if RESERVED_PARAMS.contains(&name.as_str()) {
            warn!(param = %name, "Parameter is client-managed, dropping");
            return self;
        }
        self.params.push((name, value.into()));
        self
    }

    /// Full-text search term (`q`).
    pub fn q(self, term: impl Into<String>) -> Self {
        self.param("q", term.into())
    }

    /// Search within article titles only.
    pub fn title(self, term: impl Into<String>) -> Self {
        self.param("title", term.into())
    }

    /// Search within article bodies only.
    pub fn content(self, term: impl Into<String>) -> Self {
        self.param("content", term.into())
    }

    /// Earliest publish date, inclusive.
    pub fn from_date(self, date: NaiveDate) -> Self {
        self.param("from", date.format("%Y-%m-%d").to_string())
    }

    /// Latest publish date, inclusive.
    pub fn to_date(self, date: NaiveDate) -> Self {
        self.param("to", date.format("%Y-%m-%d").to_string())
    }

    /// Restrict to a source domain. Repeatable.
    pub fn source(self, domain: impl Into<String>) -> Self {
        self.param("source", domain.into())
    }

    /// Restrict to a language code. Repeatable.
    pub fn language(self, code: impl Into<String>) -> Self {
        self.param("language", code.into())
    }

    /// Restrict to a country code. Repeatable.
    pub fn country(self, code: impl Into<String>) -> Self {
        self.param("country", code.into())
    }

    /// Restrict to a category. Repeatable.
    pub fn category(self, category: impl Into<String>) -> Self {
        self.param("category", category.into())
    }

    /// Restrict to a topic. Repeatable.
    pub fn topic(self, topic: impl Into<String>) -> Self {
        self.param("topic", topic.into())
    }

    /// Exclude articles with the given label. Repeatable.
    pub fn exclude_label(self, label: impl Into<String>) -> Self {
        self.param("excludeLabel", label.into())
    }

    /// Sort order (`date`, `relevance`, ...).
    pub fn sort_by(self, order: impl Into<String>) -> Self {
        self.param("sortBy", order.into())
    }

    /// Set the page size. The remote caps this at 100.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// The effective page size.
    pub fn page_size(&self) -> u32 {
        self.size
    }

    /// Render the outbound query parameters for the given page.
    ///
    /// The first page travels without a `page` parameter; `size` is always
    /// appended after the filters.
    pub(crate) fn to_params(&self, page: u32) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.params.len() + 2);

        for (name, value) in &self.params {
            match value {
                ParamValue::Str(s) => out.push((name.clone(), s.clone())),
                ParamValue::List(items) => {
                    for item in items {
                        out.push((name.clone(), item.clone()));
                    }
                }
                ParamValue::Int(i) => out.push((name.clone(), i.to_string())),
                ParamValue::Float(f) => out.push((name.clone(), f.to_string())),
            }
        }

        out.push(("size".to_string(), self.size.to_string()));
        if page > 0 {
            out.push(("page".to_string(), page.to_string()));
        }

        out
    }
}

/// One page of search results from `/v1/all`.
///
/// Both fields are required; a response missing either fails decoding.
/// Records default to raw JSON and stay opaque unless the caller supplies
/// a typed `T`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage<T = serde_json::Value> {
    /// Total number of matching records across all pages.
    #[serde(rename = "numResults")]
    pub num_results: u64,

    /// The records on this page.
    pub articles: Vec<T>,
}
