//! Route table and lookup.
//!
//! # Responsibilities
//! - Store the compiled route entries
//! - Resolve a full path (`/detail/42?tab=raw#top`) to a route match
//! - Build paths from route names (named navigation)
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in declaration order, first match wins
//! - Explicit `None` for unmatched paths rather than a silent default

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;
use url::form_urlencoded;

use crate::routing::pattern::{Params, RoutePattern};

/// Bytes escaped in query values. `/`, `?`, `:` and `@` stay readable.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Query keys additionally escape `=`.
const QUERY_KEY: &AsciiSet = &QUERY_VALUE.add(b'=');

/// Decoded query string parameters.
pub type Query = BTreeMap<String, String>;

/// Errors raised while building or querying a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("route pattern '{0}' overlaps an earlier entry")]
    DuplicatePattern(String),

    #[error("no route named '{0}'")]
    UnknownRoute(String),

    #[error("path '{0}' matches no route")]
    NoMatch(String),

    #[error("route '{pattern}' needs parameter '{param}'")]
    MissingParam { pattern: String, param: String },
}

/// Views the client can render. Opaque to the routing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    List,
    Editor,
    Login,
    EmailDetail,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::List => "ListView",
            View::Editor => "EditerView",
            View::Login => "LoginView",
            View::EmailDetail => "EmailDetailView",
        };
        f.pad(name)
    }
}

/// One path-to-view association.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub name: &'static str,
    pub pattern: RoutePattern,
    pub view: View,
}

impl RouteEntry {
    pub fn new(pattern: &str, name: &'static str, view: View) -> Result<Self, RouteTableError> {
        Ok(Self {
            name,
            pattern: RoutePattern::parse(pattern)?,
            view,
        })
    }
}

/// Result of resolving a full path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: &'static str,
    pub view: View,
    pub params: Params,
    pub query: Query,
    /// Path, query and hash as navigated to.
    pub full_path: String,
}

/// The client-side route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate names and overlapping patterns.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let mut names = HashSet::new();
        let mut shapes = HashSet::new();

        for entry in &entries {
            if !names.insert(entry.name) {
                return Err(RouteTableError::DuplicateName(entry.name.to_string()));
            }
            if !shapes.insert(entry.pattern.shape()) {
                return Err(RouteTableError::DuplicatePattern(entry.pattern.to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// The mail client's routes.
    pub fn standard() -> Result<Self, RouteTableError> {
        Self::new(vec![
            RouteEntry::new("/", "home", View::List)?,
            RouteEntry::new("/list", "list", View::List)?,
            RouteEntry::new("/editer", "editer", View::Editor)?,
            RouteEntry::new("/login", "login", View::Login)?,
            RouteEntry::new("/detail/:id", "detail", View::EmailDetail)?,
        ])
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Resolve a full path to the first matching entry.
    pub fn resolve(&self, full_path: &str) -> Option<RouteMatch> {
        let (rest, _hash) = full_path.split_once('#').unwrap_or((full_path, ""));
        let (path, raw_query) = rest.split_once('?').unwrap_or((rest, ""));

        self.entries.iter().find_map(|entry| {
            entry.pattern.matches(path).map(|params| RouteMatch {
                name: entry.name,
                view: entry.view,
                params,
                query: parse_query(raw_query),
                full_path: full_path.to_string(),
            })
        })
    }

    /// Build the full path for a named route.
    pub fn reverse(
        &self,
        name: &str,
        params: &Params,
        query: &Query,
    ) -> Result<String, RouteTableError> {
        let entry = self
            .get(name)
            .ok_or_else(|| RouteTableError::UnknownRoute(name.to_string()))?;
        let path = entry.pattern.build(params)?;
        Ok(with_query(&path, query))
    }
}

/// Decode a raw query string (without the leading `?`).
pub fn parse_query(raw: &str) -> Query {
    form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Append an encoded query string to `path`.
///
/// Spaces become `+`, as [`parse_query`] expects.
pub fn with_query(path: &str, query: &Query) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let encoded = query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode_component(key, QUERY_KEY),
                encode_component(value, QUERY_VALUE)
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{encoded}")
}

fn encode_component(raw: &str, set: &'static AsciiSet) -> String {
    utf8_percent_encode(raw, set).to_string().replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::standard().unwrap()
    }

    #[test]
    fn test_standard_table() {
        let table = table();
        let names: Vec<_> = table.entries().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["home", "list", "editer", "login", "detail"]);
        assert_eq!(table.get("editer").unwrap().view, View::Editor);
    }

    #[test]
    fn test_resolve_static_routes() {
        let table = table();
        assert_eq!(table.resolve("/").unwrap().name, "home");
        assert_eq!(table.resolve("/").unwrap().view, View::List);
        assert_eq!(table.resolve("/list").unwrap().name, "list");
        assert_eq!(table.resolve("/login").unwrap().view, View::Login);
    }

    #[test]
    fn test_resolve_detail_with_param() {
        let m = table().resolve("/detail/42").unwrap();
        assert_eq!(m.name, "detail");
        assert_eq!(m.view, View::EmailDetail);
        assert_eq!(m.params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_resolve_strips_query_and_hash() {
        let m = table().resolve("/login?redirect=/detail/42#form").unwrap();
        assert_eq!(m.name, "login");
        assert_eq!(m.query.get("redirect").map(String::as_str), Some("/detail/42"));
        assert_eq!(m.full_path, "/login?redirect=/detail/42#form");

        let m = table().resolve("/login?redirect=%2Fdetail%2F42").unwrap();
        assert_eq!(m.query.get("redirect").map(String::as_str), Some("/detail/42"));
    }

    #[test]
    fn test_with_query_keeps_slashes_readable() {
        let mut query = Query::new();
        query.insert("redirect".into(), "/detail/42?tab=raw&x=a b+c#top".into());
        let full = with_query("/login", &query);
        assert_eq!(full, "/login?redirect=/detail/42?tab=raw%26x=a+b%2Bc%23top");
        assert_eq!(table().resolve(&full).unwrap().query, query);
    }

    #[test]
    fn test_unknown_path() {
        assert!(table().resolve("/unknown").is_none());
        assert!(table().resolve("/detail").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::new(vec![
            RouteEntry::new("/a", "x", View::List).unwrap(),
            RouteEntry::new("/b", "x", View::List).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicateName("x".into()));
    }

    #[test]
    fn test_duplicate_pattern_rejected() {
        let err = RouteTable::new(vec![
            RouteEntry::new("/detail/:id", "a", View::EmailDetail).unwrap(),
            RouteEntry::new("/detail/:key", "b", View::EmailDetail).unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicatePattern(_)));
    }

    #[test]
    fn test_reverse() {
        let table = table();
        let mut params = Params::new();
        params.insert("id".into(), "9".into());
        assert_eq!(table.reverse("detail", &params, &Query::new()).unwrap(), "/detail/9");

        let mut query = Query::new();
        query.insert("redirect".into(), "/list".into());
        assert_eq!(
            table.reverse("login", &Params::new(), &query).unwrap(),
            "/login?redirect=/list"
        );

        assert_eq!(
            table.reverse("nope", &Params::new(), &Query::new()).unwrap_err(),
            RouteTableError::UnknownRoute("nope".into())
        );
    }
}
