//! Client-side navigation.
//!
//! # Responsibilities
//! - Define the navigation capability the HTTP client depends on
//! - Provide an in-process history backed by the route table
//!
//! # Design Decisions
//! - Navigation is fire-and-forget: `replace` returns nothing
//! - Unmatched targets are logged and ignored, history stays unchanged
//! - History always holds at least one entry

use std::sync::{Arc, Mutex};

use crate::routing::router::{with_query, Query, RouteMatch, RouteTable, RouteTableError};

/// Path of the login screen used for re-authentication redirects.
pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the location to return to after login.
pub const REDIRECT_PARAM: &str = "redirect";

/// Capability to read and change the current client-side location.
pub trait Navigator: Send + Sync {
    /// Path, query and hash of the current location.
    fn current_full_path(&self) -> String;

    /// Replace the current location without adding a history entry.
    fn replace(&self, path: &str, query: &Query);
}

/// Send the user to the login screen, remembering where they were.
pub fn redirect_to_login(navigator: &dyn Navigator) {
    let mut query = Query::new();
    query.insert(REDIRECT_PARAM.to_string(), navigator.current_full_path());
    tracing::info!(redirect = %query[REDIRECT_PARAM], "Redirecting to login");
    navigator.replace(LOGIN_PATH, &query);
}

/// In-memory history stack resolved against a [`RouteTable`].
#[derive(Debug)]
pub struct HistoryNavigator {
    table: Arc<RouteTable>,
    stack: Mutex<Vec<RouteMatch>>,
}

impl HistoryNavigator {
    /// Create a history positioned at `initial`.
    pub fn new(table: Arc<RouteTable>, initial: &str) -> Result<Self, RouteTableError> {
        let first = table
            .resolve(initial)
            .ok_or_else(|| RouteTableError::NoMatch(initial.to_string()))?;
        Ok(Self {
            table,
            stack: Mutex::new(vec![first]),
        })
    }

    /// The current location.
    pub fn current(&self) -> RouteMatch {
        let stack = self.stack.lock().expect("history mutex poisoned");
        stack
            .last()
            .cloned()
            .expect("history always holds one entry")
    }

    /// Number of entries in the history.
    pub fn depth(&self) -> usize {
        self.stack.lock().expect("history mutex poisoned").len()
    }

    /// Navigate to a new location, adding a history entry.
    ///
    /// Returns false if the target matches no route.
    pub fn push(&self, path: &str, query: &Query) -> bool {
        match self.resolve(path, query) {
            Some(target) => {
                self.stack.lock().expect("history mutex poisoned").push(target);
                true
            }
            None => false,
        }
    }

    /// Go back one entry. Returns false at the start of history.
    pub fn back(&self) -> bool {
        let mut stack = self.stack.lock().expect("history mutex poisoned");
        if stack.len() > 1 {
            stack.pop();
            true
        } else {
            false
        }
    }

    fn resolve(&self, path: &str, query: &Query) -> Option<RouteMatch> {
        let full_path = with_query(path, query);
        let resolved = self.table.resolve(&full_path);
        if resolved.is_none() {
            tracing::warn!(path = %full_path, "Navigation target matches no route");
        }
        resolved
    }
}

impl Navigator for HistoryNavigator {
    fn current_full_path(&self) -> String {
        self.current().full_path
    }

    fn replace(&self, path: &str, query: &Query) {
        if let Some(target) = self.resolve(path, query) {
            let mut stack = self.stack.lock().expect("history mutex poisoned");
            if let Some(top) = stack.last_mut() {
                *top = target;
            }
        }
    }
}
