//! Route pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse `/detail/:id` style templates into segments
//! - Match a request path against a pattern, capturing named parameters
//! - Build a concrete path back from a pattern and parameters
//!
//! # Design Decisions
//! - Static segments match case-insensitively (host router default)
//! - One trailing slash is tolerated on the matched path
//! - A parameter captures exactly one non-empty segment, percent-decoded;
//!   `build` encodes it back so the two round-trip
//! - No regex, matching is a single pass over the segments

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::routing::router::RouteTableError;

/// Bytes escaped when a parameter value is written into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Captured path parameters, keyed by name.
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A compiled URL path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a path template.
    ///
    /// The template must start with `/`. Parameters are written `:name` and
    /// must have unique, non-empty names.
    pub fn parse(raw: &str) -> Result<Self, RouteTableError> {
        let invalid = |reason: &str| RouteTableError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        if !raw.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let mut segments = Vec::new();
        for part in split_segments(raw) {
            if part.is_empty() {
                return Err(invalid("empty segment"));
            }
            match part.strip_prefix(':') {
                Some("") => return Err(invalid("parameter without a name")),
                Some(name) => {
                    let duplicate = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if duplicate {
                        return Err(invalid("duplicate parameter name"));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Static(part.to_string())),
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Names of the parameters, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Normalized form used to detect patterns that would match the same paths.
    pub(crate) fn shape(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(s) => out.push_str(&s.to_lowercase()),
                Segment::Param(_) => out.push(':'),
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        out
    }

    /// Match a path (without query or hash), returning captured parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        if !path.starts_with('/') {
            return None;
        }

        let parts: Vec<&str> = split_segments(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected.eq_ignore_ascii_case(part) => {}
                Segment::Param(name) if !part.is_empty() => {
                    let value = percent_decode_str(part).decode_utf8_lossy();
                    params.insert(name.clone(), value.into_owned());
                }
                _ => return None,
            }
        }
        Some(params)
    }

    /// Substitute `params` into the template.
    pub fn build(&self, params: &Params) -> Result<String, RouteTableError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(s) => path.push_str(s),
                Segment::Param(name) => match params.get(name) {
                    Some(value) if !value.is_empty() => {
                        path.extend(utf8_percent_encode(value, SEGMENT));
                    }
                    _ => {
                        return Err(RouteTableError::MissingParam {
                            pattern: self.raw.clone(),
                            param: name.clone(),
                        })
                    }
                },
            }
        }
        Ok(path)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.raw)
    }
}

/// Split a path into segments, ignoring the leading slash and one trailing slash.
fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    trimmed.split('/').filter({
        let root = trimmed.is_empty();
        move |_| !root
    })
}
