//! Ordered, case-insensitive header map.
//!
//! [`HttpHeaders`] keeps headers in the order they were first inserted while
//! matching names without regard to ASCII case. The stored name always uses the
//! spelling of the last [`HttpHeaders::set`] call, which is what
//! [`HttpHeaders::to_json`] exports.
//!
//! # Examples
//!
//! ```rust
//! use httpline::http::HttpHeaders;
//! use serde_json::json;
//!
//! let mut headers = HttpHeaders::new();
//! headers.set("content-type", "text/plain");
//! headers.set("Content-Type", "application/json");
//!
//! assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
//! assert_eq!(headers.to_json(), json!({ "Content-Type": "application/json" }));
//! ```

use crate::error::{Error, Result};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, SET_COOKIE};
use serde_json::{Map, Value};
use std::fmt;

/// A header map preserving insertion order with case-insensitive lookup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    entries: Vec<(String, String)>,
}

impl HttpHeaders {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Sets a header, replacing any existing value whose name matches without
    /// regard to case. The entry keeps its position but takes the new spelling;
    /// further entries appended under the same name are dropped.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => {
                let mut index = 0;
                self.entries.retain(|(n, _)| {
                    let keep = index <= i || !n.eq_ignore_ascii_case(&name);
                    index += 1;
                    keep
                });
                self.entries[i] = (name, value);
            }
            None => self.entries.push((name, value)),
        }
    }

    /// Adds a header without replacing existing ones of the same name.
    ///
    /// Only for headers that cannot be folded into one value, like `Set-Cookie`.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Gets the value of a header, matching the name without regard to case.
    ///
    /// For an appended header this is the first value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    /// Every value stored under `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns true when a header with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Removes every value of a header, returning the first one.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let first = self.position(name).map(|i| self.entries.remove(i).1);
        self.entries.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        first
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Exports the headers as a plain JSON object, names spelled as last set.
    ///
    /// An appended header keeps only its last value.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(n, v)| (n.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }

    /// Converts the headers into a reqwest [`HeaderMap`] for the wire.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::InvalidHeader(format!("\"{}\": {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| Error::InvalidHeader(format!("\"{}\": {}", name, e)))?;
            map.append(header_name, header_value);
        }
        Ok(map)
    }
}

impl From<&HeaderMap> for HttpHeaders {
    /// Repeated headers are folded into a single comma separated value,
    /// except `Set-Cookie`, whose values stay separate entries.
    fn from(map: &HeaderMap) -> Self {
        let mut headers = HttpHeaders::new();
        for (name, value) in map {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            if name == SET_COOKIE {
                headers.append(name.as_str(), value);
                continue;
            }
            match headers.position(name.as_str()) {
                Some(i) => {
                    let existing = &mut headers.entries[i].1;
                    existing.push_str(", ");
                    existing.push_str(&value);
                }
                None => headers.entries.push((name.as_str().to_string(), value)),
            }
        }
        headers
    }
}

impl<K, V> FromIterator<(K, V)> for HttpHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = HttpHeaders::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

impl fmt::Debug for HttpHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
