//! Search redirector: turns captured text into a navigation action.
//!
//! The redirector is pure. It never navigates on its own; callers (the
//! trigger widget, the page server, the CLI) act on the returned [`Action`].

use crate::config::ConfigError;
use crate::query::Query;
use serde::Serialize;

/// Base every article URL is built from.
pub const WIKIPEDIA_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Outcome of a search attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "url", rename_all = "snake_case")]
pub enum Action {
    /// Full-page navigation to the given URL.
    Navigate(String),
    /// Query was empty after trimming; stay put.
    NoOp,
}

impl Action {
    pub fn url(&self) -> Option<&str> {
        match self {
            Action::Navigate(url) => Some(url),
            Action::NoOp => None,
        }
    }
}

/// Builds article URLs against a fixed base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirector {
    base: String,
}

impl Default for Redirector {
    fn default() -> Self {
        Self {
            base: WIKIPEDIA_BASE.to_string(),
        }
    }
}

impl Redirector {
    /// Redirector for another wiki. `base` must be an absolute http(s) URL
    /// ending in `/`; the encoded query is appended verbatim.
    pub fn with_base(base: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidBaseUrl(base.to_string());
        let parsed = url::Url::parse(base).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https")
            || parsed.query().is_some()
            || parsed.fragment().is_some()
            || !base.ends_with('/')
        {
            return Err(invalid());
        }
        Ok(Self {
            base: base.to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Evaluates `raw_input`: `NoOp` when blank after trimming, otherwise
    /// `Navigate` to the base followed by the encoded query.
    pub fn attempt(&self, raw_input: &str) -> Action {
        let query = Query::capture(raw_input);
        if query.is_empty() {
            tracing::trace!("blank query, nothing to do");
            return Action::NoOp;
        }
        let url = format!("{}{}", self.base, query.encoded());
        tracing::debug!(query = query.trimmed(), %url, "search resolved");
        Action::Navigate(url)
    }
}

/// [`Redirector::attempt`] against [`WIKIPEDIA_BASE`].
pub fn attempt_search(raw_input: &str) -> Action {
    Redirector::default().attempt(raw_input)
}
