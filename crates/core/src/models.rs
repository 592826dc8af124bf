//! # Models
//!
//! This module contains the data models used throughout the Title Sentinel core.
//!
//! These models represent the triggering event's body as delivered by the
//! hosting platform. They are designed to be deserializable from the raw
//! webhook JSON so that the validation engine never touches untyped data.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents the issue referenced by an issue-triggered event.
///
/// Only the fields the validation engine cares about are modeled; everything
/// else in the raw event body is ignored during deserialization.
///
/// # Examples
///
/// ```
/// use title_sentinel_core::models::Issue;
///
/// let issue = Issue {
///     number: Some(42),
///     title: "fix: correct the login flow".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Issue {
    /// The issue number, when the event carries one
    #[serde(default)]
    pub number: Option<u64>,

    /// The title of the issue; empty when the event did not provide one
    #[serde(default)]
    pub title: String,
}

/// Represents the pull request referenced by a pull-request-triggered event.
///
/// # Examples
///
/// ```
/// use title_sentinel_core::models::PullRequest;
///
/// let pr = PullRequest {
///     number: Some(123),
///     title: "feat(auth): add GitHub login".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PullRequest {
    /// The pull request number, when the event carries one
    #[serde(default)]
    pub number: Option<u64>,

    /// The title of the pull request; empty when the event did not provide one
    #[serde(default)]
    pub title: String,
}

/// The body of a triggering event.
///
/// Exactly two shapes are recognized: an event carrying an `issue` and an
/// event carrying a `pull_request`. A real event populates at most one of
/// the two branches; any other shape yields no title.
///
/// # Examples
///
/// ```
/// use title_sentinel_core::models::{EventPayload, PullRequest};
///
/// let payload = EventPayload {
///     issue: None,
///     pull_request: Some(PullRequest {
///         number: Some(7),
///         title: "chore: bump dependencies".to_string(),
///     }),
/// };
///
/// assert_eq!(payload.title(), Some("chore: bump dependencies"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPayload {
    /// The issue branch of the event body, if present
    #[serde(default)]
    pub issue: Option<Issue>,

    /// The pull request branch of the event body, if present
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

impl EventPayload {
    /// Extracts the title under validation from the event body.
    ///
    /// The `issue` branch takes priority over the `pull_request` branch so
    /// that the same engine serves issue-comment-triggered and
    /// pull-request-triggered events. An empty title string counts as
    /// absent.
    ///
    /// # Returns
    ///
    /// `Some(title)` when either branch carries a non-empty title, `None`
    /// otherwise.
    pub fn title(&self) -> Option<&str> {
        if let Some(issue) = &self.issue {
            if !issue.title.is_empty() {
                return Some(&issue.title);
            }
        }

        if let Some(pull_request) = &self.pull_request {
            if !pull_request.title.is_empty() {
                return Some(&pull_request.title);
            }
        }

        None
    }

    /// The number of the issue or pull request the event refers to.
    ///
    /// Follows the same branch priority as [`EventPayload::title`]. Used for
    /// log context only.
    pub fn number(&self) -> Option<u64> {
        if let Some(issue) = &self.issue {
            if !issue.title.is_empty() {
                return issue.number;
            }
        }

        self.pull_request.as_ref().and_then(|pr| pr.number)
    }
}
