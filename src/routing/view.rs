//! View identifiers.
//!
//! The resolver never renders anything. It hands one of these identifiers to
//! the host shell, which maps it to an actual page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of pages the job board can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    Home,
    Jobs,
    AddJob,
    EditJob,
    JobPreview,
    NotFound,
}

impl ViewId {
    pub const ALL: [ViewId; 6] = [
        ViewId::Home,
        ViewId::Jobs,
        ViewId::AddJob,
        ViewId::EditJob,
        ViewId::JobPreview,
        ViewId::NotFound,
    ];

    /// Stable kebab-case name, as used in config files and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Jobs => "jobs",
            ViewId::AddJob => "add-job",
            ViewId::EditJob => "edit-job",
            ViewId::JobPreview => "job-preview",
            ViewId::NotFound => "not-found",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}
