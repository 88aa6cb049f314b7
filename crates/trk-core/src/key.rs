//! Grouping keys for pairing and aggregation.

use std::fmt;

use serde::Serialize;

/// The (category, project) pair that scopes pairing and aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ProjectKey {
    pub category: String,
    pub project: String,
}

impl ProjectKey {
    pub fn new(category: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            project: project.into(),
        }
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.project)
    }
}

/// A session's tags in sorted order.
///
/// Sorting makes permutations of the same multiset equal. Repeated tags are
/// kept, so `[a, a]` and `[a]` are different sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        tags.sort();
        Self(tags)
    }

    /// True for the "no tags" bucket.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "[no tags]")
        } else {
            write!(f, "[{}]", self.0.join(", "))
        }
    }
}
