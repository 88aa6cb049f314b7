//! Aggregation of sessions into per-project and per-tag totals.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::TimeDelta;

use crate::key::{ProjectKey, TagSet};
use crate::session::Session;

/// Total time for one tag set within a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTotal {
    pub tags: TagSet,
    pub duration: TimeDelta,
}

/// Total time for one (category, project) key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTotal {
    pub key: ProjectKey,
    pub duration: TimeDelta,
    /// Per-tag-set breakdown, empty unless requested.
    pub tags: Vec<TagTotal>,
}

/// Aggregated totals, sorted for display.
///
/// Projects are ordered by duration descending; equal durations keep the
/// order in which their key first appeared. Tag breakdowns follow the same
/// rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: TimeDelta,
    pub projects: Vec<ProjectTotal>,
}

impl Summary {
    /// Aggregates `sessions`, optionally breaking each project down by tag set.
    pub fn from_sessions(sessions: &[Session], by_tags: bool) -> Self {
        let mut projects: Buckets<ProjectKey, (TimeDelta, Buckets<TagSet, TimeDelta>)> =
            Buckets::default();
        let mut total = TimeDelta::zero();

        for session in sessions {
            let duration = session.duration();
            total += duration;

            let (project_total, tag_buckets) = projects
                .entry_or_insert_with(&session.key, || (TimeDelta::zero(), Buckets::default()));
            *project_total += duration;
            if by_tags {
                let tags = TagSet::new(session.tags.iter().cloned());
                *tag_buckets.entry_or_insert_with(&tags, TimeDelta::zero) += duration;
            }
        }

        let mut projects: Vec<ProjectTotal> = projects
            .into_iter()
            .map(|(key, (duration, tag_buckets))| {
                let mut tags: Vec<TagTotal> = tag_buckets
                    .into_iter()
                    .map(|(tags, duration)| TagTotal { tags, duration })
                    .collect();
                tags.sort_by_key(|t| std::cmp::Reverse(t.duration));
                ProjectTotal {
                    key,
                    duration,
                    tags,
                }
            })
            .collect();
        // sort_by_key is stable, so ties keep first-seen order
        projects.sort_by_key(|p| std::cmp::Reverse(p.duration));

        Self { total, projects }
    }

    /// True when nothing was tracked in the window.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Accumulators keyed by `K`, iterated in first-insertion order.
#[derive(Debug)]
struct Buckets<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Buckets<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Clone + Eq + Hash, V> Buckets<K, V> {
    fn entry_or_insert_with(&mut self, key: &K, init: impl FnOnce() -> V) -> &mut V {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.entries.push((key.clone(), init()));
                self.index.insert(key.clone(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[i].1
    }
}

impl<K, V> IntoIterator for Buckets<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
