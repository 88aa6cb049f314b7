//! Index of tags used per project across the whole log.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::event::{Action, Event};

/// Distinct start-event tags per category and project, all sorted.
///
/// A project appears once it has at least one start event, even if none of
/// them carried tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagIndex {
    categories: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
}

impl TagIndex {
    /// Builds the index from every event, ignoring any time window.
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut index = Self::default();
        for event in events {
            if event.action != Action::Start {
                continue;
            }
            index
                .categories
                .entry(event.key.category.clone())
                .or_default()
                .entry(event.key.project.clone())
                .or_default()
                .extend(event.tags.iter().cloned());
        }
        index
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories in alphabetical order, each mapping project to tags.
    pub fn categories(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, BTreeSet<String>>)> {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::CivilZone;

    fn index(lines: &[&str]) -> TagIndex {
        let zone = CivilZone::default();
        let events: Vec<Event> = lines.iter().filter_map(|l| Event::parse(l, &zone)).collect();
        TagIndex::from_events(&events)
    }

    fn flatten(index: &TagIndex) -> Vec<(String, String, Vec<String>)> {
        index
            .categories()
            .flat_map(|(category, projects)| {
                projects
                    .iter()
                    .map(|(project, tags)| {
                        (
                            category.to_string(),
                            project.to_string(),
                            tags.iter().cloned().collect(),
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn collects_distinct_sorted_tags() {
        let idx = index(&[
            "2024-01-01T14:00:00Z start work proj1 urgent client-x",
            "2024-02-01T14:00:00Z start work proj1 urgent",
            "2023-05-01T14:00:00Z start home garden",
            "2024-01-01T14:00:00Z start admin email later",
        ]);

        let expected: Vec<(String, String, Vec<String>)> = vec![
            ("admin".into(), "email".into(), vec!["later".into()]),
            ("home".into(), "garden".into(), vec![]),
            ("work".into(), "proj1".into(), vec!["client-x".into(), "urgent".into()]),
        ];
        assert_eq!(flatten(&idx), expected);
    }

    #[test]
    fn stop_tags_are_ignored() {
        let idx = index(&["2024-01-01T14:00:00Z stop work proj1 late"]);
        assert!(idx.is_empty());
    }

    #[test]
    fn json_shape() {
        let idx = index(&["2024-01-01T14:00:00Z start work proj1 b a"]);
        assert_eq!(
            serde_json::to_string(&idx).unwrap(),
            r#"{"work":{"proj1":["a","b"]}}"#
        );
    }
}
