use crate::model::{Dataset, Leaf, Location};
use std::collections::HashMap;

/// Where a leaf was first seen, and the leaf itself.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub location: Location,
    pub leaf: Leaf,
}

/// Ordered mapping identity → first occurrence.
///
/// Built in document order (category order, then sub-category order, then
/// leaf order). The first occurrence of an identity wins; later repeats are
/// counted but not stored. Malformed leaves (no identity) are skipped.
#[derive(Debug, Clone, Default)]
pub struct LeafIndex {
    order: Vec<String>,
    entries: HashMap<String, IndexEntry>,
    repeats: Vec<(String, Location)>,
    skipped: usize,
}

impl LeafIndex {
    /// Index every leaf of `dataset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clipdata_core::model::{Dataset, DatasetKind};
    /// use clipdata_core::traversal::LeafIndex;
    /// use serde_json::json;
    ///
    /// let raw = json!([{"name": "Smileys", "emojis": [{"emoji": "😀"}, {"emoji": "😃"}]}]);
    /// let (dataset, _) = Dataset::from_json(DatasetKind::Emoji, &raw).unwrap();
    /// let index = LeafIndex::build(&dataset);
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.location_of("😃").unwrap().to_string(), "Smileys");
    /// ```
    pub fn build(dataset: &Dataset) -> Self {
        let field = dataset.identity_field();
        let mut index = LeafIndex::default();
        for (location, leaf) in dataset.leaves() {
            let Some(id) = leaf.identity(field) else {
                index.skipped += 1;
                continue;
            };
            if index.entries.contains_key(id) {
                index.repeats.push((id.to_string(), location));
                continue;
            }
            index.order.push(id.to_string());
            index.entries.insert(
                id.to_string(),
                IndexEntry {
                    location,
                    leaf: leaf.clone(),
                },
            );
        }
        index
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.entries.contains_key(identity)
    }

    /// Full leaf record of the first occurrence
    pub fn get(&self, identity: &str) -> Option<&Leaf> {
        self.entries.get(identity).map(|e| &e.leaf)
    }

    pub fn entry(&self, identity: &str) -> Option<&IndexEntry> {
        self.entries.get(identity)
    }

    pub fn location_of(&self, identity: &str) -> Option<&Location> {
        self.entries.get(identity).map(|e| &e.location)
    }

    /// Identity → location path, in document order
    pub fn locations(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.order.iter().filter_map(|id| {
            self.entries
                .get(id)
                .map(|e| (id.as_str(), e.location.to_string()))
        })
    }

    /// Identities in document order
    pub fn identities(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Later occurrences of an already indexed identity, with their location
    pub fn repeats(&self) -> &[(String, Location)] {
        &self.repeats
    }

    /// Number of leaves without a usable identity
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DatasetKind;
    use serde_json::json;

    fn kaomoji(raw: serde_json::Value) -> Dataset {
        Dataset::from_json(DatasetKind::Kaomoji, &raw).unwrap().0
    }

    #[test]
    fn test_first_occurrence_wins() {
        let dataset = kaomoji(json!([
            {"name": "A", "categories": [{"name": "One", "emoticons": ["x", "y"]}]},
            {"name": "B", "categories": [{"name": "Two", "emoticons": ["y", "z"]}]}
        ]));
        let index = LeafIndex::build(&dataset);

        assert_eq!(index.len(), 3);
        assert_eq!(index.location_of("y").unwrap().to_string(), "A > One");
        assert_eq!(index.repeats().len(), 1);
        assert_eq!(index.repeats()[0].1.to_string(), "B > Two");
    }

    #[test]
    fn test_locations_follow_document_order() {
        let dataset = kaomoji(json!([
            {"name": "A", "categories": [{"name": "One", "emoticons": ["b", "a"]}]}
        ]));
        let index = LeafIndex::build(&dataset);
        let locs: Vec<(&str, String)> = index.locations().collect();
        assert_eq!(locs, vec![("b", "A > One".to_string()), ("a", "A > One".to_string())]);
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let dataset = kaomoji(json!([
            {"name": "A", "categories": [{"name": "One", "emoticons": [{"description": "no id"}, {"kaomoji": "ok"}]}]}
        ]));
        let index = LeafIndex::build(&dataset);
        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped(), 1);
        assert!(index.get("ok").unwrap().is_record());
    }
}
