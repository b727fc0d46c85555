use serde::Serialize;
use std::collections::BTreeMap;

/// A labelled grouping that questions belong to
///
/// Categories are read-only from the API's point of view; rows are seeded
/// directly into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Builds the `id -> label` mapping returned by the listing endpoints
pub fn category_map(categories: &[Category]) -> BTreeMap<i32, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_map_keys_by_id() {
        let categories = vec![
            Category {
                id: 2,
                kind: "Art".to_string(),
            },
            Category {
                id: 1,
                kind: "Science".to_string(),
            },
        ];

        let map = category_map(&categories);

        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], "Science");
        assert_eq!(map[&2], "Art");
    }

    #[test]
    fn category_map_serializes_with_string_keys() {
        let categories = vec![Category {
            id: 3,
            kind: "Geography".to_string(),
        }];

        let json = serde_json::to_value(category_map(&categories)).unwrap();
        assert_eq!(json, serde_json::json!({ "3": "Geography" }));
    }
}
