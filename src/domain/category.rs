use serde::Serialize;
use std::collections::BTreeMap;

/// A question category. The `type` column holds its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories as clients consume them: id to name.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Categories inserted when seeding is enabled.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_serializes_with_string_keys() {
        let map = category_map(vec![
            Category {
                id: 2,
                kind: "Art".to_string(),
            },
            Category {
                id: 1,
                kind: "Science".to_string(),
            },
        ]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["1"], "Science");
        assert_eq!(json["2"], "Art");
    }
}
