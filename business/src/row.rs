//! Row and result-set shapes returned by the table API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of a remote collection.
///
/// Only `id`, `name`, `created` and `url` are interpreted; every other field
/// is kept as-is in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Row {
    /// Explicit `id`, or the trailing numeric path segment of `url`
    /// (`https://swapi.dev/api/people/4/` -> 4).
    pub fn display_id(&self) -> Option<u64> {
        self.id.or_else(|| {
            self.url.as_deref().and_then(|url| {
                url.trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .and_then(|segment| segment.parse().ok())
            })
        })
    }
}

/// Successful response body: `{ "results": [...], "count": n }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub results: Vec<Row>,
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_swapi_person() {
        let row: Row = serde_json::from_value(serde_json::json!({
            "name": "Luke Skywalker",
            "height": "172",
            "created": "2014-12-09T13:50:51.644000Z",
            "url": "https://swapi.dev/api/people/1/"
        }))
        .unwrap();

        assert_eq!(row.name, "Luke Skywalker");
        assert_eq!(row.display_id(), Some(1));
        assert_eq!(row.extra.get("height"), Some(&Value::from("172")));
        assert_eq!(row.created.map(|c| c.timestamp()), Some(1_418_133_051));
    }

    #[test]
    fn explicit_id_wins_over_url() {
        let row: Row = serde_json::from_value(serde_json::json!({
            "id": 9,
            "name": "Item",
            "created": "2023-01-01T00:00:00Z",
            "url": "https://swapi.dev/api/planets/3/"
        }))
        .unwrap();

        assert_eq!(row.display_id(), Some(9));
    }

    #[test]
    fn missing_id_and_url_has_no_display_id() {
        let row: Row = serde_json::from_value(serde_json::json!({
            "name": "Item",
            "created": "2023-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(row.display_id(), None);
    }

    #[test]
    fn missing_created_does_not_fail_the_set() {
        let set: ResultSet = serde_json::from_value(serde_json::json!({
            "count": 2,
            "results": [
                { "name": "Dated", "created": "2023-01-01T00:00:00Z" },
                { "name": "Undated" }
            ]
        }))
        .unwrap();

        assert_eq!(set.results.len(), 2);
        assert!(set.results[0].created.is_some());
        assert_eq!(set.results[1].created, None);
    }

    #[test]
    fn result_set_ignores_paging_links() {
        let set: ResultSet = serde_json::from_value(serde_json::json!({
            "count": 82,
            "next": "https://swapi.dev/api/people/?page=2",
            "previous": null,
            "results": []
        }))
        .unwrap();

        assert_eq!(set.count, 82);
        assert!(set.results.is_empty());
    }
}
