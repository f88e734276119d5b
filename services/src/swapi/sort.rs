//! Ordering of SWAPI result items by an arbitrary field.
//!
//! SWAPI sends most numeric fields as strings (`"population": "200000"`), so
//! numeric-looking strings sort as numbers. Values are grouped by kind
//! (numbers, then text, then missing or other JSON types) so the comparison is
//! a total order; only the comparison within a kind follows the direction.

use std::cmp::Ordering;

use serde_json::{Map, Value};

pub type Item = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Anything other than `desc` sorts ascending.
    pub fn from_param(order: &str) -> Self {
        if order == "desc" {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

#[derive(Debug)]
enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
    Other,
}

impl<'a> SortKey<'a> {
    fn of(item: &'a Item, field: &str) -> Self {
        match item.get(field) {
            Some(Value::Number(n)) => n.as_f64().map_or(Self::Other, Self::Number),
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Self::Number(n),
                _ => Self::Text(s),
            },
            _ => Self::Other,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Text(_) => 1,
            Self::Other => 2,
        }
    }

    fn compare(&self, other: &Self, direction: Direction) -> Ordering {
        let within = match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Other, Self::Other) => return Ordering::Equal,
            _ => return self.rank().cmp(&other.rank()),
        };
        match direction {
            Direction::Ascending => within,
            Direction::Descending => within.reverse(),
        }
    }
}

/// Stable in-place sort of `items` by `field`.
pub fn sort_items(items: &mut [Item], field: &str, direction: Direction) {
    items.sort_by(|a, b| SortKey::of(a, field).compare(&SortKey::of(b, field), direction));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(values: Value) -> Vec<Item> {
        serde_json::from_value(values).unwrap()
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn strings_sort_lexicographically() {
        let mut data = items(json!([
            { "name": "Leia" }, { "name": "Han" }, { "name": "Luke" }
        ]));

        sort_items(&mut data, "name", Direction::Ascending);
        assert_eq!(names(&data), ["Han", "Leia", "Luke"]);

        sort_items(&mut data, "name", Direction::Descending);
        assert_eq!(names(&data), ["Luke", "Leia", "Han"]);
    }

    #[test]
    fn numeric_strings_sort_numerically() {
        let mut data = items(json!([
            { "name": "a", "height": "172" },
            { "name": "b", "height": "96" },
            { "name": "c", "height": 202 }
        ]));

        sort_items(&mut data, "height", Direction::Ascending);
        assert_eq!(names(&data), ["b", "a", "c"]);
    }

    #[test]
    fn missing_values_stay_last_and_stable() {
        let mut data = items(json!([
            { "name": "x" },
            { "name": "b", "mass": "unknown" },
            { "name": "y" },
            { "name": "a", "mass": "77" }
        ]));

        sort_items(&mut data, "mass", Direction::Descending);
        assert_eq!(names(&data), ["a", "b", "x", "y"]);
    }

    #[test]
    fn order_param() {
        assert_eq!(Direction::from_param("desc"), Direction::Descending);
        assert_eq!(Direction::from_param("asc"), Direction::Ascending);
        assert_eq!(Direction::from_param(""), Direction::Ascending);
    }
}
