use serde::Deserialize;
use serde_json::{Map, Value};

use super::sort::{Direction, Item, sort_items};
use crate::error::ProxyError;

/// Query string accepted by the list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListParams {
    pub search: String,
    pub page: String,
    pub sort_by: String,
    pub order: String,
}

/// Shared HTTP client for one upstream SWAPI root.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn resource_url(&self, resource: &str) -> String {
        format!("{}/{resource}/", self.base_url.trim_end_matches('/'))
    }

    /// Fetches one page of `resource` and orders its `results` when
    /// `sortBy` is set. Every other field of the upstream body passes through.
    pub async fn list(&self, resource: &str, params: &ListParams) -> Result<Value, ProxyError> {
        let url = self.resource_url(resource);
        let mut query = vec![("search", params.search.as_str())];
        if !params.page.is_empty() {
            query.push(("page", params.page.as_str()));
        }

        tracing::debug!(%url, ?params, "Fetching from SWAPI");

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|err| ProxyError::Request(err.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ProxyError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ProxyError::Request(err.to_string()))?;
        let data: Map<String, Value> =
            serde_json::from_slice(&body).map_err(|err| ProxyError::Decode(err.to_string()))?;

        reorder(data, params)
    }
}

fn reorder(mut data: Map<String, Value>, params: &ListParams) -> Result<Value, ProxyError> {
    let results = match data.remove("results") {
        Some(Value::Array(results)) => results,
        _ => return Err(ProxyError::MissingResults),
    };

    let mut items = results
        .into_iter()
        .map(|item| match item {
            Value::Object(item) => Ok(item),
            _ => Err(ProxyError::InvalidItem),
        })
        .collect::<Result<Vec<Item>, _>>()?;

    if !params.sort_by.is_empty() {
        sort_items(
            &mut items,
            &params.sort_by,
            Direction::from_param(&params.order),
        );
    }

    data.insert(
        "results".to_string(),
        Value::Array(items.into_iter().map(Value::Object).collect()),
    );
    Ok(Value::Object(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(value: Value) -> Map<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn reorder_keeps_other_fields() {
        let params = ListParams {
            sort_by: "name".into(),
            order: "asc".into(),
            ..Default::default()
        };
        let data = page(json!({
            "count": 2,
            "next": null,
            "results": [{ "name": "b" }, { "name": "a" }]
        }));

        let out = reorder(data, &params).unwrap();
        assert_eq!(out["count"], 2);
        assert!(out["next"].is_null());
        assert_eq!(out["results"][0]["name"], "a");
    }

    #[test]
    fn reorder_without_sort_key_keeps_upstream_order() {
        let data = page(json!({ "results": [{ "name": "b" }, { "name": "a" }] }));
        let out = reorder(data, &ListParams::default()).unwrap();
        assert_eq!(out["results"][0]["name"], "b");
    }

    #[test]
    fn reorder_rejects_bad_shapes() {
        let missing = page(json!({ "count": 0 }));
        assert!(matches!(
            reorder(missing, &ListParams::default()),
            Err(ProxyError::MissingResults)
        ));

        let scalar = page(json!({ "results": [1] }));
        assert!(matches!(
            reorder(scalar, &ListParams::default()),
            Err(ProxyError::InvalidItem)
        ));
    }

    #[test]
    fn params_use_camel_case() {
        let params: ListParams =
            serde_json::from_value(json!({ "sortBy": "created", "order": "desc" })).unwrap();
        assert_eq!(params.sort_by, "created");
        assert_eq!(params.search, "");
    }
}
