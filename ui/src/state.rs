use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use holocron_business::{
    BusinessConfig, HttpTableApi, SharedFormatter, TableController, Time, default_formatter,
};

/// Remote collections the app can browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resource {
    #[default]
    People,
    Planets,
}

impl Resource {
    pub const ALL: [Self; 2] = [Self::People, Self::Planets];

    /// Path segment under `/api`.
    pub fn path(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Planets => "planets",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::People => "People",
            Self::Planets => "Planets",
        }
    }
}

/// The main application state.
#[derive(Debug)]
pub struct State {
    pub config: BusinessConfig,
    /// Frame clock shared by every table's debounce.
    pub time: Time,
    pub people: TableController,
    pub planets: TableController,
    pub selected: Resource,
}

impl Default for State {
    fn default() -> Self {
        Self::build(BusinessConfig::from_env(), Time::default(), default_formatter())
    }
}

impl State {
    /// State against a test server with a frozen clock.
    pub fn test(base_url: String) -> Self {
        Self::build(
            BusinessConfig::new(base_url),
            Time::frozen_at(test_epoch()),
            default_formatter(),
        )
    }

    /// Like [`State::test`] but with a custom date formatter.
    pub fn with_formatter(base_url: String, formatter: SharedFormatter) -> Self {
        Self::build(
            BusinessConfig::new(base_url),
            Time::frozen_at(test_epoch()),
            formatter,
        )
    }

    fn build(config: BusinessConfig, time: Time, formatter: SharedFormatter) -> Self {
        let table = |resource: Resource| {
            TableController::new(
                config.resource_url(resource.path()),
                Arc::new(HttpTableApi),
                formatter.clone(),
            )
            .with_debounce(config.debounce_window())
        };
        let people = table(Resource::People);
        let planets = table(Resource::Planets);

        Self {
            config,
            time,
            people,
            planets,
            selected: Resource::default(),
        }
    }

    pub fn table(&self, resource: Resource) -> &TableController {
        match resource {
            Resource::People => &self.people,
            Resource::Planets => &self.planets,
        }
    }

    pub fn table_mut(&mut self, resource: Resource) -> &mut TableController {
        match resource {
            Resource::People => &mut self.people,
            Resource::Planets => &mut self.planets,
        }
    }

    pub fn selected_table_mut(&mut self) -> &mut TableController {
        self.table_mut(self.selected)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.time.now()
    }
}

fn test_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_point_at_resource_endpoints() {
        let state = State::test("http://localhost:9999".to_string());
        assert_eq!(state.people.url(), "http://localhost:9999/api/people");
        assert_eq!(state.planets.url(), "http://localhost:9999/api/planets");
        assert_eq!(state.selected, Resource::People);
    }
}
