use chrono::{DateTime, Duration, Utc};

/// Frame clock.
///
/// The app refreshes it from the system clock once per frame. Tests freeze it
/// and move it forward by hand so debounce windows are deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
    frozen: bool,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            virt: Utc::now(),
            frozen: false,
        }
    }
}

impl Time {
    pub fn frozen_at(at: DateTime<Utc>) -> Self {
        Self {
            virt: at,
            frozen: true,
        }
    }

    /// Refresh from the system clock unless frozen.
    pub fn tick(&mut self) {
        if !self.frozen {
            self.virt = Utc::now();
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn frozen_time_only_moves_when_advanced() {
        let start = Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
        let mut time = Time::frozen_at(start);

        time.tick();
        assert_eq!(time.now(), start);

        time.advance(Duration::milliseconds(600));
        assert_eq!(time.now(), start + Duration::milliseconds(600));
    }
}
