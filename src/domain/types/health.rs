use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of the API root (`GET /`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiRoot {
    pub url: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Health {
    pub is_healthy: bool,
}

/// Backend time in milliseconds since the unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Clock {
    pub server_time: i64,
}

impl Clock {
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.server_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_millis() {
        let clock: Clock = serde_json::from_str(r#"{"server_time": 1603400958947}"#).unwrap();
        assert_eq!(
            clock.datetime().unwrap().to_rfc3339(),
            "2020-10-22T21:09:18.947+00:00"
        );
    }
}
