//! The fixed set of selectable cities
//!
//! The city picker offers a hardcoded list of five UK cities. Each city has a
//! stable lowercase key (used in weather backend paths and photo queries) and
//! a display label.

use serde::{Deserialize, Serialize};

/// A selectable city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    London,
    Manchester,
    Birmingham,
    Glasgow,
    Liverpool,
}

/// One entry of the city picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityOption {
    /// Stable lowercase key
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
}

impl City {
    /// All selectable cities, in picker order
    pub const ALL: [City; 5] = [
        City::London,
        City::Manchester,
        City::Birmingham,
        City::Glasgow,
        City::Liverpool,
    ];

    /// Stable lowercase key for backend paths and photo queries
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            City::London => "london",
            City::Manchester => "manchester",
            City::Birmingham => "birmingham",
            City::Glasgow => "glasgow",
            City::Liverpool => "liverpool",
        }
    }

    /// Display label for the picker
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            City::London => "London",
            City::Manchester => "Manchester",
            City::Birmingham => "Birmingham",
            City::Glasgow => "Glasgow",
            City::Liverpool => "Liverpool",
        }
    }

    /// Parse a city from its lowercase key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|city| city.key() == key)
    }

    /// The fixed `{value, label}` option list for the picker
    #[must_use]
    pub fn options() -> Vec<CityOption> {
        Self::ALL
            .into_iter()
            .map(|city| CityOption {
                value: city.key(),
                label: city.label(),
            })
            .collect()
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
