use crate::error::model_error::ModelError;
use crate::ErrorLocation;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Platforms the lookup service can filter by.
///
/// The canonical spelling doubles as the `platform` query parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "macOS")]
    MacOs,
    #[serde(rename = "tvOS")]
    TvOs,
    #[serde(rename = "watchOS")]
    WatchOs,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Ios,
        Platform::MacOs,
        Platform::TvOs,
        Platform::WatchOs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::MacOs => "macOS",
            Platform::TvOs => "tvOS",
            Platform::WatchOs => "watchOS",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ModelError;

    /// Case-insensitive: `ios`, `IOS` and `iOS` all parse.
    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::Validation {
                message: format!(
                    "Unknown platform '{trimmed}' (expected one of: iOS, macOS, tvOS, watchOS)"
                ),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
