pub mod builder;

use crate::Platform;

/// What the user asked for: a status code and an optional platform filter.
///
/// The code stays textual. Integer codes (`-50`, `1009`) and symbolic ones
/// (`errSecItemNotFound`) are both passed to the service unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub code: String,
    pub platform: Option<Platform>,
}

impl LookupQuery {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            platform: None,
        }
    }

    pub fn with_platform(mut self, platform: Option<Platform>) -> Self {
        self.platform = platform;
        self
    }
}

impl From<i64> for LookupQuery {
    fn from(code: i64) -> Self {
        LookupQuery::new(code.to_string())
    }
}
