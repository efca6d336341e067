use crate::error::model_error::ModelError;
use crate::{ErrorLocation, LookupQuery, Platform};

use std::panic::Location;

/// Builder for validated [`LookupQuery`] instances.
#[derive(Debug, Default)]
pub struct LookupQueryBuilder {
    code: Option<String>,
    platform: Option<Platform>,
}

impl LookupQueryBuilder {
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Build the LookupQuery with validation.
    #[track_caller]
    pub fn build(self) -> Result<LookupQuery, ModelError> {
        let code = self.code.ok_or_else(|| ModelError::Validation {
            message: String::from("Code is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let code = code.trim().to_string();
        if code.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Code cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(LookupQuery {
            code,
            platform: self.platform,
        })
    }
}
