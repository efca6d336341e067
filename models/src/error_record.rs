use serde::{Deserialize, Deserializer, Serialize};

/// One entry returned by the lookup service.
///
/// Every wire field is optional and nullable; absent and `null` values both
/// decode to an empty string so the formatter never has to care.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Identifier of the constant, e.g. `errSecItemNotFound`.
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,

    /// Free-text explanation. Often empty.
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,

    /// Owning framework, e.g. `Security`.
    #[serde(default, deserialize_with = "nullable_string")]
    pub framework: String,

    /// Declaring header, e.g. `SecBase.h`.
    #[serde(default, deserialize_with = "nullable_string")]
    pub header_file: String,
}

impl ErrorRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        framework: impl Into<String>,
        header_file: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            framework: framework.into(),
            header_file: header_file.into(),
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
