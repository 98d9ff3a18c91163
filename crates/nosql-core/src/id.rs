//! Typed identifiers for NoSQL resources.
//!
//! Appliance IDs are 64-bit integers on the provider side. They are kept as
//! strings here so they never pass through a floating point representation.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Appliance (database) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct ApplianceId(String);

impl ApplianceId {
    /// Wrap an identifier without validating it.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse a decimal appliance identifier.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the input is empty or not numeric.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::config(
                "ApplianceId",
                format!("invalid appliance id `{input}`"),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no identifier is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// The API normally returns IDs as strings, but numbers are accepted as well in
// case the big-integer header is not honoured.
impl<'de> Deserialize<'de> for ApplianceId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}

impl From<String> for ApplianceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ApplianceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for ApplianceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ApplianceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ApplianceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Backup identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackupUuid(Uuid);

impl BackupUuid {
    /// Creates a new wrapper from a [`Uuid`].
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Creates a new random UUID (v4).
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner [`Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parses a backup UUID from a string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the string is not a valid UUID.
    pub fn parse_str(input: &str) -> Result<Self> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|_| Error::config("BackupUuid", format!("invalid backup id `{input}`")))
    }
}

impl From<Uuid> for BackupUuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<BackupUuid> for Uuid {
    fn from(wrapper: BackupUuid) -> Self {
        wrapper.0
    }
}

impl FromStr for BackupUuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl fmt::Display for BackupUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_UUID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_appliance_id_parse() {
        let id = ApplianceId::parse(" 113600000001 ").unwrap();
        assert_eq!(id.as_str(), "113600000001");
        assert!(ApplianceId::parse("").is_err());
        assert!(ApplianceId::parse("12a4").unwrap_err().is_config());
    }

    #[test]
    fn test_appliance_id_deserialize_string_and_number() {
        let from_text: ApplianceId = serde_json::from_str("\"113600000001\"").unwrap();
        let from_number: ApplianceId = serde_json::from_str("113600000001").unwrap();
        assert_eq!(from_text, from_number);
    }

    #[test]
    fn test_appliance_id_serializes_as_string() {
        let json = serde_json::to_string(&ApplianceId::new("9007199254740993")).unwrap();
        assert_eq!(json, "\"9007199254740993\"");
    }

    #[test]
    fn test_backup_uuid_roundtrip() {
        let id: BackupUuid = VALID_UUID.parse().unwrap();
        assert_eq!(id.to_string(), VALID_UUID);
        assert!(BackupUuid::parse_str("not-a-uuid").is_err());
    }
}
