//! Exchange definitions and the builtin registry

use super::errors::{ConfigurationError, Result};
use chrono::NaiveTime;
use chrono_tz::Tz;
use std::collections::HashSet;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeDefinition {
    pub name: String,
    /// IANA zone database name, e.g. `America/New_York`.
    pub timezone_id: String,
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl ExchangeDefinition {
    pub fn new(
        name: impl Into<String>,
        timezone_id: impl Into<String>,
        open: NaiveTime,
        close: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            timezone_id: timezone_id.into(),
            open,
            close,
        }
    }

    /// Resolves the exchange's timezone against the zone database.
    pub fn timezone(&self) -> Result<Tz> {
        resolve_timezone(&self.timezone_id).ok_or_else(|| {
            ConfigurationError::UnresolvableTimezone {
                exchange: self.name.clone(),
                timezone: self.timezone_id.clone(),
            }
            .into()
        })
    }

    /// Trading hours as `HH:MM - HH:MM`, in the exchange's own local time.
    pub fn hours_label(&self) -> String {
        format!("{} - {}", self.open.format("%H:%M"), self.close.format("%H:%M"))
    }
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("registry times are valid")
}

static BUILTIN: LazyLock<Vec<ExchangeDefinition>> = LazyLock::new(|| {
    vec![
        ExchangeDefinition::new(
            "New York Stock Exchange (NYSE)",
            "America/New_York",
            at(9, 30),
            at(16, 0),
        ),
        ExchangeDefinition::new(
            "London Stock Exchange (LSE)",
            "Europe/London",
            at(8, 0),
            at(16, 30),
        ),
        ExchangeDefinition::new(
            "Tokyo Stock Exchange (TSE)",
            "Asia/Tokyo",
            at(9, 0),
            at(15, 0),
        ),
        ExchangeDefinition::new(
            "Hong Kong Stock Exchange (HKEX)",
            "Asia/Hong_Kong",
            at(9, 30),
            at(16, 0),
        ),
        ExchangeDefinition::new("Euronext Paris", "Europe/Paris", at(9, 0), at(17, 30)),
        ExchangeDefinition::new(
            "Australian Securities Exchange (ASX)",
            "Australia/Sydney",
            at(10, 0),
            at(16, 0),
        ),
    ]
});

/// The compiled-in exchanges, in display order.
pub fn builtin_exchanges() -> &'static [ExchangeDefinition] {
    &BUILTIN
}

pub fn exchange_names(definitions: &[ExchangeDefinition]) -> Vec<String> {
    definitions.iter().map(|d| d.name.clone()).collect()
}

/// Resolves a zone database name, accepting Windows zone ids as aliases.
pub fn resolve_timezone(id: &str) -> Option<Tz> {
    id.parse::<Tz>()
        .ok()
        .or_else(|| windows_zone_alias(id).and_then(|iana| iana.parse::<Tz>().ok()))
}

// Windows ids map to the CLDR "001" territory zone.
fn windows_zone_alias(id: &str) -> Option<&'static str> {
    let iana = match id {
        "Eastern Standard Time" => "America/New_York",
        "Central Standard Time" => "America/Chicago",
        "Pacific Standard Time" => "America/Los_Angeles",
        "GMT Standard Time" => "Europe/London",
        "W. Europe Standard Time" => "Europe/Berlin",
        "Romance Standard Time" => "Europe/Paris",
        "Tokyo Standard Time" => "Asia/Tokyo",
        "China Standard Time" => "Asia/Shanghai",
        "India Standard Time" => "Asia/Kolkata",
        "Singapore Standard Time" => "Asia/Singapore",
        "AUS Eastern Standard Time" => "Australia/Sydney",
        _ => return None,
    };
    Some(iana)
}

/// Checks the registry invariants: resolvable zones, non-empty unique names
/// and opening strictly before closing.
pub fn validate_registry(definitions: &[ExchangeDefinition]) -> Result<()> {
    let mut seen = HashSet::new();
    for definition in definitions {
        if definition.name.trim().is_empty() {
            return Err(ConfigurationError::EmptyName.into());
        }
        if !seen.insert(definition.name.as_str()) {
            return Err(ConfigurationError::DuplicateName(definition.name.clone()).into());
        }
        if definition.open >= definition.close {
            return Err(ConfigurationError::InvertedHours {
                exchange: definition.name.clone(),
            }
            .into());
        }
        definition.timezone()?;
    }
    Ok(())
}
