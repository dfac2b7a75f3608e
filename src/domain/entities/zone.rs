//! CDN zone identifiers.

use std::fmt;

/// Opaque zone identifier issued by the CDN provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A zone as listed by a lookup by domain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSummary {
    pub id: String,
}

/// Picks the zone to purge from a lookup result.
///
/// The first listed zone always wins. No attempt is made to disambiguate
/// between several zones matching the same name; zones with an empty id
/// are not usable and are skipped.
pub fn select_zone(zones: &[ZoneSummary]) -> Option<ZoneId> {
    zones
        .iter()
        .find(|zone| !zone.id.is_empty())
        .map(|zone| ZoneId::new(zone.id.clone()))
}
