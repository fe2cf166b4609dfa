//! Column names of the subsidized housing dataset that survive cleaning.

pub const TOTAL_UNITS: &str = "TotalUnits";
pub const ACTIVE_SUBS: &str = "ActiveSubs";
pub const LATITUDE: &str = "Latitude";
pub const LONGITUDE: &str = "Longitude";
pub const OWNER_TYPE: &str = "OwnerType";

/// The five retained columns, in output order.
pub const SELECTED_COLUMNS: [&str; 5] = [TOTAL_UNITS, ACTIVE_SUBS, LATITUDE, LONGITUDE, OWNER_TYPE];
