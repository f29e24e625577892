use serde::{Deserialize, Serialize};

/// One JSON object from the upstream statistics endpoint.
///
/// Numeric counters default to 0 when the upstream omits them, which it
/// does for some small territories. The nested `countryInfo` object
/// (country code, coordinates) is not declared here and is discarded
/// during deserialization.
#[derive(Deserialize, Debug, Clone)]
pub struct RawRecord {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub cases: u64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub recovered: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub tests: u64,
    #[serde(default)]
    pub population: u64,
}

/// One normalized per-country row. `country` is never empty;
/// `continent` may be empty for territories the upstream does not
/// classify.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub country: String,
    pub continent: String,
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
    pub tests: u64,
    pub population: u64,
}

/// The full normalized collection of per-country rows, unique by
/// country, in upstream response order. Built once per successful
/// fetch, shared immutably afterwards, never mutated in place.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub rows: Vec<CountryRow>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
