use crate::errors::{FetchError, Result};
use crate::types::{CountryRow, Dataset, RawRecord};
use std::collections::HashSet;

/// Converts raw per-country records into the fixed-column [`Dataset`].
///
/// Row order follows the upstream response; no re-sorting. A record
/// with an empty country name fails the whole pass. Duplicate country
/// names keep the first occurrence so the dataset stays unique by
/// country.
pub fn normalize(records: Vec<RawRecord>) -> Result<Dataset> {
    let mut rows = Vec::with_capacity(records.len());
    let mut seen = HashSet::new();

    for record in records {
        if record.country.is_empty() {
            return Err(FetchError::Schema(
                "record with empty country name".into(),
            ));
        }
        if !seen.insert(record.country.clone()) {
            tracing::warn!(country = %record.country, "duplicate country in response, keeping first");
            continue;
        }
        rows.push(CountryRow {
            country: record.country,
            continent: record.continent,
            cases: record.cases,
            deaths: record.deaths,
            recovered: record.recovered,
            active: record.active,
            tests: record.tests,
            population: record.population,
        });
    }

    Ok(Dataset { rows })
}
