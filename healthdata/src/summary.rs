use crate::types::CountryRow;
use serde::Serialize;

/// Aggregate sums over a (possibly filtered) set of rows, plus the row
/// count. Derived fresh on demand, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
    pub tests: u64,
    pub population: u64,
    pub count: usize,
}

/// Sums the six numeric columns and counts rows. Zero rows yield the
/// all-zero summary, never an error. u64 arithmetic keeps population
/// totals exact well past the 32-bit range.
pub fn summarize<'a, I>(rows: I) -> Summary
where
    I: IntoIterator<Item = &'a CountryRow>,
{
    let mut summary = Summary::default();
    for row in rows {
        summary.cases += row.cases;
        summary.deaths += row.deaths;
        summary.recovered += row.recovered;
        summary.active += row.active;
        summary.tests += row.tests;
        summary.population += row.population;
        summary.count += 1;
    }
    summary
}
