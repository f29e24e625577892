use crate::normalize::normalize;
use crate::types::{Dataset, RawRecord};

/// Stub API body with two records whose sums are easy to check by hand.
pub const TWO_RECORDS_JSON: &str = r#"[
    {"country": "A", "continent": "X", "cases": 10, "deaths": 1, "recovered": 5,
     "active": 4, "tests": 100, "population": 1000,
     "countryInfo": {"iso2": "AA", "lat": 0.0, "long": 0.0}},
    {"country": "B", "continent": "X", "cases": 20, "deaths": 2, "recovered": 10,
     "active": 8, "tests": 200, "population": 2000,
     "countryInfo": {"iso2": "BB", "lat": 0.0, "long": 0.0}}
]"#;

fn record(country: &str, continent: &str, cases: u64, population: u64) -> RawRecord {
    RawRecord {
        country: country.into(),
        continent: continent.into(),
        cases,
        deaths: cases / 10,
        recovered: cases / 2,
        active: cases - cases / 10 - cases / 2,
        tests: cases * 10,
        population,
    }
}

pub fn sample_records() -> Vec<RawRecord> {
    vec![
        record("Germany", "Europe", 100, 83_000_000),
        record("France", "Europe", 200, 67_000_000),
        record("Brazil", "South America", 300, 212_000_000),
        record("Japan", "Asia", 400, 125_000_000),
    ]
}

pub fn sample_dataset() -> Dataset {
    normalize(sample_records()).expect("sample records normalize")
}
