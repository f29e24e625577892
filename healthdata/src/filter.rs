//! Cascading equality filters over the dataset, modeled as pure
//! functions of (dataset, filter state) so they are testable without
//! any rendering layer.

use crate::types::{CountryRow, Dataset};
use serde::Deserialize;
use std::collections::BTreeSet;

/// Filterable categorical columns. `Continent` is upstream of
/// `Country`: selecting a continent narrows the country options.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Continent,
    Country,
}

/// Selected filter values; `None` on a dimension means no constraint.
///
/// Invariant: a state with any selection set matches at least one row
/// of the dataset it was reconciled against. [`FilterState::reconcile`]
/// restores the invariant after an upstream change invalidates a
/// downstream selection.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    pub continent: Option<String>,
    pub country: Option<String>,
}

impl FilterState {
    fn matches(&self, row: &CountryRow) -> bool {
        self.continent.as_deref().is_none_or(|c| row.continent == c)
            && self.country.as_deref().is_none_or(|c| row.country == c)
    }

    /// Sets or clears one dimension, then drops any selection the new
    /// constraint invalidates.
    pub fn select(&mut self, dataset: &Dataset, dimension: Dimension, value: Option<String>) {
        match dimension {
            Dimension::Continent => self.continent = value,
            Dimension::Country => self.country = value,
        }
        self.reconcile(dataset);
    }

    /// Clears selections until the state matches at least one row.
    /// Downstream selections go first; a fully unset state is always
    /// consistent.
    pub fn reconcile(&mut self, dataset: &Dataset) {
        if self.country.is_some() && apply(dataset, self).is_empty() {
            self.country = None;
        }
        if self.continent.is_some() && apply(dataset, self).is_empty() {
            self.continent = None;
        }
    }
}

/// Distinct values available for `dimension`, constrained by the
/// selections on the *other* dimensions only. This is what makes the
/// filters cascade: with a continent selected, country options shrink
/// to that continent, while continent options themselves stay
/// switchable.
///
/// Empty continent strings (unclassified territories) are not offered
/// as options.
pub fn options(dataset: &Dataset, dimension: Dimension, state: &FilterState) -> BTreeSet<String> {
    let mut constraint = state.clone();
    match dimension {
        Dimension::Continent => constraint.continent = None,
        Dimension::Country => constraint.country = None,
    }

    dataset
        .rows
        .iter()
        .filter(|row| constraint.matches(row))
        .filter_map(|row| match dimension {
            Dimension::Continent if row.continent.is_empty() => None,
            Dimension::Continent => Some(row.continent.clone()),
            Dimension::Country => Some(row.country.clone()),
        })
        .collect()
}

/// Rows matching every set constraint, AND-combined, in dataset order.
/// Pure: no hidden state, identical inputs give identical output.
pub fn apply<'a>(dataset: &'a Dataset, state: &FilterState) -> Vec<&'a CountryRow> {
    dataset.rows.iter().filter(|row| state.matches(row)).collect()
}
