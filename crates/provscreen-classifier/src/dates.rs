//! Strict comparisons over optional dates
//!
//! A missing date never satisfies a comparison.

use provscreen_domain::HistoricDate;

pub(crate) fn after(date: Option<HistoricDate>, bound: HistoricDate) -> bool {
    date.is_some_and(|d| d > bound)
}

pub(crate) fn before(date: Option<HistoricDate>, bound: HistoricDate) -> bool {
    date.is_some_and(|d| d < bound)
}
