//! The historical risk window and the geography that matters inside it

use chrono::NaiveDate;

/// Calendar date used for every ownership bound
pub type HistoricDate = NaiveDate;

/// First day of the risk window
pub const ERA_START: HistoricDate = match NaiveDate::from_ymd_opt(1932, 1, 1) {
    Some(date) => date,
    None => panic!("invalid era start"),
};

/// Last boundary of the risk window
///
/// Bounds are compared strictly: a period starting on this exact day is not
/// "after" the era.
pub const ERA_END: HistoricDate = match NaiveDate::from_ymd_opt(1946, 1, 1) {
    Some(date) => date,
    None => panic!("invalid era end"),
};

/// Countries treated as geographically relevant to looting risk
pub const EUROPEAN_COUNTRIES: [&str; 50] = [
    "Albania",
    "Andorra",
    "Austria",
    "Belarus",
    "Belgium",
    "Bosnia and Herzegovina",
    "Bulgaria",
    "Croatia",
    "Czech Republic",
    "Denmark",
    "Estonia",
    "Faroe Islands",
    "Finland",
    "France",
    "Germany",
    "Gibraltar",
    "Greece",
    "Guernsey",
    "Hungary",
    "Isle of Man",
    "Jersey",
    "Italy",
    "Kosovo",
    "Latvia",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Moldova",
    "Monaco",
    "Montenegro",
    "Netherlands",
    "Norway",
    "Poland",
    "Portugal",
    "Republic of Macedonia",
    "Romania",
    "Russia",
    "San Marino",
    "Serbia",
    "Slovakia",
    "Slovenia",
    "Spain",
    "Sweden",
    "Switzerland",
    "Ukraine",
    "United Kingdom",
    "Vatican City",
    "Republic of Ireland",
    "Iceland",
];

/// Whether a resolved country name belongs to the European set
///
/// Matching is exact; resolvers are expected to return canonical names.
pub fn is_european(country: &str) -> bool {
    EUROPEAN_COUNTRIES.contains(&country)
}
