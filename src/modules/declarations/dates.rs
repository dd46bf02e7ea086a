use chrono::{Datelike, Locale, NaiveDate};

/// Date values available to templates, computed once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateContext {
    /// Long Brazilian Portuguese date, e.g. `05 de março de 2024`
    pub current_date: String,
    pub current_year: String,
    pub previous_year: String,
}

impl DateContext {
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            current_date: today
                .format_localized("%d de %B de %Y", Locale::pt_BR)
                .to_string(),
            current_year: today.year().to_string(),
            previous_year: (today.year() - 1).to_string(),
        }
    }
}
