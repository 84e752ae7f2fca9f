//! Shared utility functions for GPM crates.

/// Photo capture date helpers
pub mod dates {
    use chrono::{Datelike, NaiveDate};
    use gpm_core::i18n::Language;

    /// Date format used in `locations.json`: "DD-MM-YYYY"
    pub const PHOTO_DATE_FORMAT: &str = "%d-%m-%Y";

    const MONTHS_EN: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    const MONTHS_DE: [&str; 12] = [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ];
    const MONTHS_IT: [&str; 12] = [
        "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
        "settembre", "ottobre", "novembre", "dicembre",
    ];
    const MONTHS_FR: [&str; 12] = [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ];

    /// Parse a date string in "DD-MM-YYYY" format
    pub fn parse_photo_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), PHOTO_DATE_FORMAT)?)
    }

    /// Long-form date in the conventions of `language`.
    ///
    /// en: "June 15, 2023", de: "15. Juni 2023", it: "15 giugno 2023",
    /// fr: "15 juin 2023"
    pub fn format_long_date(date: &NaiveDate, language: Language) -> String {
        let month = date.month0() as usize;
        let day = date.day();
        let year = date.year();
        match language {
            Language::En => format!("{} {}, {}", MONTHS_EN[month], day, year),
            Language::De => format!("{}. {} {}", day, MONTHS_DE[month], year),
            Language::It => format!("{} {} {}", day, MONTHS_IT[month], year),
            Language::Fr => format!("{} {} {}", day, MONTHS_FR[month], year),
        }
    }

    /// Caption under the photo, e.g. "Picture taken June 15, 2023 at 10:42".
    ///
    /// A date that does not parse is shown as given.
    pub fn capture_caption(date: &str, time: &str, language: Language) -> String {
        let formatted = match parse_photo_date(date) {
            Ok(d) => format_long_date(&d, language),
            Err(_) => date.to_string(),
        };
        match language {
            Language::En => format!("Picture taken {} at {}", formatted, time),
            Language::De => format!("Bild aufgenommen {} um {}", formatted, time),
            Language::It => format!("Foto scattata {} alle {}", formatted, time),
            Language::Fr => format!("Photo prise {} à {}", formatted, time),
        }
    }

}
