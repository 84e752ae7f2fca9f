//! Static translation tables for the four supported languages.
//!
//! Labels here are presentation only. Filtering works on raw dataset keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::difficulty::Difficulty;

/// UI language. English is the fallback for missing entries.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    It,
    Fr,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::De, Language::It, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::It => "it",
            Language::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }

    /// BCP 47 tag used for date formatting.
    pub fn date_locale(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::De => "de-DE",
            Language::It => "it-IT",
            Language::Fr => "fr-FR",
        }
    }

    /// Name of the language in that language, for the switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
            Language::It => "Italiano",
            Language::Fr => "Français",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One string in every supported language.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Translation {
    pub en: &'static str,
    pub de: &'static str,
    pub it: &'static str,
    pub fr: &'static str,
}

impl Translation {
    pub const fn new(
        en: &'static str,
        de: &'static str,
        it: &'static str,
        fr: &'static str,
    ) -> Self {
        Self { en, de, it, fr }
    }

    /// Text for `language`, falling back to English when the entry is empty.
    pub fn get(&self, language: Language) -> &'static str {
        let text = match language {
            Language::En => self.en,
            Language::De => self.de,
            Language::It => self.it,
            Language::Fr => self.fr,
        };
        if text.is_empty() {
            self.en
        } else {
            text
        }
    }
}

pub const LOADING_MAP: Translation = Translation::new(
    "Loading map...",
    "Karte wird geladen...",
    "Caricamento mappa...",
    "Chargement de la carte...",
);
pub const LOCATION_FILTERS: Translation = Translation::new(
    "Location Filters",
    "Standortfilter",
    "Filtri località",
    "Filtres de lieu",
);
pub const RESET_FILTERS: Translation =
    Translation::new("Reset", "Zurücksetzen", "Reimposta", "Réinitialiser");
pub const EDITORS_CHOICE: Translation = Translation::new(
    "Editor's Choice",
    "Empfehlung der Redaktion",
    "Scelta della redazione",
    "Choix de la rédaction",
);
pub const ONLY_SWITZERLAND: Translation =
    Translation::new("Switzerland", "Schweiz", "Svizzera", "Suisse");
pub const ONLY_GRAUBUNDEN: Translation =
    Translation::new("Graubünden", "Graubünden", "Grigioni", "Grisons");
pub const HEIGHT: Translation = Translation::new("Height", "Höhe", "Altezza", "Hauteur");
pub const DIFFICULTY: Translation =
    Translation::new("Difficulty", "Grad", "Difficoltà", "Difficulté");
pub const VISIBLE_LOCATIONS: Translation = Translation::new(
    "beautiful locations in this area",
    "schöne Standorte in diesem Gebiet",
    "belle località in questa zona",
    "beaux emplacements dans cette zone",
);
pub const OPEN_SWISSTOPO: Translation = Translation::new(
    "Open SwissTopo",
    "SwissTopo öffnen",
    "Apri SwissTopo",
    "Ouvrir SwissTopo",
);
pub const NAVIGATE: Translation =
    Translation::new("Navigate", "Navigieren", "Naviga", "Naviguer");
pub const COPY_COORDINATES: Translation = Translation::new(
    "Copy coordinates",
    "Koordinaten kopieren",
    "Copia coordinate",
    "Copier les coordonnées",
);
pub const COPIED: Translation = Translation::new("Copied!", "Kopiert!", "Copiato!", "Copié !");
pub const CLOSE: Translation = Translation::new("Close", "Schließen", "Chiudi", "Fermer");
pub const VIEW_FULLSCREEN: Translation = Translation::new(
    "View fullscreen",
    "Vollbild anzeigen",
    "Schermo intero",
    "Plein écran",
);
pub const ABOVE_SEA_LEVEL: Translation = Translation::new(
    "m above sea level",
    "m ü. M.",
    "m s.l.m.",
    "m d'altitude",
);
pub const MAP_STYLE: Translation =
    Translation::new("Map style", "Kartenstil", "Stile mappa", "Style de carte");
pub const DARK_MODE: Translation =
    Translation::new("Dark mode", "Dunkelmodus", "Modalità scura", "Mode sombre");
pub const NO_LOCATIONS: Translation = Translation::new(
    "No locations in this area",
    "Keine Standorte in diesem Gebiet",
    "Nessuna località in questa zona",
    "Aucun emplacement dans cette zone",
);

/// Localized label for a difficulty level.
pub fn difficulty_label(difficulty: Difficulty, language: Language) -> &'static str {
    let translation = match difficulty {
        Difficulty::Hiking => Translation::new(
            "Hiking",
            "Wandern",
            "Escursionismo",
            "Randonnée",
        ),
        Difficulty::MountainHiking => Translation::new(
            "Mountain hiking",
            "Bergwandern",
            "Escursionismo in montagna",
            "Randonnée en montagne",
        ),
        Difficulty::DemandingMountainHiking => Translation::new(
            "Demanding mountain hiking",
            "Anspruchsvolles Bergwandern",
            "Escursionismo in montagna impegnativo",
            "Randonnée en montagne exigeante",
        ),
        Difficulty::AlpineHiking => Translation::new(
            "Alpine hiking",
            "Alpine Wanderung",
            "Escursionismo alpino",
            "Randonnée alpine",
        ),
        Difficulty::DifficultAlpineHiking => Translation::new(
            "Difficult alpine hiking",
            "Schwierige alpine Wanderung",
            "Escursionismo alpino difficile",
            "Randonnée alpine difficile",
        ),
    };
    translation.get(language)
}

/// Country names as shown in the filter panel, keyed by dataset value.
pub fn country_label(country: &str, language: Language) -> Option<&'static str> {
    let translation = match country {
        "Switzerland" => Translation::new("Switzerland", "Schweiz", "Svizzera", "Suisse"),
        "Italy" => Translation::new("Italy", "Italien", "Italia", "Italie"),
        "Austria" => Translation::new("Austria", "Österreich", "Austria", "Autriche"),
        _ => return None,
    };
    Some(translation.get(language))
}
