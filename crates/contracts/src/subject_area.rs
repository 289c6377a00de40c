//! Subject areas (fagområder) of the Helsedirektoratet tariff registry.
//!
//! The registry partitions tariff codes into coded service contexts
//! (physiotherapy, dentistry, ...). The list below is the full set the
//! public API accepts, plus the `Alle` sentinel meaning "no area filter".

/// A coded subject area, or `Alle` for "all areas".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubjectArea {
    Alle,
    Audiopedagog,
    Behandlingsreiser,
    FrittBehandlingsvalg,
    Fysioterapi,
    Helsestasjon,
    Jordmor,
    Kiropraktor,
    Lege,
    Logoped,
    LabRadiologi,
    Ortoptist,
    #[default]
    Poliklinikk,
    Psykolog,
    Primaerhelseteam,
    Rehabilitering,
    Tannhelse,
    Tannpleier,
}

impl SubjectArea {
    /// Registry code as sent in the `fagomraade` query parameter
    /// (and stored in localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectArea::Alle => "ALLE",
            SubjectArea::Audiopedagog => "AP",
            SubjectArea::Behandlingsreiser => "BE",
            SubjectArea::FrittBehandlingsvalg => "FBV",
            SubjectArea::Fysioterapi => "FY",
            SubjectArea::Helsestasjon => "HS",
            SubjectArea::Jordmor => "JO",
            SubjectArea::Kiropraktor => "KI",
            SubjectArea::Lege => "LE",
            SubjectArea::Logoped => "LOGO",
            SubjectArea::LabRadiologi => "LR",
            SubjectArea::Ortoptist => "OR",
            SubjectArea::Poliklinikk => "PO",
            SubjectArea::Psykolog => "PS",
            SubjectArea::Primaerhelseteam => "PT",
            SubjectArea::Rehabilitering => "RE",
            SubjectArea::Tannhelse => "TH",
            SubjectArea::Tannpleier => "TP",
        }
    }

    /// Norwegian display name for the UI option list.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubjectArea::Alle => "Alle",
            SubjectArea::Audiopedagog => "Audiopedagog",
            SubjectArea::Behandlingsreiser => "Behandlingsreiser i utlandet",
            SubjectArea::FrittBehandlingsvalg => "Fritt behandlingsvalg",
            SubjectArea::Fysioterapi => "Fysioterapi",
            SubjectArea::Helsestasjon => "Helsestasjon",
            SubjectArea::Jordmor => "Jordmor",
            SubjectArea::Kiropraktor => "Kiropraktor",
            SubjectArea::Lege => "Lege",
            SubjectArea::Logoped => "Logoped",
            SubjectArea::LabRadiologi => "Private lab/radiologi",
            SubjectArea::Ortoptist => "Ortoptist",
            SubjectArea::Poliklinikk => "Poliklinikk",
            SubjectArea::Psykolog => "Psykolog",
            SubjectArea::Primaerhelseteam => "Primærhelseteam",
            SubjectArea::Rehabilitering => "Rehabiliteringsinstitusjon",
            SubjectArea::Tannhelse => "Tannhelse",
            SubjectArea::Tannpleier => "Tannpleier",
        }
    }

    /// Parse a registry code. Unknown codes fall back to the default area,
    /// so a stale or foreign persisted value never breaks startup.
    pub fn from_str(s: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|a| a.as_str() == s)
            .unwrap_or_default()
    }

    /// All areas in UI option order: the sentinel first, then the coded
    /// areas alphabetically by code.
    pub fn all() -> [SubjectArea; 18] {
        [
            SubjectArea::Alle,
            SubjectArea::Audiopedagog,
            SubjectArea::Behandlingsreiser,
            SubjectArea::FrittBehandlingsvalg,
            SubjectArea::Fysioterapi,
            SubjectArea::Helsestasjon,
            SubjectArea::Jordmor,
            SubjectArea::Kiropraktor,
            SubjectArea::Lege,
            SubjectArea::Logoped,
            SubjectArea::LabRadiologi,
            SubjectArea::Ortoptist,
            SubjectArea::Poliklinikk,
            SubjectArea::Psykolog,
            SubjectArea::Primaerhelseteam,
            SubjectArea::Rehabilitering,
            SubjectArea::Tannhelse,
            SubjectArea::Tannpleier,
        ]
    }

    /// True for the "all areas" sentinel, which is never sent to the API.
    pub fn is_all(&self) -> bool {
        matches!(self, SubjectArea::Alle)
    }
}
