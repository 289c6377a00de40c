//! Query URL construction for the takstkoder endpoint.
//!
//! A [`TariffQuery`] is an immutable snapshot of the filter form taken at
//! the moment of submission; editing a field never rebuilds the URL until
//! the user submits again.

use crate::subject_area::SubjectArea;

/// Public registry endpoint (third-party, unowned).
pub const API_ENDPOINT: &str = "https://api.helsedirektoratet.no/helserefusjon/v1/takstkoder";

/// Snapshot of the filter values behind one request.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffQuery {
    pub subject_area: SubjectArea,
    /// ISO-8601 date string. Passed through unvalidated; the registry
    /// rejects malformed dates itself.
    pub valid_date: String,
    pub tariff_code: String,
    pub description: String,
}

impl TariffQuery {
    /// Build the request URL.
    ///
    /// - `fagomraade` is omitted entirely for the all-areas sentinel,
    ///   otherwise included verbatim.
    /// - `gyldigdato` and `takstkode` are always present.
    /// - Non-empty `takstkode`/`beskrivelse` values are wrapped as `*value*`
    ///   substring patterns; an empty `beskrivelse` is omitted.
    pub fn build_url(&self) -> String {
        let mut url = format!(
            "{}?gyldigdato={}&takstkode={}",
            API_ENDPOINT,
            urlencoding::encode(&self.valid_date),
            urlencoding::encode(&wildcard(&self.tariff_code)),
        );
        if !self.subject_area.is_all() {
            url.push_str(&format!("&fagomraade={}", self.subject_area.as_str()));
        }
        if !self.description.is_empty() {
            url.push_str(&format!(
                "&beskrivelse={}",
                urlencoding::encode(&wildcard(&self.description))
            ));
        }
        url
    }
}

/// Wrap a non-empty filter value as a substring-match pattern.
fn wildcard(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("*{}*", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(area: SubjectArea) -> TariffQuery {
        TariffQuery {
            subject_area: area,
            valid_date: "2026-08-23".to_string(),
            tariff_code: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn subject_area_included_verbatim() {
        let url = query(SubjectArea::Fysioterapi).build_url();
        assert!(url.contains("fagomraade=FY"));
    }

    #[test]
    fn all_areas_sentinel_omits_parameter() {
        let url = query(SubjectArea::Alle).build_url();
        assert!(!url.contains("fagomraade"));
        assert!(!url.contains("ALLE"));
    }

    #[test]
    fn date_and_code_always_present() {
        let url = query(SubjectArea::Alle).build_url();
        assert!(url.contains("gyldigdato=2026-08-23"));
        assert!(url.contains("takstkode="));
    }

    #[test]
    fn non_empty_code_wrapped_as_substring_pattern() {
        let mut q = query(SubjectArea::Lege);
        q.tariff_code = "2ad".to_string();
        let url = q.build_url();
        assert!(url.contains("takstkode=%2A2ad%2A"));
    }

    #[test]
    fn description_omitted_when_empty_wrapped_when_not() {
        let mut q = query(SubjectArea::Tannhelse);
        assert!(!q.build_url().contains("beskrivelse"));

        q.description = "konsultasjon".to_string();
        assert!(q.build_url().contains("beskrivelse=%2Akonsultasjon%2A"));
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut q = query(SubjectArea::Alle);
        q.description = "rtg ansikt/bihuler".to_string();
        let url = q.build_url();
        assert!(url.contains("beskrivelse=%2Artg%20ansikt%2Fbihuler%2A"));
    }

    #[test]
    fn invalid_date_passes_through() {
        let mut q = query(SubjectArea::Alle);
        q.valid_date = "ikke-en-dato".to_string();
        assert!(q.build_url().contains("gyldigdato=ikke-en-dato"));
    }

    #[test]
    fn identical_filters_build_identical_urls() {
        let mut q = query(SubjectArea::Poliklinikk);
        q.tariff_code = "201b".to_string();
        assert_eq!(q.build_url(), q.clone().build_url());
    }
}
