//! Tariff record model and the result ordering applied after each fetch.
//!
//! The record schema is owned by the remote registry, not by this app:
//! every field is optional and unknown fields are ignored, so the model
//! tolerates any valid payload shape the API produces.

use serde::{Deserialize, Serialize};

/// One row of the registry response. Passthrough: no validation beyond
/// JSON well-formedness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TariffRecord {
    pub takst_id: Option<i64>,
    pub takstkode: Option<String>,
    pub fagomraade: Option<String>,
    pub fradato: Option<String>,
    pub tildato: Option<String>,
    pub honorar: Option<f64>,
    pub refusjon: Option<f64>,
    pub pasient_egenbetaling: Option<f64>,
    pub repetisjonsprosent: Option<f64>,
    pub ugyldig_kombinasjon: Option<String>,
    pub tidsbruk_per_rep: Option<f64>,
    pub beskrivelse: Option<String>,
}

/// Response envelope. `takstkoder` is required: a body without it is a
/// parse error, surfaced through the normal fetch error path instead of
/// an uncaught failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TariffResponse {
    pub takstkoder: Vec<TariffRecord>,
}

/// Stable ascending sort by tariff code; records without a code sort as
/// the empty string, i.e. first. Registry codes are ASCII alphanumerics,
/// so byte order is the registry's own collation. Applied once per
/// successful fetch, never at render time.
pub fn sort_by_code(records: &mut Vec<TariffRecord>) {
    records.sort_by(|a, b| {
        a.takstkode
            .as_deref()
            .unwrap_or("")
            .cmp(b.takstkode.as_deref().unwrap_or(""))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(code: &str, id: i64) -> TariffRecord {
        TariffRecord {
            takst_id: Some(id),
            takstkode: Some(code.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn sorts_ascending_by_code() {
        let mut records = vec![rec("B2", 1), rec("A1", 2)];
        sort_by_code(&mut records);
        let codes: Vec<_> = records.iter().map(|r| r.takstkode.clone().unwrap()).collect();
        assert_eq!(codes, ["A1", "B2"]);
    }

    #[test]
    fn sort_is_stable_for_equal_codes() {
        let mut records = vec![rec("K1", 10), rec("A5", 30), rec("K1", 20)];
        sort_by_code(&mut records);
        let ids: Vec<_> = records.iter().map(|r| r.takst_id.unwrap()).collect();
        assert_eq!(ids, [30, 10, 20]);
    }

    #[test]
    fn missing_code_sorts_first() {
        let mut records = vec![rec("A1", 1), TariffRecord::default()];
        sort_by_code(&mut records);
        assert!(records[0].takstkode.is_none());
    }

    #[test]
    fn output_is_non_decreasing() {
        let mut records = vec![rec("H3", 1), rec("A1", 2), rec("ZZ", 3), rec("201b", 4)];
        sort_by_code(&mut records);
        for pair in records.windows(2) {
            assert!(pair[0].takstkode <= pair[1].takstkode);
        }
    }

    #[test]
    fn parses_partial_record_with_unknown_fields() {
        let json = r#"{
            "takstkoder": [
                {"takstkode": "2ad", "honorar": 155.0, "nytt_felt": true},
                {"takst_id": 42}
            ]
        }"#;
        let resp: TariffResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.takstkoder.len(), 2);
        assert_eq!(resp.takstkoder[0].takstkode.as_deref(), Some("2ad"));
        assert_eq!(resp.takstkoder[0].honorar, Some(155.0));
        assert!(resp.takstkoder[0].fradato.is_none());
        assert_eq!(resp.takstkoder[1].takst_id, Some(42));
    }

    #[test]
    fn parses_full_record() {
        let json = r#"{
            "takstkoder": [{
                "takst_id": 7,
                "takstkode": "W1",
                "fagomraade": "PO",
                "fradato": "2024-01-01",
                "tildato": "2024-12-31",
                "honorar": 350.5,
                "refusjon": 300.0,
                "pasient_egenbetaling": 50.5,
                "repetisjonsprosent": 50.0,
                "ugyldig_kombinasjon": "W2,W3",
                "tidsbruk_per_rep": 15.0,
                "beskrivelse": "Poliklinisk konsultasjon"
            }]
        }"#;
        let resp: TariffResponse = serde_json::from_str(json).unwrap();
        let r = &resp.takstkoder[0];
        assert_eq!(r.fagomraade.as_deref(), Some("PO"));
        assert_eq!(r.ugyldig_kombinasjon.as_deref(), Some("W2,W3"));
        assert_eq!(r.tidsbruk_per_rep, Some(15.0));
    }

    #[test]
    fn missing_takstkoder_array_is_a_parse_error() {
        assert!(serde_json::from_str::<TariffResponse>("{}").is_err());
        assert!(serde_json::from_str::<TariffResponse>(r#"{"feil": "oops"}"#).is_err());
    }
}
