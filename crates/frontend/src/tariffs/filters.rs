//! Filter form values and their persistence.
//!
//! The four filter fields are seeded from the injected key/value store at
//! startup and written back on every edit. Persistence is a side effect of
//! editing; it never triggers a fetch. A [`contracts::query::TariffQuery`]
//! snapshot is taken only when a fetch is actually fired.

use contracts::query::TariffQuery;
use contracts::subject_area::SubjectArea;

use crate::shared::storage::KeyValueStore;

pub const KEY_SUBJECT_AREA: &str = "takstsok.fagomraade";
pub const KEY_VALID_DATE: &str = "takstsok.gyldigdato";
pub const KEY_TARIFF_CODE: &str = "takstsok.takstkode";
pub const KEY_DESCRIPTION: &str = "takstsok.beskrivelse";

/// Current values of the filter form.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterValues {
    pub subject_area: SubjectArea,
    pub valid_date: String,
    pub tariff_code: String,
    pub description: String,
}

impl FilterValues {
    /// Initial values for a fresh session: default area, the given date
    /// (normally today), empty text filters.
    pub fn defaults(today: String) -> Self {
        Self {
            subject_area: SubjectArea::default(),
            valid_date: today,
            tariff_code: String::new(),
            description: String::new(),
        }
    }

    /// Seed from the store; missing or unreadable keys fall back to the
    /// defaults silently. An unknown persisted area code becomes the
    /// default area (see `SubjectArea::from_str`).
    pub fn load(store: &dyn KeyValueStore, today: String) -> Self {
        let defaults = Self::defaults(today);
        Self {
            subject_area: store
                .get(KEY_SUBJECT_AREA)
                .map(|s| SubjectArea::from_str(&s))
                .unwrap_or(defaults.subject_area),
            valid_date: store.get(KEY_VALID_DATE).unwrap_or(defaults.valid_date),
            tariff_code: store.get(KEY_TARIFF_CODE).unwrap_or(defaults.tariff_code),
            description: store.get(KEY_DESCRIPTION).unwrap_or(defaults.description),
        }
    }

    /// Write all four keys. Called synchronously after each edit.
    pub fn persist(&self, store: &dyn KeyValueStore) {
        store.set(KEY_SUBJECT_AREA, self.subject_area.as_str());
        store.set(KEY_VALID_DATE, &self.valid_date);
        store.set(KEY_TARIFF_CODE, &self.tariff_code);
        store.set(KEY_DESCRIPTION, &self.description);
    }

    /// Snapshot the current values for one request.
    pub fn to_query(&self) -> TariffQuery {
        TariffQuery {
            subject_area: self.subject_area,
            valid_date: self.valid_date.clone(),
            tariff_code: self.tariff_code.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn fresh_store_yields_defaults() {
        let store = MemoryStore::new();
        let values = FilterValues::load(&store, "2026-08-23".to_string());
        assert_eq!(values, FilterValues::defaults("2026-08-23".to_string()));
        assert_eq!(values.subject_area, SubjectArea::Poliklinikk);
    }

    #[test]
    fn four_keys_round_trip_into_a_fresh_session() {
        let store = MemoryStore::new();
        let session_one = FilterValues {
            subject_area: SubjectArea::Kiropraktor,
            valid_date: "2025-01-15".to_string(),
            tariff_code: "K1".to_string(),
            description: "behandling".to_string(),
        };
        session_one.persist(&store);

        // A fresh session reading the same store sees the same values,
        // today's date notwithstanding.
        let session_two = FilterValues::load(&store, "2026-08-23".to_string());
        assert_eq!(session_two, session_one);
    }

    #[test]
    fn unknown_persisted_area_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set(KEY_SUBJECT_AREA, "utgått-kode");
        let values = FilterValues::load(&store, "2026-08-23".to_string());
        assert_eq!(values.subject_area, SubjectArea::Poliklinikk);
    }

    #[test]
    fn snapshot_matches_current_values() {
        let values = FilterValues {
            subject_area: SubjectArea::Alle,
            valid_date: "2026-08-23".to_string(),
            tariff_code: "2ad".to_string(),
            description: String::new(),
        };
        let query = values.to_query();
        assert_eq!(query.subject_area, SubjectArea::Alle);
        assert_eq!(query.tariff_code, "2ad");
        // Same values snapshot to the same URL (idempotent resubmission).
        assert_eq!(query.build_url(), values.to_query().build_url());
    }
}
