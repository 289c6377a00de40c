//! Fetch lifecycle state for the tariff list.
//!
//! One logical request cycle: `begin` marks loading and issues a new
//! request generation, `apply_success`/`apply_error` resolve it. Responses
//! carry the generation they were issued under; anything but the latest
//! generation is discarded, so overlapping submits can never apply out of
//! order. Kept free of signals so the transitions test on the host.

use contracts::tariff::{sort_by_code, TariffRecord};

/// What caused a fetch: the automatic load on mount, or the user pressing
/// the submit button. Same entry point either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    InitialLoad,
    UserSubmit,
}

/// Tri-state fetch result container. Exactly one of loading/success/error
/// is current; `items` always holds the last successfully fetched list.
#[derive(Debug, Clone, Default)]
pub struct FetchState {
    pub items: Vec<TariffRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl FetchState {
    /// Start a request cycle: loading on, previous error cleared, next
    /// generation issued. Prior items stay visible while loading.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
        self.generation += 1;
    }

    /// Generation of the most recently issued request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a successful response issued under `generation`. The payload
    /// is sorted by tariff code here, before it is stored, so renders
    /// never re-sort. Returns false for a stale response, which changes
    /// nothing.
    pub fn apply_success(&mut self, generation: u64, mut records: Vec<TariffRecord>) -> bool {
        if generation != self.generation {
            return false;
        }
        sort_by_code(&mut records);
        self.items = records;
        self.is_loading = false;
        self.error = None;
        true
    }

    /// Apply a failed response issued under `generation`. Last-good items
    /// are retained. Returns false for a stale response.
    pub fn apply_error(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.is_loading = false;
        self.error = Some(message);
        true
    }
}
