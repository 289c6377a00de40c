use contracts::query::TariffQuery;
use contracts::tariff::{TariffRecord, TariffResponse};
use gloo_net::http::Request;

/// Fetch tariff records for one query snapshot.
///
/// Transport failure, a non-2xx status, and a malformed body all collapse
/// into one error string; the UI shows them the same way and the user
/// retries by resubmitting. The payload is returned unsorted, ordering is
/// the state layer's job.
pub async fn fetch_tariffs(query: &TariffQuery) -> Result<Vec<TariffRecord>, String> {
    let url = query.build_url();

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: TariffResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.takstkoder)
}
