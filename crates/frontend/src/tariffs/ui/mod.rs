use contracts::subject_area::SubjectArea;
use contracts::tariff::TariffRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::date_utils::today_iso;
use crate::shared::storage::LocalStore;
use crate::tariffs::api;
use crate::tariffs::filters::FilterValues;
use crate::tariffs::state::{FetchState, FetchTrigger};

/// Render an optional text field, "–" when absent.
fn text_or_dash(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => "–".to_string(),
    }
}

/// Render an optional amount/number field, "–" when absent.
/// Whole numbers drop the fraction, others keep two decimals with a
/// Norwegian decimal comma.
fn number_or_dash(value: &Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", *v as i64),
        Some(v) => format!("{:.2}", v).replace('.', ","),
        None => "–".to_string(),
    }
}

#[component]
pub fn TariffLookupPage() -> impl IntoView {
    let store = LocalStore;
    let filters = RwSignal::new(FilterValues::load(&store, today_iso()));
    let state = RwSignal::new(FetchState::default());

    let load = move |trigger: FetchTrigger| {
        let query = filters.with_untracked(|f| f.to_query());
        state.update(|s| s.begin());
        let generation = state.with_untracked(|s| s.generation());
        log::debug!("{:?}: GET {}", trigger, query.build_url());

        spawn_local(async move {
            let applied = match api::fetch_tariffs(&query).await {
                Ok(records) => state
                    .try_update(|s| s.apply_success(generation, records))
                    .unwrap_or(false),
                Err(e) => state
                    .try_update(|s| s.apply_error(generation, e))
                    .unwrap_or(false),
            };
            if !applied {
                log::debug!("discarded stale response, generation {}", generation);
            }
        });
    };

    // Editing a field persists it immediately but never fetches; only the
    // submit button (and the initial load below) fires a request.
    let edit = move |apply: &dyn Fn(&mut FilterValues)| {
        filters.update(|f| apply(f));
        filters.with_untracked(|f| f.persist(&store));
    };

    let on_area_change = Callback::new(move |code: String| {
        edit(&|f| f.subject_area = SubjectArea::from_str(&code));
    });
    let on_date_change = move |date: String| {
        edit(&move |f| f.valid_date = date.clone());
    };
    let on_today_click = Callback::new(move |_| {
        edit(&|f| f.valid_date = today_iso());
    });
    let on_code_input = Callback::new(move |code: String| {
        edit(&move |f| f.tariff_code = code.clone());
    });
    let on_description_input = Callback::new(move |text: String| {
        edit(&move |f| f.description = text.clone());
    });
    let on_submit = Callback::new(move |_| load(FetchTrigger::UserSubmit));

    let area_options: Vec<(String, String)> = SubjectArea::all()
        .into_iter()
        .map(|a| (a.as_str().to_string(), a.display_name().to_string()))
        .collect();

    load(FetchTrigger::InitialLoad);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Takster hentet fra Helsedirektoratets API"</h1>
                    <p class="header__disclaimer">
                        "Dette er " <em>"IKKE"</em> " et offisielt nettsted for Helsedirektoratet, \
                         og det har ingen tilknytning til Helsedirektoratet."
                    </p>
                </div>
            </div>

            <div class="filter-form">
                <Select
                    id="subject-area-select"
                    label="Fagområde"
                    value=Signal::derive(move || filters.with(|f| f.subject_area.as_str().to_string()))
                    on_change=on_area_change
                    options=area_options
                />

                <div class="form__group">
                    <label class="form__label" for="valid-date-input">"Gyldig dato"</label>
                    <div class="form__row">
                        <DateInput
                            id="valid-date-input"
                            value=Signal::derive(move || filters.with(|f| f.valid_date.clone()))
                            on_change=on_date_change
                        />
                        <Button variant="secondary" on_click=on_today_click>
                            "Dagens dato"
                        </Button>
                    </div>
                    <span class="form__hint">
                        <em>"Filtrerer takstene til kun de som er gyldig på en gitt dato. Dato på formatet yyyy-MM-dd."</em>
                    </span>
                </div>

                <Input
                    id="tariff-code-input"
                    label="Takstkode"
                    value=Signal::derive(move || filters.with(|f| f.tariff_code.clone()))
                    on_input=on_code_input
                    hint="Filtrer takstene til koder som inneholder teksten, kan kombineres med de andre parametrene eller brukes alene."
                />

                <Input
                    id="description-input"
                    label="Beskrivelse"
                    value=Signal::derive(move || filters.with(|f| f.description.clone()))
                    on_input=on_description_input
                    hint="Fritekstsøk i takstbeskrivelsene."
                />

                <div class="filter-form__actions">
                    <Button on_click=on_submit disabled=Signal::derive(move || state.with(|s| s.is_loading))>
                        "Hent takster"
                    </Button>
                </div>
            </div>

            {move || {
                if state.with(|s| s.is_loading) {
                    view! {
                        <div class="loading-indicator">
                            <span>"Henter takster..."</span>
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || {
                let count = state.with(|s| s.items.len());
                view! {
                    <p class="result-count">{format!("{} takster", count)}</p>
                }
            }}

            <TariffTable items=Signal::derive(move || state.with(|s| s.items.clone())) />
            <TariffCards items=Signal::derive(move || state.with(|s| s.items.clone())) />
        </div>
    }
}

/// The results as a plain table, one row per record, in the order the
/// sort stage produced.
#[component]
fn TariffTable(#[prop(into)] items: Signal<Vec<TariffRecord>>) -> impl IntoView {
    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Takstkode"</th>
                        <th class="table__header-cell">"Fagområde"</th>
                        <th class="table__header-cell">"Fra dato"</th>
                        <th class="table__header-cell">"Til dato"</th>
                        <th class="table__header-cell">"Honorar"</th>
                        <th class="table__header-cell">"Refusjon"</th>
                        <th class="table__header-cell">"Pasient egenbetaling"</th>
                        <th class="table__header-cell">"Repetisjonsprosent"</th>
                        <th class="table__header-cell">"Ugyldig kombinasjon"</th>
                        <th class="table__header-cell">"Tidsbruk per rep"</th>
                        <th class="table__header-cell">"Beskrivelse"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().enumerate().map(|(index, row)| {
                        view! {
                            <tr class="table__row" id=row_key(&row, index)>
                                <td class="table__cell">{text_or_dash(&row.takstkode)}</td>
                                <td class="table__cell">{text_or_dash(&row.fagomraade)}</td>
                                <td class="table__cell">{text_or_dash(&row.fradato)}</td>
                                <td class="table__cell">{text_or_dash(&row.tildato)}</td>
                                <td class="table__cell table__cell--number">{number_or_dash(&row.honorar)}</td>
                                <td class="table__cell table__cell--number">{number_or_dash(&row.refusjon)}</td>
                                <td class="table__cell table__cell--number">{number_or_dash(&row.pasient_egenbetaling)}</td>
                                <td class="table__cell table__cell--number">{number_or_dash(&row.repetisjonsprosent)}</td>
                                <td class="table__cell">{text_or_dash(&row.ugyldig_kombinasjon)}</td>
                                <td class="table__cell table__cell--number">{number_or_dash(&row.tidsbruk_per_rep)}</td>
                                <td class="table__cell">{text_or_dash(&row.beskrivelse)}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// The same records as cards, for narrow screens. Which of the two views
/// is visible is decided purely by the stylesheet.
#[component]
fn TariffCards(#[prop(into)] items: Signal<Vec<TariffRecord>>) -> impl IntoView {
    view! {
        <div class="tariff-cards">
            {move || items.get().into_iter().enumerate().map(|(index, row)| {
                view! {
                    <div class="tariff-card" id=format!("card-{}", row_key(&row, index))>
                        <div class="tariff-card__header">
                            <span class="tariff-card__code">{text_or_dash(&row.takstkode)}</span>
                            <span class="tariff-card__area">{text_or_dash(&row.fagomraade)}</span>
                        </div>
                        <div class="tariff-card__body">
                            <CardField label="Gyldig" value=format!("{} – {}", text_or_dash(&row.fradato), text_or_dash(&row.tildato)) />
                            <CardField label="Honorar" value=number_or_dash(&row.honorar) />
                            <CardField label="Refusjon" value=number_or_dash(&row.refusjon) />
                            <CardField label="Pasient egenbetaling" value=number_or_dash(&row.pasient_egenbetaling) />
                            <CardField label="Repetisjonsprosent" value=number_or_dash(&row.repetisjonsprosent) />
                            <CardField label="Ugyldig kombinasjon" value=text_or_dash(&row.ugyldig_kombinasjon) />
                            <CardField label="Tidsbruk per rep" value=number_or_dash(&row.tidsbruk_per_rep) />
                        </div>
                        <p class="tariff-card__description">{text_or_dash(&row.beskrivelse)}</p>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn CardField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="tariff-card__field">
            <span class="tariff-card__label">{label}</span>
            <span class="tariff-card__value">{value}</span>
        </div>
    }
}

/// Stable per-record identifier: the registry's takst_id when present,
/// the row index otherwise.
fn row_key(record: &TariffRecord, index: usize) -> String {
    match record.takst_id {
        Some(id) => format!("takst-{}", id),
        None => format!("rad-{}", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_render_as_dash() {
        assert_eq!(text_or_dash(&None), "–");
        assert_eq!(text_or_dash(&Some(String::new())), "–");
        assert_eq!(text_or_dash(&Some("2ad".to_string())), "2ad");
        assert_eq!(number_or_dash(&None), "–");
    }

    #[test]
    fn numbers_use_norwegian_decimal_comma() {
        assert_eq!(number_or_dash(&Some(350.0)), "350");
        assert_eq!(number_or_dash(&Some(50.5)), "50,50");
    }

    #[test]
    fn row_key_prefers_takst_id() {
        let record = TariffRecord {
            takst_id: Some(42),
            ..Default::default()
        };
        assert_eq!(row_key(&record, 7), "takst-42");
        assert_eq!(row_key(&TariffRecord::default(), 7), "rad-7");
    }
}
