use dioxus::prelude::*;

use crate::components::{NoticeBanner, SortPanel, TimelineModal, TurnusCardView};
use crate::core::{platform, scroll};
use crate::sorting::{extract_entries, Criterion, SortEngine};
use crate::state::AppState;
use crate::t;

/// Route path, also the suffix of the saved scroll position key.
pub const TURNUSLISTE_ROUTE: &str = "/turnusliste";

#[component]
pub fn Turnusliste() -> Element {
    let state = use_context::<AppState>();
    let cards = state.cards;

    let mut engine = use_signal({
        let store = state.store.clone();
        move || SortEngine::new(extract_entries(&cards.peek()), store)
    });

    use_effect({
        let store = state.store.clone();
        move || {
            if let Some(y) = scroll::restore_position(store.as_ref(), TURNUSLISTE_ROUTE) {
                platform::scroll_to(y);
            }
        }
    });
    use_drop({
        let store = state.store.clone();
        move || {
            if let Some(y) = platform::scroll_y() {
                if let Err(err) = scroll::save_position(store.as_ref(), TURNUSLISTE_ROUTE, y) {
                    tracing::debug!(%err, "scroll position not saved");
                }
            }
        }
    });

    // Slider changes persist in the background; a failed save only logs.
    let on_change = move |(criterion, weight): (Criterion, f64)| {
        if let Err(err) = engine.write().set_weight(criterion, weight) {
            tracing::debug!(%err, ?criterion, "slider weight kept in memory only");
        }
    };
    let mut notice = state.notice;
    let on_reset = move |_: ()| {
        if let Err(err) = engine.write().reset() {
            notice.set(Some(t!("sort-reset-error", error = err.to_string())));
        }
    };

    let cards_now = cards.read();
    let positions = engine.read().display_positions(cards_now.len());
    let weights = engine.read().weights().clone();
    let count = cards_now.len();
    let set_name = state.set_name.clone();

    rsx! {
        section { class: "page page-turnusliste",
            h1 { "{set_name}" }
            p { class: "results-card__meta", {t!("list-count", count = count)} }
            if let Some(err) = state.load_error.clone() {
                p { class: "results-card__meta results-card__meta--error", {t!("list-load-error", error = err)} }
            }
            NoticeBanner {}

            SortPanel { weights, on_change, on_reset }

            ul { class: "list-group turnus-list",
                for position in positions {
                    if let Some(card) = cards_now.get(position) {
                        TurnusCardView {
                            key: "{position}",
                            card: card.clone(),
                            turnus_set_id: state.turnus_set_id,
                        }
                    }
                }
            }
            TimelineModal {}
        }
    }
}
