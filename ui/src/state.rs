//! State shared by every page: the loaded turnus set, the preference store
//! and the interaction handlers that talk to the server.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform::{self, Platform};
use crate::core::storage::{self, KeyValueStore};
use crate::data::{self, TurnusCard, TurnusSet};
use crate::interactions::{InteractionBus, SelectOutcome, TurnusApi};
use crate::shifts::{restyle_cells, ColorMode, ColorSettingsStore};
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub enum TimelineState {
    Closed,
    Loading { title: String },
    Ready { title: String, src: String },
    Failed { title: String, message: String },
}

#[derive(Clone)]
pub struct AppState {
    pub store: Rc<dyn KeyValueStore>,
    pub turnus_set_id: i64,
    pub set_name: String,
    pub cards: Signal<Vec<TurnusCard>>,
    pub color_mode: Signal<ColorMode>,
    pub load_error: Option<String>,
    pub timeline: Signal<TimelineState>,
    /// Last network failure, shown inline until dismissed.
    pub notice: Signal<Option<String>>,
}

impl AppState {
    fn load() -> Self {
        let store = storage::default_store();
        let (set, load_error) = match TurnusSet::embedded() {
            Ok(set) => (set, None),
            Err(err) => {
                tracing::error!(%err, "embedded turnus set is unreadable");
                (
                    TurnusSet {
                        id: 0,
                        name: String::new(),
                        turnuser: Vec::new(),
                    },
                    Some(err.to_string()),
                )
            }
        };
        tracing::info!(
            turnus = %set.name,
            cards = set.turnuser.len(),
            platform = Platform::current().as_str(),
            "turnus set loaded"
        );

        let mut cards = set.turnuser;
        let mode = restyle_cells(data::cells_mut(&mut cards), &ColorSettingsStore::new(store.clone()));

        Self {
            store,
            turnus_set_id: set.id,
            set_name: set.name,
            cards: Signal::new(cards),
            color_mode: Signal::new(mode),
            load_error,
            timeline: Signal::new(TimelineState::Closed),
            notice: Signal::new(None),
        }
    }

    pub fn color_store(&self) -> ColorSettingsStore {
        ColorSettingsStore::new(self.store.clone())
    }

    /// Repaint every card after the color preferences changed.
    pub fn restyle(&self) {
        let store = self.color_store();
        let mut cards = self.cards;
        let mut color_mode = self.color_mode;
        let mode = cards.with_mut(|cards| restyle_cells(data::cells_mut(cards), &store));
        color_mode.set(mode);
    }

    fn report(&self, message: String) {
        tracing::warn!(%message, "request failed");
        platform::alert(&message);
        let mut notice = self.notice;
        notice.set(Some(message));
    }

    async fn set_favorite(self, api: TurnusApi, shift_title: String, favorite: bool) {
        match api.toggle_favorite(&shift_title, favorite).await {
            Ok(status) if status.is_success() => {
                let mut cards = self.cards;
                cards.with_mut(|cards| data::set_favorite(cards, &shift_title, favorite));
            }
            Ok(status) => {
                let reason = status.message.unwrap_or(status.status);
                self.reject_favorite(&shift_title, t!("favorite-error", error = reason));
            }
            Err(err) => self.reject_favorite(&shift_title, t!("favorite-error", error = err.to_string())),
        }
    }

    fn reject_favorite(&self, shift_title: &str, message: String) {
        let mut cards = self.cards;
        cards.with_mut(|cards| data::reject_favorite(cards, shift_title));
        self.report(message);
    }

    async fn select(self, api: TurnusApi, shift_title: String) {
        match api.select_shift(&shift_title).await {
            Ok(SelectOutcome::Redirect(url)) => platform::navigate(&url),
            Ok(SelectOutcome::Ack(status)) if status.is_success() => {
                tracing::info!(turnus = %shift_title, "turnus selected");
            }
            Ok(SelectOutcome::Ack(status)) => {
                let reason = status.message.unwrap_or(status.status);
                self.report(t!("select-error", error = reason));
            }
            Err(err) => self.report(t!("select-error", error = err.to_string())),
        }
    }

    async fn show_timeline(self, api: TurnusApi, turnus_set_id: i64, shift_title: String) {
        let mut timeline = self.timeline;
        timeline.set(TimelineState::Loading {
            title: shift_title.clone(),
        });
        let next = match api.shift_image(turnus_set_id, &shift_title).await {
            Ok(image) => TimelineState::Ready {
                title: shift_title,
                src: image.data_url(),
            },
            Err(err) => {
                tracing::warn!(%err, turnus = %shift_title, "timeline unavailable");
                TimelineState::Failed {
                    title: shift_title,
                    message: err.to_string(),
                }
            }
        };
        timeline.set(next);
    }
}

fn interaction_bus(state: AppState, api: TurnusApi) -> InteractionBus {
    let (toggle_state, toggle_api) = (state.clone(), api.clone());
    let (remove_state, remove_api) = (state.clone(), api.clone());
    let (select_state, select_api) = (state.clone(), api.clone());
    InteractionBus::default()
        .on_toggle(move |event| {
            let task = toggle_state
                .clone()
                .set_favorite(toggle_api.clone(), event.shift_title, event.favorite);
            spawn(task);
        })
        .on_remove(move |event| {
            let task = remove_state
                .clone()
                .set_favorite(remove_api.clone(), event.shift_title, false);
            spawn(task);
        })
        .on_select(move |event| {
            spawn(select_state.clone().select(select_api.clone(), event.shift_title));
        })
        .on_timeline(move |event| {
            let task = state
                .clone()
                .show_timeline(api.clone(), event.turnus_set_id, event.shift_title);
            spawn(task);
        })
}

/// Load the app state and install it, plus the [`InteractionBus`], as
/// context for every page below the caller.
pub fn use_app_state_provider() -> AppState {
    let state = use_context_provider(AppState::load);
    let bus_state = state.clone();
    use_context_provider(move || interaction_bus(bus_state, TurnusApi::default()));
    state
}
