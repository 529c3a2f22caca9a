use dioxus::prelude::*;

use crate::components::NoticeBanner;
use crate::interactions::{Interaction, InteractionBus, RemoveFavorite};
use crate::state::AppState;
use crate::t;

#[component]
pub fn Favorites() -> Element {
    let state = use_context::<AppState>();
    let bus = use_context::<InteractionBus>();

    let favorites: Vec<String> = state
        .cards
        .read()
        .iter()
        .filter(|card| card.favorite)
        .map(|card| card.display_name().to_string())
        .collect();

    rsx! {
        section { class: "page page-favorites",
            h1 { {t!("favorites-title")} }
            NoticeBanner {}
            if favorites.is_empty() {
                p { class: "results-card__meta", {t!("favorites-empty")} }
            }
            ul { class: "list-group favorites-list",
                { favorites.into_iter().map(|name| {
                    let bus = bus.clone();
                    let shift_title = name.clone();
                    rsx! {
                        li { key: "{name}", class: "list-group-item favorites-list__item",
                            span { "{name}" }
                            button {
                                class: "button button--ghost remove-favorite-btn",
                                title: t!("favorites-remove"),
                                onclick: move |_| {
                                    bus.dispatch(Interaction::Remove(RemoveFavorite {
                                        shift_title: shift_title.clone(),
                                    }));
                                },
                                "×"
                            }
                        }
                    }
                })}
            }
        }
    }
}
