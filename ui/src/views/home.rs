use dioxus::prelude::*;

use crate::state::AppState;
use crate::t;

#[component]
pub fn Home() -> Element {
    // Re-render on language change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang = lang_code.map(|s| s()).unwrap_or_default();

    let state = use_context::<AppState>();
    let count = state.cards.read().len();
    let favorites = state.cards.read().iter().filter(|c| c.favorite).count();

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro", name = state.set_name.clone(), count = count)} }

            ul { class: "page-home__features",
                li { {t!("home-feature-colors")} }
                li { {t!("home-feature-sort")} }
                li { {t!("home-feature-favorites", count = favorites)} }
            }
            p { class: "page-home__cta", {t!("home-cta")} }
        }
    }
}
