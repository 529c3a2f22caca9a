use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::state::use_app_state_provider;
use ui::views::{Colors, Favorites, Home, Turnusliste};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/turnusliste")]
    Turnusliste {},
    #[route("/farger")]
    Colors {},
    #[route("/favoritter")]
    Favorites {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_turnusliste(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Turnusliste {}, "{label}" })
}
fn nav_colors(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Colors {}, "{label}" })
}
fn nav_favorites(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Favorites {}, "{label}" })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        turnusliste: nav_turnusliste,
        colors: nav_colors,
        favorites: nav_favorites,
    });

    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);
    use_app_state_provider();

    rsx! {
        document::Style { "{ui::THEME_CSS}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Shared navbar wrapped around the web `Route` outlet.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
