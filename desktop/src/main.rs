#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::state::use_app_state_provider;
use ui::views::{Colors, Favorites, Home, Turnusliste};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/turnusliste")]
    Turnusliste {},
    #[route("/farger")]
    Colors {},
    #[route("/favoritter")]
    Favorites {},
}

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Turnus {}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

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

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Language code shared with AppNavbar; the keyed wrapper below remounts
    // the routed tree when it changes.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);
    use_app_state_provider();

    register_nav(NavBuilder {
        home: nav_home,
        turnusliste: nav_turnusliste,
        colors: nav_colors,
        favorites: nav_favorites,
    });

    // Some window managers ignore the initial maximize.
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{ui::THEME_CSS}" }

        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Shared navbar wrapped around the desktop `Route` outlet.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
