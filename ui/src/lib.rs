// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod navigation;
mod screens;
pub mod session;
#[cfg(test)]
mod testing;

use components::side_nav::SideNav;
use config::SiteConfig;
use screens::charts::{Account, Accounts, Overview, Pair, Pairs, Token, Tokens};
use screens::dex::{Farms, Liquidity, Swap};
use screens::listings::{Cmc, Coingecko, NotFound};
use screens::tools::{LpLocker, Multisender, Scanner};
use session::use_session_clock_provider;

/// Every page the side menu can link to. The detail routes (`/token/..`,
/// `/account/..`, `/pair/..`) are what the menu's singular aliases match.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[redirect("/", || Route::Overview {})]
        #[route("/swap")]
        Swap {},
        #[route("/liquidity")]
        Liquidity {},
        #[route("/farms")]
        Farms {},
        #[route("/overview")]
        Overview {},
        #[route("/accounts")]
        Accounts {},
        #[route("/account/:address")]
        Account { address: String },
        #[route("/tokens")]
        Tokens {},
        #[route("/token/:address")]
        Token { address: String },
        #[route("/pairs")]
        Pairs {},
        #[route("/pair/:address")]
        Pair { address: String },
        #[route("/lp-locker")]
        LpLocker {},
        #[route("/multisender")]
        Multisender {},
        #[route("/scanner")]
        Scanner {},
        #[route("/cmc")]
        Cmc {},
        #[route("/coingecko")]
        Coingecko {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

//=============================================================================
// LAYOUT
//=============================================================================

/// Side navigation next to the routed page. Owns the session clock so the
/// polling indicator keeps counting across navigations.
#[component]
fn Shell() -> Element {
    use_session_clock_provider();
    let current_path = use_route::<Route>().to_string();

    rsx! {
        div {
            class: "app-frame",
            SideNav { current_path }
            main {
                class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

const THEME_CSS: &str = r#"
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        min-height: 100%;
        background: #0d0b1a;
        color: #ffffff;
        font-family: "Inter", system-ui, sans-serif;
    }

    a { color: inherit; text-decoration: none; }

    .app-frame {
        display: grid;
        grid-template-columns: 220px 1fr;
        min-height: 100vh;
    }

    .content { padding: 2rem; }

    /* --- SIDE NAV --- */
    .side-nav {
        position: sticky;
        top: 0;
        z-index: 10000;
        padding: 0.5rem 0.5rem 0.5rem 0.75rem;
        background: linear-gradient(297deg, #7e6ee8 0.68%, #000000 100.48%);
    }

    .side-nav.desktop { height: 100vh; }

    .side-nav-column {
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        height: 100vh;
    }

    .side-nav-top {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        margin: 1.5rem 0 0 0.75rem;
    }

    .side-nav-bottom { margin: 0 0 4rem 0.75rem; }

    .brand-title { font-size: 1.25rem; font-weight: 600; }

    .network-label {
        width: fit-content;
        padding: 8px 12px;
        border-radius: 12px;
        background-color: #000000;
        color: #8d77df;
        font-weight: 500;
    }

    /* --- MENU --- */
    .menu-content { display: flex; flex-direction: column; gap: 0.25rem; }

    .nav-option {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 0.6rem;
        padding: 0;
        border: none;
        background: none;
        color: #ffffff;
        font: inherit;
        font-size: 16px;
        opacity: 0.6;
        cursor: pointer;
    }

    .nav-option:hover, .nav-option.active { opacity: 1; }
    .nav-option.active { font-weight: 600; }

    .submenu { display: flex; flex-direction: column; padding-left: 1rem; }

    .nav-glyph { width: 20px; text-align: center; }

    /* --- SOCIAL --- */
    .social-links {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.825rem;
        opacity: 0.8;
    }

    .social-links:hover { opacity: 1; }
    .social-glyph { font-size: 1.25rem; }

    /* --- POLLING --- */
    .polling {
        position: fixed;
        left: 0;
        bottom: 0;
        display: flex;
        padding: 1rem 1rem 1rem 1.5rem;
        opacity: 0.4;
        transition: opacity 0.25s ease;
    }

    .polling:hover { opacity: 1; }

    .polling-dot {
        width: 8px;
        height: 8px;
        margin: 3px 0.5rem 0 0;
        border-radius: 50%;
        background-color: #27ae60;
    }

    /* --- MOBILE --- */
    .side-nav.mobile { position: relative; padding: 1rem; }

    .side-nav-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }

    .menu-toggle {
        padding: 6px;
        margin-right: 5px;
        border: none;
        background: none;
        color: #ffffff;
        cursor: pointer;
    }

    .menu-flyout {
        position: absolute;
        right: 15px;
        top: 100%;
        padding: 10px 30px 20px;
        background: #000000;
        border-bottom-left-radius: 10px;
        border-bottom-right-radius: 10px;
    }

    /* --- PLACEHOLDER PAGES --- */
    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 2rem;
        text-align: center;
        border: 2px dashed rgba(255, 255, 255, 0.2);
        border-radius: 12px;
    }

    .empty-state-icon { font-size: 3rem; margin-bottom: 1rem; }

    @media screen and (max-width: 1080px) {
        .app-frame { grid-template-columns: 1fr; grid-template-rows: auto 1fr; }
    }
"#;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    // A host application may provide its own configuration above `App`.
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    use_context_provider(move || config);

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{THEME_CSS}"
        }
        Router::<Route> {}
    }
}
