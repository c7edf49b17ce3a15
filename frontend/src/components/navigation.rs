use log::info;
use web_sys::{
    Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::hero::HeroHandle;
use crate::Route;

const SCROLLED_AFTER_PX: f64 = 50.0;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Video", "#video-section"),
    ("Services", "#services"),
    ("Contact", "#contact"),
];

/// Returns the element id an in-page link points at.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn find_element(id: &str) -> Option<Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let hero = use_context::<HeroHandle>().unwrap_or_default();
    let navigator = use_navigator();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let logo_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    let links = NAV_LINKS.iter().map(|(label, href)| {
        let onclick = {
            let hero = hero.clone();
            let navigator = navigator.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                let Some(target) = anchor_target(href) else {
                    return;
                };
                e.prevent_default();
                menu_open.set(false);
                if hero.is_mounted() {
                    hero.bypass_to(target);
                } else if let Some(element) = find_element(target) {
                    scroll_into_view(&element);
                } else if let Some(navigator) = navigator.as_ref() {
                    info!("#{} is not on this page, going home", target);
                    navigator.push(&Route::Home);
                }
            })
        };
        html! {
            <a class="nav-link" href={*href} {onclick}>{*label}</a>
        }
    });

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav
            id="navigation"
            class={classes!("top-nav", (scroll_y > SCROLLED_AFTER_PX).then(|| "scrolled"))}
        >
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 900;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(10px);
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.95);
                        backdrop-filter: blur(15px);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.2);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                    }
                    .nav-logo { color: #fff; font-weight: 700; text-decoration: none; cursor: pointer; }
                    .nav-menu { display: flex; gap: 1.5rem; }
                    .nav-link { color: #c9d1e0; text-decoration: none; }
                    .nav-link:hover { color: #fff; }
                    .nav-toggle { display: none; background: none; border: none; cursor: pointer; }
                    .nav-toggle span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
                    @media (max-width: 768px) {
                        .nav-toggle { display: block; }
                        .nav-menu { display: none; }
                        .nav-menu.open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(0, 0, 0, 0.95);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a id="nav-logo-card" class="nav-logo" href="#home" aria-label="Scroll to top" onclick={logo_click}>
                    {"amavis"}
                </a>
                <button
                    id="nav-toggle"
                    class="nav-toggle"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="nav-menu" class={classes!("nav-menu", (*menu_open).then(|| "open"))}>
                    {for links}
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Alex} classes="nav-link">
                            {"Talk to Alex"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}
