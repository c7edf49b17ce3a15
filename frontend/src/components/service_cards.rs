use web_sys::{Element, KeyboardEvent, MouseEvent};
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub struct Service {
    pub key: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        key: "voice",
        title: "Voice agents",
        summary: "An assistant that answers calls around the clock.",
        details: &[
            "Answers in your brand voice",
            "Books straight into your calendar",
            "Hands over to a human when it should",
        ],
    },
    Service {
        key: "automation",
        title: "Process automation",
        summary: "Glue between the tools you already use.",
        details: &[
            "CRM, invoicing and email in one flow",
            "Alerts when something needs a person",
        ],
    },
    Service {
        key: "analytics",
        title: "Reporting",
        summary: "One page with the numbers that matter.",
        details: &["Weekly summaries by email", "Live dashboard for the team"],
    },
];

/// Accordion rule: opening a card closes any other, clicking the open card
/// closes it.
pub fn toggle_expanded(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

fn clicked_link(e: &MouseEvent) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

#[function_component(ServiceCards)]
pub fn service_cards() -> Html {
    let expanded = use_state(|| None::<usize>);

    let cards = SERVICES.iter().enumerate().map(|(i, service)| {
        let is_expanded = *expanded == Some(i);
        let onclick = {
            let expanded = expanded.clone();
            Callback::from(move |e: MouseEvent| {
                if clicked_link(&e) {
                    return;
                }
                expanded.set(toggle_expanded(*expanded, i));
            })
        };
        let onkeydown = {
            let expanded = expanded.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" || e.key() == " " {
                    e.prevent_default();
                    expanded.set(toggle_expanded(*expanded, i));
                }
            })
        };

        html! {
            <div
                class={classes!("service-card-hybrid", is_expanded.then(|| "expanded"))}
                data-service={service.key}
                tabindex="0"
                role="button"
                aria-expanded={is_expanded.to_string()}
                {onclick}
                {onkeydown}
            >
                <h3>{service.title}</h3>
                <p>{service.summary}</p>
                <span class="expand-indicator">{if is_expanded { "−" } else { "+" }}</span>
                <div class="service-card-expanded" aria-hidden={(!is_expanded).to_string()}>
                    <ul>
                        {for service.details.iter().map(|d| html! { <li>{*d}</li> })}
                    </ul>
                    <a href="#contact" class="service-link">{"Ask about this"}</a>
                </div>
            </div>
        }
    });

    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                    .services-section { padding: 5rem 1.5rem; background: #0b0d12; color: #fff; }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        max-width: 1080px;
                        margin: 2rem auto 0;
                    }
                    .service-card-hybrid {
                        position: relative;
                        padding: 1.5rem;
                        border-radius: 16px;
                        background: #151a24;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .service-card-hybrid.expanded { background: #1c2333; }
                    .expand-indicator { position: absolute; top: 1.2rem; right: 1.4rem; font-size: 1.4rem; }
                    .service-card-expanded { max-height: 0; overflow: hidden; transition: max-height 0.3s ease; }
                    .service-card-hybrid.expanded .service-card-expanded { max-height: 400px; }
                    .service-link { color: #7eb6ff; }
                "#}
            </style>
            <h2>{"What we build"}</h2>
            <div class="services-grid">
                {for cards}
            </div>
        </section>
    }
}
