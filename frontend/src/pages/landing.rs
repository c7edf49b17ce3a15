use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::service_cards::ServiceCards;
use crate::components::video_modal::VideoSection;
use crate::hero::dom::{prefers_reduced_motion, HeroListeners};
use crate::hero::{HeroConfig, HeroHandle, HeroInput};

pub struct HeroCard {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub cta: Option<(&'static str, &'static str)>,
    pub metrics: &'static [Metric],
}

/// A headline figure. `target` is the final count, rendered in `data-target`.
pub struct Metric {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

const INSIGHT_METRICS: &[Metric] = &[
    Metric { target: 40, suffix: "%", label: "less time on admin" },
    Metric { target: 3, suffix: "x", label: "faster lead response" },
    Metric { target: 24, suffix: "/7", label: "calls answered" },
];

pub const HERO_CARDS: &[HeroCard] = &[
    HeroCard {
        eyebrow: "Amavis",
        title: "Software that answers the phone",
        body: "Voice agents that pick up, qualify and book while your team keeps working.",
        cta: Some(("Talk to Alex", "#contact")),
        metrics: &[],
    },
    HeroCard {
        eyebrow: "Automation",
        title: "Workflows that run themselves",
        body: "We connect the tools you already pay for and remove the copy-paste in between.",
        cta: None,
        metrics: &[],
    },
    HeroCard {
        eyebrow: "Insight",
        title: "Numbers you can act on",
        body: "Dashboards built around the three decisions you make every week.",
        cta: None,
        metrics: INSIGHT_METRICS,
    },
    HeroCard {
        eyebrow: "Delivery",
        title: "Shipped in weeks",
        body: "Small fixed-scope projects with a working demo at the end of every sprint.",
        cta: Some(("See our services", "#services")),
        metrics: &[],
    },
    HeroCard {
        eyebrow: "Next step",
        title: "See it working",
        body: "Watch a two minute walkthrough of a live deployment.",
        cta: Some(("Book a call", "#contact")),
        metrics: &[],
    },
];

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub hero: HeroHandle,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let hero = props.hero.clone();

    let send = |input: HeroInput| {
        let hero = hero.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            hero.dispatch(input.clone());
        })
    };

    let cards = HERO_CARDS.iter().enumerate().map(|(i, card)| {
        let cta = card.cta.map(|(label, href)| {
            let onclick = {
                let hero = hero.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    hero.bypass_to(href);
                })
            };
            html! { <a class="cta-button" href={href} {onclick}>{label}</a> }
        });
        let metrics = (!card.metrics.is_empty()).then(|| {
            html! {
                <div class="metrics">
                    { for card.metrics.iter().map(|m| html! {
                        <div class="metric">
                            <span class="metric-number" data-target={m.target.to_string()}>
                                {format!("{}{}", m.target, m.suffix)}
                            </span>
                            <span class="metric-label">{m.label}</span>
                        </div>
                    }) }
                </div>
            }
        });
        html! {
            <article class={classes!("hero-card", (i == 0).then(|| "active"))}>
                <span class="hero-card-eyebrow">{card.eyebrow}</span>
                <h1>{card.title}</h1>
                <p>{card.body}</p>
                {for metrics}
                {for cta}
            </article>
        }
    });

    let dots = (0..HERO_CARDS.len()).map(|i| {
        html! {
            <button
                class={classes!("nav-dot", (i == 0).then(|| "active"))}
                role="tab"
                aria-label={format!("Show card {}", i + 1)}
                onclick={send(HeroInput::DotClicked(i))}
            />
        }
    });

    html! {
        <section class="hero-section" id="home">
            <div class="hero-progress">
                <div id="hero-progress-bar" class="hero-progress-bar"></div>
            </div>
            <div class="hero-cards">
                {for cards}
            </div>
            <div class="hero-nav-dots" role="tablist">
                {for dots}
            </div>
            <div class="hero-arrows">
                <button class="nav-arrow-up" aria-label="Previous card" onclick={send(HeroInput::ArrowUpClicked)}>{"↑"}</button>
                <button class="nav-arrow-down" aria-label="Next card" onclick={send(HeroInput::ArrowDownClicked)}>{"↓"}</button>
            </div>
            <div class="nav-guide hidden">{"Scroll, swipe or use the arrow keys"}</div>
            <button id="see-more-button" class="see-more-button" onclick={send(HeroInput::SeeMoreClicked)}>
                {"See more"}
            </button>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero = use_context::<HeroHandle>().unwrap_or_default();

    {
        let hero = hero.clone();
        use_effect_with_deps(
            move |_| {
                let config = if prefers_reduced_motion() {
                    info!("Reduced motion requested, hero autoplay disabled");
                    HeroConfig::default().reduced_motion()
                } else {
                    HeroConfig::default()
                };
                hero.mount(config, HERO_CARDS.len());
                let listeners = HeroListeners::attach(hero.clone());

                move || {
                    drop(listeners);
                    hero.clear();
                }
            },
            (),
        );
    }

    html! {
        <main class="landing">
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        padding: 6rem 1.5rem 3rem;
                        background: radial-gradient(circle at top, #1c2333 0%, #0b0d12 70%);
                        color: #fff;
                        overflow: hidden;
                    }
                    .hero-progress {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 4px;
                        background: rgba(255, 255, 255, 0.08);
                    }
                    .hero-progress-bar {
                        height: 100%;
                        width: 20%;
                        background: #7eb6ff;
                        transition: width 0.4s ease, background 0.4s ease;
                    }
                    .hero-progress-bar.complete { background: #5fd38d; }
                    .hero-progress-bar.hard-reset { background: #ffb454; }
                    .hero-cards {
                        position: relative;
                        width: min(720px, 100%);
                        min-height: 320px;
                    }
                    .hero-card {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                        pointer-events: none;
                    }
                    .hero-card.active {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }
                    .hero-card h1 { font-size: clamp(2rem, 5vw, 3.5rem); margin: 0.5rem 0 1rem; }
                    .hero-card p { font-size: 1.15rem; color: #c9d1e0; max-width: 560px; }
                    .metrics { display: flex; gap: 2rem; margin: 1.5rem 0; }
                    .metric { display: flex; flex-direction: column; }
                    .metric-number { font-size: 2.25rem; font-weight: 700; color: #ffffff; }
                    .metric-label { font-size: 0.85rem; color: #9aa5b8; }
                    .hero-card-eyebrow { text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.8rem; color: #7eb6ff; }
                    .cta-button {
                        display: inline-block;
                        margin-top: 1.5rem;
                        padding: 0.8rem 1.6rem;
                        border-radius: 999px;
                        background: #7eb6ff;
                        color: #0b0d12;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .hero-nav-dots {
                        position: absolute;
                        right: 2rem;
                        top: 50%;
                        transform: translateY(-50%);
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        transition: opacity 0.3s ease;
                    }
                    .hero-nav-dots.hidden { opacity: 0; pointer-events: none; }
                    .nav-dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        border: 1px solid #7eb6ff;
                        background: transparent;
                        cursor: pointer;
                    }
                    .nav-dot.active { background: #7eb6ff; }
                    .hero-arrows {
                        position: absolute;
                        bottom: 2rem;
                        right: 2rem;
                        display: flex;
                        gap: 0.5rem;
                    }
                    .hero-arrows button {
                        background: rgba(255, 255, 255, 0.08);
                        color: #fff;
                        border: none;
                        border-radius: 50%;
                        width: 40px;
                        height: 40px;
                        cursor: pointer;
                    }
                    .nav-guide {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        font-size: 0.85rem;
                        color: #8a93a6;
                        transition: opacity 0.3s ease;
                    }
                    .nav-guide.hidden { opacity: 0; }
                    .see-more-button {
                        margin-top: 2rem;
                        padding: 0.6rem 1.4rem;
                        border-radius: 999px;
                        border: 1px solid #7eb6ff;
                        background: transparent;
                        color: #7eb6ff;
                        cursor: pointer;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.3s ease;
                    }
                    .see-more-button.visible { opacity: 1; visibility: visible; }
                    .landing section { scroll-margin-top: 100px; }
                    .contact-section {
                        padding: 5rem 1.5rem;
                        text-align: center;
                        background: #0b0d12;
                        color: #fff;
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .hero-card, .hero-progress-bar { transition: none; }
                    }
                "#}
            </style>
            <HeroSection hero={hero.clone()} />
            <VideoSection />
            <ServiceCards />
            <section id="contact" class="contact-section">
                <h2>{"Let's talk"}</h2>
                <p>{"Tell us what eats your week. We reply within one working day."}</p>
                <a class="cta-button" href="mailto:hello@amavis.example">{"hello@amavis.example"}</a>
            </section>
        </main>
    }
}
