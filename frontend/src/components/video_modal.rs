use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlVideoElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

const VIDEO_SRC: &str = "/assets/video/amavis-walkthrough.mp4";

/// Locks page scrolling while the modal is open. The hero lock uses the
/// same property, so the modal only opens outside scroll-jacking.
fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let video_ref = use_node_ref();
    let was_open = use_mut_ref(|| false);

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |open| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_current_time(0.0);
                    video.set_muted(!*open);
                    if *open {
                        let _ = video.play();
                    } else {
                        let _ = video.pause();
                    }
                }
                if *open || *was_open.borrow() {
                    set_body_scroll_locked(*open);
                }
                *was_open.borrow_mut() = *open;
                || ()
            },
            props.open,
        );
    }

    // Escape closes the modal.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener = (*open).then(|| {
                    Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>)
                });
                if let (Some(document), Some(listener)) = (document.as_ref(), listener.as_ref()) {
                    let _ = document
                        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let (Some(document), Some(listener)) = (document, listener) {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            props.open,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            id="video-modal"
            class={classes!("video-modal", props.open.then(|| "active"))}
            aria-hidden={(!props.open).to_string()}
        >
            <div class="video-modal-overlay" onclick={close.clone()}></div>
            <div class="video-modal-content" onclick={keep_open}>
                <button class="video-modal-close" aria-label="Close video" onclick={close}>{"×"}</button>
                <video
                    id="modal-video"
                    ref={video_ref}
                    src={VIDEO_SRC}
                    controls=true
                    playsinline=true
                    onended={
                        let on_close = props.on_close.clone();
                        Callback::from(move |_: Event| on_close.emit(()))
                    }
                />
            </div>
        </div>
    }
}

/// Video teaser section. It is also where the hero scrolls after the
/// forward sequence completes.
#[function_component(VideoSection)]
pub fn video_section() -> Html {
    let open = use_state(|| false);

    let open_modal = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(true);
        })
    };
    let open_with_key = {
        let open = open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                open.set(true);
            }
        })
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_| open.set(false))
    };

    html! {
        <section id="video-section" class="video-section">
            <style>
                {r#"
                    .video-section { padding: 5rem 1.5rem; background: #10131a; color: #fff; text-align: center; }
                    .video-container {
                        position: relative;
                        max-width: 880px;
                        margin: 2rem auto 0;
                        border-radius: 16px;
                        overflow: hidden;
                        cursor: pointer;
                    }
                    .video-container video { width: 100%; display: block; }
                    .video-modal { position: fixed; inset: 0; display: none; z-index: 1000; }
                    .video-modal.active { display: flex; align-items: center; justify-content: center; }
                    .video-modal-overlay { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.85); }
                    .video-modal-content { position: relative; width: min(960px, 92vw); }
                    .video-modal-content video { width: 100%; border-radius: 12px; }
                    .video-modal-close {
                        position: absolute;
                        top: -2.5rem;
                        right: 0;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 2rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <h2>{"Two minutes, one real deployment"}</h2>
            <div class="video-container" onclick={open_modal}>
                <video
                    id="hero-video"
                    src={VIDEO_SRC}
                    muted=true
                    autoplay={!*open}
                    loop=true
                    playsinline=true
                    tabindex="0"
                    onkeydown={open_with_key}
                />
            </div>
            <VideoModal open={*open} {on_close} />
        </section>
    }
}
