use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Object, Reflect};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{vapi_config, VapiConfig};

const VAPI_SDK_URL: &str =
    "https://cdn.jsdelivr.net/gh/VapiAI/html-script-tag@latest/dist/assets/index.js";

fn run_vapi_widget(config: &VapiConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let sdk = Reflect::get(&window, &JsValue::from_str("vapiSDK"))?;
    let run: Function = Reflect::get(&sdk, &JsValue::from_str("run"))?.dyn_into()?;

    let options = Object::new();
    Reflect::set(&options, &"apiKey".into(), &config.public_key.as_str().into())?;
    Reflect::set(&options, &"assistant".into(), &config.assistant_id.as_str().into())?;
    run.call1(&sdk, &options)?;
    Ok(())
}

/// Appends the widget script once and starts the widget when it loads.
fn load_vapi_widget(config: VapiConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.get_element_by_id("vapi-sdk").is_some() {
        return run_vapi_widget(&config);
    }

    let script = document.create_element("script")?;
    script.set_id("vapi-sdk");
    script.set_attribute("src", VAPI_SDK_URL)?;
    script.set_attribute("async", "true")?;

    let onload = Closure::once_into_js(move || {
        if let Err(e) = run_vapi_widget(&config) {
            warn!("Voice widget failed to start: {:?}", e);
        }
    });
    script.add_event_listener_with_callback("load", onload.unchecked_ref())?;

    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&script)?;
    Ok(())
}

#[function_component(Alex)]
pub fn alex() -> Html {
    let config = use_state(vapi_config);
    let started = use_state(|| false);

    let start = {
        let config = config.clone();
        let started = started.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(config) = (*config).clone() else {
                return;
            };
            info!("Starting voice widget");
            match load_vapi_widget(config) {
                Ok(()) => started.set(true),
                Err(e) => warn!("Could not load voice widget: {:?}", e),
            }
        })
    };

    html! {
        <main class="alex-page">
            <style>
                {r#"
                    .alex-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 6rem 1.5rem;
                        background: #0b0d12;
                        color: #fff;
                        text-align: center;
                    }
                    .alex-status { color: #8a93a6; margin-top: 1rem; }
                "#}
            </style>
            <h1>{"Talk to Alex"}</h1>
            <p>{"Alex is our voice assistant. Ask about pricing, timelines or anything on this site."}</p>
            {
                if config.is_some() {
                    html! {
                        <>
                            <button class="cta-button" onclick={start} disabled={*started}>
                                {if *started { "Alex is listening" } else { "Start a call" }}
                            </button>
                            <p class="alex-status">{"Voice assistant ready."}</p>
                        </>
                    }
                } else {
                    html! {
                        <p class="alex-status">{"The voice assistant is not configured on this deployment."}</p>
                    }
                }
            }
        </main>
    }
}
