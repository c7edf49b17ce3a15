use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::navigation::scroll_to_top;

/// Shown once the page has scrolled past half a viewport.
pub fn is_past_threshold(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * 0.5
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let visible = is_past_threshold(scroll_y, viewport_height);

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        bottom: 2rem;
                        left: 2rem;
                        width: 44px;
                        height: 44px;
                        border-radius: 50%;
                        border: none;
                        background: #7eb6ff;
                        color: #0b0d12;
                        cursor: pointer;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.3s ease;
                        z-index: 800;
                    }
                    .back-to-top.visible { opacity: 1; visibility: visible; }
                "#}
            </style>
            <button
                id="back-to-top"
                class={classes!("back-to-top", visible.then(|| "visible"))}
                aria-label="Back to top"
                {onclick}
            >
                {"↑"}
            </button>
        </>
    }
}
