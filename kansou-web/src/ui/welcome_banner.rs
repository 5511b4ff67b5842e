use std::time::Duration;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// Must match the fade-out transition of `.welcome-message.hidden`
const FADE_OUT: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, PartialEq)]
enum BannerState {
    Shown,
    FadingOut,
    Closed,
}

#[function_component(WelcomeBanner)]
pub fn welcome_banner() -> Html {
    let state = use_state(|| BannerState::Shown);
    if *state == BannerState::Closed {
        return html! {};
    }
    let on_close = {
        let state = state.clone();
        Callback::from(move |_| {
            state.set(BannerState::FadingOut);
            let state = state.clone();
            spawn_local(async move {
                let _ = wasm_timer::Delay::new(FADE_OUT).await;
                state.set(BannerState::Closed);
            });
        })
    };
    html! {
        <div
            id="welcomeMessage"
            class={ classes!(
                "welcome-message",
                (*state == BannerState::FadingOut).then(|| "hidden"),
            ) }
        >
            <div>
                <h2>{ "Welcome!" }</h2>
                <p>{ "Tell us what you think: rate your experience, tag it, and discuss other people's feedback." }</p>
            </div>
            <button type="button" id="closeWelcome" class="close-welcome" aria-label="Close" onclick={ on_close }>
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
