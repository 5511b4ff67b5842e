use kansou_client::Theme;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(p: &ThemeToggleProps) -> Html {
    // Show what clicking switches to
    let (icon_class, title) = match p.theme {
        Theme::Dark => ("fa-sun", "Switch to light mode"),
        Theme::Light => ("fa-moon", "Switch to dark mode"),
    };
    html! {
        <button
            type="button"
            id="themeToggle"
            class="theme-toggle"
            title={ title }
            aria-label={ title }
            onclick={ p.on_toggle.reform(|_| ()) }
        >
            <i class={ classes!("fas", icon_class) }></i>
        </button>
    }
}
