use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct NameModalProps {
    pub shown: bool,
    pub on_submit: Callback<String>,
    pub on_cancel: Callback<()>,
}

/// Asks for the name comments and replies get posted under
#[function_component(NameModal)]
pub fn name_modal(p: &NameModalProps) -> Html {
    let name = use_state(String::new);
    let input_ref = use_node_ref();
    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |shown| {
                if *shown {
                    if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                || ()
            },
            p.shown,
        );
    }
    if !p.shown {
        return html! {};
    }
    let on_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let submit = {
        let name = name.clone();
        let on_submit = p.on_submit.clone();
        move || on_submit.emit((*name).clone())
    };
    let on_keydown = {
        let submit = submit.clone();
        let on_cancel = p.on_cancel.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => {
                e.prevent_default();
                submit();
            }
            "Escape" => on_cancel.emit(()),
            _ => (),
        })
    };
    html! {
        <div id="nameModal" class="modal show">
            <div class="modal-content">
                <h3>{ "What's your name?" }</h3>
                <p>{ "It will be shown next to your comments." }</p>
                <input
                    type="text"
                    id="commenterName"
                    placeholder="Your name"
                    ref={ input_ref }
                    value={ (*name).clone() }
                    oninput={ on_input }
                    onkeydown={ on_keydown }
                />
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" onclick={ p.on_cancel.reform(|_| ()) }>
                        { "Cancel" }
                    </button>
                    <button type="button" class="btn btn-primary" onclick={ Callback::from(move |_| submit()) }>
                        { "Save" }
                    </button>
                </div>
            </div>
        </div>
    }
}
