use std::time::Duration;

use kansou_client::api::{NewFeedback, MAX_RATING};
use yew::prelude::*;

const SENT_NOTICE: Duration = Duration::from_secs(2);

#[derive(Clone, PartialEq, Properties)]
pub struct FeedbackFormProps {
    pub on_submit: Callback<NewFeedback>,
}

/// The "Sent!" notice, which only the timer of the latest submission ends
#[derive(Debug, Default)]
struct SentNotice {
    generation: u32,
    shown: bool,
}

impl SentNotice {
    fn show(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.shown = true;
        self.generation
    }

    fn expire(&mut self, generation: u32) {
        if generation == self.generation {
            self.shown = false;
        }
    }
}

pub struct FeedbackForm {
    new: NewFeedback,
    sent: SentNotice,
}

pub enum FormMsg {
    NameChanged(String),
    EmailChanged(String),
    RatingChanged(String),
    TextChanged(String),
    TagsChanged(String),
    Submit,
    SentNoticeOver(u32),
}

impl Component for FeedbackForm {
    type Message = FormMsg;
    type Properties = FeedbackFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            new: NewFeedback::default(),
            sent: SentNotice::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FormMsg::NameChanged(n) => self.new.name = n,
            FormMsg::EmailChanged(e) => self.new.email = e,
            // the select only offers 1 to 5, the browser enforces one is picked
            FormMsg::RatingChanged(r) => self.new.rating = r.parse().unwrap_or(0),
            FormMsg::TextChanged(t) => self.new.text = t,
            FormMsg::TagsChanged(t) => self.new.tags_raw = t,
            FormMsg::Submit => {
                ctx.props().on_submit.emit(std::mem::take(&mut self.new));
                let generation = self.sent.show();
                ctx.link().send_future(async move {
                    let _ = wasm_timer::Delay::new(SENT_NOTICE).await;
                    FormMsg::SentNoticeOver(generation)
                });
            }
            FormMsg::SentNoticeOver(generation) => self.sent.expire(generation),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! callback_for {
            ($msg:ident, $evt:ty, $elt:ty) => {
                ctx.link().callback(|e: $evt| {
                    let input: $elt = e.target_unchecked_into();
                    FormMsg::$msg(input.value())
                })
            };
        }
        let rating = match self.new.rating {
            0 => String::new(),
            r => r.to_string(),
        };
        let submit_button = match self.sent.shown {
            true => html! {
                <button type="submit" class="btn btn-primary success">
                    <i class="fas fa-check"></i>{ " Sent!" }
                </button>
            },
            false => html! {
                <button type="submit" class="btn btn-primary">
                    <i class="fas fa-paper-plane"></i>{ " Submit" }
                </button>
            },
        };
        html! {
            <form
                id="feedbackForm"
                onsubmit={ ctx.link().callback(|e: web_sys::SubmitEvent| {
                    e.prevent_default();
                    FormMsg::Submit
                }) }
            >
                <div class="form-group">
                    <label for="name">{ "Name" }</label>
                    <input
                        type="text"
                        id="name"
                        required=true
                        value={ self.new.name.clone() }
                        oninput={ callback_for!(NameChanged, InputEvent, web_sys::HtmlInputElement) }
                    />
                </div>
                <div class="form-group">
                    <label for="email">{ "Email" }</label>
                    <input
                        type="email"
                        id="email"
                        value={ self.new.email.clone() }
                        oninput={ callback_for!(EmailChanged, InputEvent, web_sys::HtmlInputElement) }
                    />
                </div>
                <div class="form-group">
                    <label for="rating">{ "Rating" }</label>
                    <select
                        id="rating"
                        required=true
                        onchange={ callback_for!(RatingChanged, Event, web_sys::HtmlSelectElement) }
                    >
                        <option value="" selected={ rating.is_empty() } disabled=true>
                            { "Select a rating" }
                        </option>
                        { for (1..=MAX_RATING).rev().map(|r| html! {
                            <option value={ r.to_string() } selected={ rating == r.to_string() }>
                                { format!("{r} - {}", "★".repeat(r as usize)) }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for="feedback">{ "Feedback" }</label>
                    <textarea
                        id="feedback"
                        required=true
                        value={ self.new.text.clone() }
                        oninput={ callback_for!(TextChanged, InputEvent, web_sys::HtmlTextAreaElement) }
                    />
                </div>
                <div class="form-group">
                    <label for="tags">{ "Tags (comma-separated)" }</label>
                    <input
                        type="text"
                        id="tags"
                        placeholder="ui, performance, bug"
                        value={ self.new.tags_raw.clone() }
                        oninput={ callback_for!(TagsChanged, InputEvent, web_sys::HtmlInputElement) }
                    />
                </div>
                { submit_button }
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sent_notice_outlives_earlier_timers() {
        let mut notice = SentNotice::default();
        assert!(!notice.shown);

        let first = notice.show();
        let second = notice.show();
        notice.expire(first);
        assert!(notice.shown);

        notice.expire(second);
        assert!(!notice.shown);

        let third = notice.show();
        notice.expire(second);
        assert!(notice.shown);
        notice.expire(third);
        assert!(!notice.shown);
    }
}
