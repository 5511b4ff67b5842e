use kansou_client::api::{Comment, Reply, Time};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub comment: Comment,
    pub now: Time,

    /// Whether the reply form of this comment is open
    pub replying: bool,

    pub on_like: Callback<()>,
    pub on_reply_toggle: Callback<()>,
    pub on_reply: Callback<String>,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let tz = util::local_tz();
    let c = &p.comment;
    let replies = c.replies.iter().map(|r| reply_item(r, &p.now, &tz));
    let reply_form = p.replying.then(|| {
        html! { <ReplyForm on_submit={ p.on_reply.clone() } on_cancel={ p.on_reply_toggle.clone() } /> }
    });
    html! {
        <div class="comment">
            <div class="comment-header">
                <div class="comment-avatar">{ c.initial() }</div>
                <span class="comment-author">{ &c.author }</span>
                <span class="comment-date">{ util::ago(&p.now, &c.date, &tz) }</span>
            </div>
            <p class="comment-text">{ &c.text }</p>
            <div class="comment-actions">
                <button
                    type="button"
                    class={ classes!("like-btn", c.liked.then(|| "liked")) }
                    onclick={ p.on_like.reform(|_| ()) }
                >
                    <i class={ classes!(if c.liked { "fas" } else { "far" }, "fa-heart") }></i>
                    { " " }{ util::plural(c.likes as usize, "Like") }
                </button>
                <button type="button" class="reply-btn" onclick={ p.on_reply_toggle.reform(|_| ()) }>
                    <i class="fas fa-reply"></i>{ " Reply" }
                </button>
            </div>
            { for reply_form }
            <div class="replies">
                { for replies }
            </div>
        </div>
    }
}

fn reply_item(r: &Reply, now: &Time, tz: &chrono_tz::Tz) -> Html {
    html! {
        <div class="reply" key={ r.id.0 }>
            <div class="comment-header">
                <div class="comment-avatar small">{ r.initial() }</div>
                <span class="comment-author">{ &r.author }</span>
                <span class="comment-date">{ util::ago(now, &r.date, tz) }</span>
            </div>
            <p class="comment-text">{ &r.text }</p>
        </div>
    }
}

#[derive(Clone, PartialEq, Properties)]
struct ReplyFormProps {
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
}

#[function_component(ReplyForm)]
fn reply_form(p: &ReplyFormProps) -> Html {
    let text = use_state(String::new);
    let on_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };
    let submit = {
        let text = text.clone();
        let on_submit = p.on_submit.clone();
        move || {
            if !text.trim().is_empty() {
                on_submit.emit((*text).clone());
            }
        }
    };
    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit();
            }
        })
    };
    html! {
        <div class="reply-form">
            <input
                type="text"
                class="reply-input"
                placeholder="Write a reply..."
                value={ (*text).clone() }
                oninput={ on_input }
                onkeydown={ on_keydown }
            />
            <button type="button" class="btn btn-primary btn-sm" onclick={ Callback::from(move |_| submit()) }>
                { "Reply" }
            </button>
            <button type="button" class="btn btn-secondary btn-sm" onclick={ p.on_cancel.reform(|_| ()) }>
                { "Cancel" }
            </button>
        </div>
    }
}
