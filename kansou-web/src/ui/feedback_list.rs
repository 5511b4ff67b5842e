use std::rc::Rc;

use kansou_client::api::{Feedback, FeedbackId, Time};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct FeedbackListProps {
    /// Already filtered, newest first
    pub feedback: Rc<Vec<Feedback>>,
    pub now: Time,

    pub on_delete: Callback<FeedbackId>,
    pub on_comment: Callback<(FeedbackId, String)>,
    pub on_reply: Callback<(FeedbackId, usize, String)>,
    pub on_like: Callback<(FeedbackId, usize)>,
}

#[function_component(FeedbackList)]
pub fn feedback_list(p: &FeedbackListProps) -> Html {
    if p.feedback.is_empty() {
        return html! {
            <div id="feedbackList" class="feedback-list">
                <div class="empty-state">
                    <i class="far fa-comment-dots"></i>
                    <h3>{ "No feedback yet" }</h3>
                    <p>{ "Be the first to share your experience" }</p>
                </div>
            </div>
        };
    }
    html! {
        <div id="feedbackList" class="feedback-list">
            { for p.feedback.iter().map(|f| {
                let id = f.id;
                html! {
                    <ui::FeedbackCard
                        key={ id.0 }
                        feedback={ f.clone() }
                        now={ p.now }
                        on_delete={ p.on_delete.reform(move |()| id) }
                        on_comment={ p.on_comment.reform(move |text: String| (id, text)) }
                        on_reply={ p.on_reply.reform(move |(comment, text): (usize, String)| (id, comment, text)) }
                        on_like={ p.on_like.reform(move |comment: usize| (id, comment)) }
                    />
                }
            }) }
        </div>
    }
}
