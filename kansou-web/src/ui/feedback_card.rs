use kansou_client::api::{Feedback, Time, MAX_RATING};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct FeedbackCardProps {
    pub feedback: Feedback,
    pub now: Time,

    pub on_delete: Callback<()>,
    pub on_comment: Callback<String>,
    /// Comment index and reply text
    pub on_reply: Callback<(usize, String)>,
    /// Comment index
    pub on_like: Callback<usize>,
}

#[function_component(FeedbackCard)]
pub fn feedback_card(p: &FeedbackCardProps) -> Html {
    let replying_to = use_state(|| None::<usize>);
    let draft = use_state(String::new);
    let f = &p.feedback;

    // Posting may wait on the name prompt and be cancelled there, so drafts
    // are only dropped once the thread actually grew
    let (num_comments, num_replies) = thread_size(f);
    {
        let draft = draft.clone();
        use_effect_with_deps(
            move |_| {
                draft.set(String::new());
                || ()
            },
            num_comments,
        );
    }
    {
        let replying_to = replying_to.clone();
        use_effect_with_deps(
            move |_| {
                replying_to.set(None);
                || ()
            },
            num_replies,
        );
    }

    let post_comment = {
        let draft = draft.clone();
        let on_comment = p.on_comment.clone();
        move || {
            if !draft.trim().is_empty() {
                on_comment.emit((*draft).clone());
            }
        }
    };
    let on_draft_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let on_draft_keydown = {
        let post_comment = post_comment.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                post_comment();
            }
        })
    };

    let comments = f.comments.iter().enumerate().map(|(i, c)| {
        let on_reply_toggle = {
            let replying_to = replying_to.clone();
            Callback::from(move |()| {
                replying_to.set(match *replying_to {
                    Some(open) if open == i => None,
                    _ => Some(i),
                })
            })
        };
        let on_reply = p.on_reply.reform(move |text: String| (i, text));
        html! {
            <ui::CommentItem
                key={ c.id.0 }
                comment={ c.clone() }
                now={ p.now }
                replying={ *replying_to == Some(i) }
                on_like={ p.on_like.reform(move |()| i) }
                { on_reply_toggle }
                { on_reply }
            />
        }
    });
    let tags = (!f.tags.is_empty()).then(|| {
        html! {
            <div class="feedback-tags">
                { for f.tags.iter().map(|t| html! { <span class="tag">{ t }</span> }) }
            </div>
        }
    });
    let email = (!f.email.is_empty()).then(|| {
        html! { <span class="feedback-email">{ &f.email }</span> }
    });

    html! {
        <div class="feedback-item">
            <div class="feedback-header">
                <div class="avatar">{ f.initial() }</div>
                <div class="feedback-meta">
                    <h3 class="feedback-name">{ &f.name }</h3>
                    { for email }
                    <span class="feedback-date">
                        { "Posted on " }{ util::posted_on(&f.date, &util::local_tz()) }
                    </span>
                </div>
                <button
                    type="button"
                    class="delete-btn"
                    title="Delete feedback"
                    onclick={ p.on_delete.reform(|_| ()) }
                >
                    <i class="fas fa-trash"></i>
                </button>
            </div>
            <div class="feedback-rating">
                <span class="stars">{ util::stars(f.stars(), MAX_RATING) }</span>
                <span class="rating-value">{ format!("{}/{MAX_RATING}", f.rating) }</span>
            </div>
            <p class="feedback-text">{ &f.text }</p>
            { for tags }
            <div class="comments-section">
                <h4 class="comments-count">
                    <i class="far fa-comment"></i>{ " " }{ util::plural(f.comments.len(), "comment") }
                </h4>
                <div class="comments-list">
                    { for comments }
                </div>
                <div class="comment-form">
                    <textarea
                        class="comment-input"
                        placeholder="Add a comment..."
                        value={ (*draft).clone() }
                        oninput={ on_draft_input }
                        onkeydown={ on_draft_keydown }
                    />
                    <button
                        type="button"
                        class="btn btn-primary btn-sm"
                        onclick={ Callback::from(move |_| post_comment()) }
                    >
                        { "Post" }
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Number of comments and of replies under `f`
fn thread_size(f: &Feedback) -> (usize, usize) {
    (
        f.comments.len(),
        f.comments.iter().map(|c| c.replies.len()).sum(),
    )
}

#[cfg(test)]
mod tests {
    use kansou_client::{
        api::{FeedbackId, NewFeedback},
        FeedbackStore, MemoryBlobs,
    };

    use super::*;

    fn thread(store: &FeedbackStore<MemoryBlobs>, id: FeedbackId) -> (usize, usize) {
        thread_size(store.get(id).unwrap())
    }

    #[test]
    fn thread_size_grows_only_with_posts() {
        let mut store = FeedbackStore::load(MemoryBlobs::new());
        let f = store
            .create(NewFeedback {
                name: String::from("Ann"),
                rating: 4,
                text: String::from("ok"),
                ..NewFeedback::default()
            })
            .unwrap();
        assert_eq!(thread(&store, f.id), (0, 0));

        store.add_comment(f.id, "Bob", "hi").unwrap();
        assert_eq!(thread(&store, f.id), (1, 0));

        store.add_reply(f.id, 0, "Ann", "hello").unwrap();
        store.add_reply(f.id, 0, "Carl", "hey").unwrap();
        assert_eq!(thread(&store, f.id), (1, 2));

        // likes and refused writes leave both drafts alone
        store.toggle_like(f.id, 0).unwrap();
        store.blobs().set_read_only(true);
        assert!(store.add_comment(f.id, "Bob", "lost").is_err());
        assert!(store.add_reply(f.id, 0, "Bob", "lost").is_err());
        assert_eq!(thread(&store, f.id), (1, 2));
    }
}
