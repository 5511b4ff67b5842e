use std::rc::Rc;

use kansou_client::{
    api::{self, Error, FeedbackId, Filter, NewFeedback, RatingFilter, TagFilter},
    prefs, FeedbackStore, NameCapture, Theme,
};
use wasm_bindgen::{closure::Closure, JsCast};
use yew::prelude::*;

use crate::{ui, util, LocalBlobs};

const DELETE_CONFIRMATION: &str = "Delete this feedback?";

pub enum AppMsg {
    ToggleTheme,
    SystemThemeChanged(bool),

    SetRatingFilter(RatingFilter),
    SetTagFilter(TagFilter),
    ResetFilters,

    NewFeedback(NewFeedback),
    Delete(FeedbackId),
    Comment {
        feedback: FeedbackId,
        text: String,
    },
    Reply {
        feedback: FeedbackId,
        comment: usize,
        text: String,
    },
    ToggleLike {
        feedback: FeedbackId,
        comment: usize,
    },

    CommenterNamed(String),
    CommenterNameCancelled,

    // Comment and Reply, once the commenter's name is known
    CommentAs {
        feedback: FeedbackId,
        author: String,
        text: String,
    },
    ReplyAs {
        feedback: FeedbackId,
        comment: usize,
        author: String,
        text: String,
    },
}

struct SystemThemeWatch {
    _query: web_sys::MediaQueryList,
    _on_change: Closure<dyn Fn(web_sys::MediaQueryListEvent)>,
}

pub struct App {
    store: FeedbackStore<LocalBlobs>,
    filter: Filter,
    theme: Theme,
    show_welcome: bool,
    naming: NameCapture<AppMsg>,
    list_ref: NodeRef,
    scroll_to_list: bool,
    _system_theme_watch: Option<SystemThemeWatch>,
}

impl App {
    fn log_failure<T>(res: Result<T, Error>, what: &str) {
        match res {
            Ok(_) => (),
            Err(err) if err.is_not_found() => tracing::warn!(%err, "ignoring {what}"),
            Err(err) => tracing::error!(%err, "failed to {what}"),
        }
    }

    /// Drop the tag filter if the tag it names is gone
    fn refresh_tag_filter(&mut self) {
        if let TagFilter::Tag(t) = &self.filter.tag {
            if !self.store.list_tags().contains(t) {
                self.filter.tag = TagFilter::All;
            }
        }
    }
}

fn watch_system_theme(ctx: &Context<App>) -> Option<SystemThemeWatch> {
    let query = web_sys::window()?
        .match_media(util::DARK_SCHEME_QUERY)
        .ok()??;
    let link = ctx.link().clone();
    let on_change = Closure::wrap(Box::new(move |e: web_sys::MediaQueryListEvent| {
        link.send_message(AppMsg::SystemThemeChanged(e.matches()))
    }) as Box<dyn Fn(web_sys::MediaQueryListEvent)>);
    if let Err(err) = query.add_listener_with_opt_callback(Some(on_change.as_ref().unchecked_ref()))
    {
        tracing::warn!(?err, "failed watching system color scheme");
        return None;
    }
    Some(SystemThemeWatch {
        _query: query,
        _on_change: on_change,
    })
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let store = FeedbackStore::load(LocalBlobs);
        let theme = prefs::initial_theme(store.blobs(), util::system_prefers_dark());
        let show_welcome = prefs::take_welcome(store.blobs());
        App {
            store,
            filter: Filter::default(),
            theme,
            show_welcome,
            naming: NameCapture::new(),
            list_ref: NodeRef::default(),
            scroll_to_list: false,
            _system_theme_watch: watch_system_theme(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ToggleTheme => {
                self.theme = self.theme.toggled();
                App::log_failure(prefs::save_theme(self.store.blobs(), self.theme), "save theme");
                util::apply_theme(self.theme);
            }
            AppMsg::SystemThemeChanged(dark) => {
                // An explicit choice always wins over the system's
                if prefs::stored_theme(self.store.blobs()).is_some() {
                    return false;
                }
                self.theme = match dark {
                    true => Theme::Dark,
                    false => Theme::Light,
                };
                util::apply_theme(self.theme);
            }
            AppMsg::SetRatingFilter(r) => self.filter.rating = r,
            AppMsg::SetTagFilter(t) => self.filter.tag = t,
            AppMsg::ResetFilters => self.filter = Filter::default(),
            AppMsg::NewFeedback(new) => match self.store.create(new) {
                Ok(f) => {
                    tracing::debug!(id = ?f.id, "feedback submitted");
                    self.scroll_to_list = util::is_stacked_layout();
                }
                Err(err) => {
                    tracing::error!(%err, "failed to save new feedback");
                    return false;
                }
            },
            AppMsg::Delete(id) => {
                if !util::confirm(DELETE_CONFIRMATION) {
                    return false;
                }
                match self.store.delete(id) {
                    Ok(true) => self.refresh_tag_filter(),
                    Ok(false) => tracing::warn!(?id, "deleted feedback was already gone"),
                    Err(err) => tracing::error!(%err, "failed to delete feedback"),
                }
            }
            AppMsg::Comment { feedback, text } => {
                let text = match api::non_empty(&text) {
                    Ok(t) => String::from(t),
                    Err(_) => return false,
                };
                let resumed = self.naming.run_or_defer(self.store.blobs(), move |author| {
                    AppMsg::CommentAs {
                        feedback,
                        author,
                        text,
                    }
                });
                if let Some(msg) = resumed {
                    return Component::update(self, ctx, msg);
                }
            }
            AppMsg::Reply {
                feedback,
                comment,
                text,
            } => {
                let text = match api::non_empty(&text) {
                    Ok(t) => String::from(t),
                    Err(_) => return false,
                };
                let resumed = self.naming.run_or_defer(self.store.blobs(), move |author| {
                    AppMsg::ReplyAs {
                        feedback,
                        comment,
                        author,
                        text,
                    }
                });
                if let Some(msg) = resumed {
                    return Component::update(self, ctx, msg);
                }
            }
            AppMsg::ToggleLike { feedback, comment } => {
                App::log_failure(self.store.toggle_like(feedback, comment), "toggle like");
            }
            AppMsg::CommenterNamed(name) => {
                match self.naming.provide_name(self.store.blobs(), &name) {
                    Ok(Some(msg)) => return Component::update(self, ctx, msg),
                    Ok(None) => (),
                    Err(Error::EmptyInput) => return false,
                    Err(err) => tracing::error!(%err, "failed to save commenter name"),
                }
            }
            AppMsg::CommenterNameCancelled => self.naming.cancel(),
            AppMsg::CommentAs {
                feedback,
                author,
                text,
            } => {
                App::log_failure(self.store.add_comment(feedback, &author, &text), "add comment");
            }
            AppMsg::ReplyAs {
                feedback,
                comment,
                author,
                text,
            } => {
                App::log_failure(
                    self.store.add_reply(feedback, comment, &author, &text),
                    "add reply",
                );
            }
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            util::apply_theme(self.theme);
        }
        if self.scroll_to_list {
            self.scroll_to_list = false;
            if let Some(list) = self.list_ref.cast::<web_sys::Element>() {
                util::scroll_into_view(&list);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let welcome = self
            .show_welcome
            .then(|| html! { <ui::WelcomeBanner /> });
        let feedback = Rc::new(self.store.filter(&self.filter));
        let tags = Rc::new(self.store.list_tags());
        let link = ctx.link();

        html! {
            <>
                <header class="app-header">
                    <h1>{ "Feedback" }</h1>
                    <ui::ThemeToggle
                        theme={ self.theme }
                        on_toggle={ link.callback(|_| AppMsg::ToggleTheme) }
                    />
                </header>
                { for welcome }
                <main class="container">
                    <section class="feedback-form-section">
                        <ui::FeedbackForm on_submit={ link.callback(AppMsg::NewFeedback) } />
                    </section>
                    <section class="feedback-display" ref={ self.list_ref.clone() }>
                        <ui::FilterBar
                            rating={ self.filter.rating }
                            tag={ self.filter.tag.clone() }
                            { tags }
                            on_rating_change={ link.callback(AppMsg::SetRatingFilter) }
                            on_tag_change={ link.callback(AppMsg::SetTagFilter) }
                            on_reset={ link.callback(|_| AppMsg::ResetFilters) }
                        />
                        <ui::FeedbackList
                            { feedback }
                            now={ chrono::Utc::now() }
                            on_delete={ link.callback(AppMsg::Delete) }
                            on_comment={ link.callback(|(feedback, text): (FeedbackId, String)| AppMsg::Comment { feedback, text }) }
                            on_reply={ link.callback(|(feedback, comment, text): (FeedbackId, usize, String)| {
                                AppMsg::Reply { feedback, comment, text }
                            }) }
                            on_like={ link.callback(|(feedback, comment): (FeedbackId, usize)| AppMsg::ToggleLike { feedback, comment }) }
                        />
                    </section>
                </main>
                <ui::NameModal
                    shown={ self.naming.is_prompting() }
                    on_submit={ link.callback(AppMsg::CommenterNamed) }
                    on_cancel={ link.callback(|_| AppMsg::CommenterNameCancelled) }
                />
            </>
        }
    }
}
