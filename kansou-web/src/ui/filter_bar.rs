use std::rc::Rc;

use kansou_client::api::{RatingFilter, TagFilter, MAX_RATING};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct FilterBarProps {
    pub rating: RatingFilter,
    pub tag: TagFilter,

    /// Every tag that can be picked
    pub tags: Rc<Vec<String>>,

    pub on_rating_change: Callback<RatingFilter>,
    pub on_tag_change: Callback<TagFilter>,
    pub on_reset: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(p: &FilterBarProps) -> Html {
    let on_rating_change = {
        let cb = p.on_rating_change.filter_reform(|e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse() {
                Ok(r) => Some(r),
                Err(err) => {
                    tracing::warn!(%err, "ignoring unknown rating filter");
                    None
                }
            }
        });
        Callback::from(move |e: Event| {
            cb.emit(e);
        })
    };
    let on_tag_change = p.on_tag_change.reform(|e: Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        TagFilter::from(&select.value() as &str)
    });
    let rating_options = std::iter::once(RatingFilter::All)
        .chain((1..=MAX_RATING).rev().map(RatingFilter::Exactly))
        .map(|r| {
            let label = match r {
                RatingFilter::All => String::from("All"),
                RatingFilter::Exactly(n) => format!("{n} stars"),
            };
            html! {
                <option value={ r.to_string() } selected={ r == p.rating }>{ label }</option>
            }
        });
    let tag_options = std::iter::once(TagFilter::All)
        .chain(p.tags.iter().map(|t| TagFilter::Tag(t.clone())))
        .map(|t| {
            let label = match &t {
                TagFilter::All => String::from("All"),
                TagFilter::Tag(t) => t.clone(),
            };
            html! {
                <option value={ t.to_string() } selected={ t == p.tag }>{ label }</option>
            }
        });
    html! {
        <div class="filters">
            <div class="filter-group">
                <label for="ratingFilter">{ "Rating" }</label>
                <select id="ratingFilter" onchange={ on_rating_change }>
                    { for rating_options }
                </select>
            </div>
            <div class="filter-group">
                <label for="tagFilter">{ "Tag" }</label>
                <select id="tagFilter" onchange={ on_tag_change }>
                    { for tag_options }
                </select>
            </div>
            <button
                type="button"
                id="resetFilters"
                class="btn btn-secondary"
                onclick={ p.on_reset.reform(|_| ()) }
            >
                <i class="fas fa-undo"></i>{ " Reset" }
            </button>
        </div>
    }
}
