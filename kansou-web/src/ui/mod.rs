mod app;
pub use app::{App, AppMsg};

mod comment_item;
pub use comment_item::CommentItem;

mod feedback_card;
pub use feedback_card::FeedbackCard;

mod feedback_form;
pub use feedback_form::FeedbackForm;

mod feedback_list;
pub use feedback_list::FeedbackList;

mod filter_bar;
pub use filter_bar::FilterBar;

mod name_modal;
pub use name_modal::NameModal;

mod theme_toggle;
pub use theme_toggle::ThemeToggle;

mod welcome_banner;
pub use welcome_banner::WelcomeBanner;
