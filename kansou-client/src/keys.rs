//! Keys of the blobs the widget keeps in storage

/// JSON array of every feedback, newest first
pub const FEEDBACK: &str = "feedbackData";

/// "dark" or "light", absent until the user picks one
pub const THEME: &str = "theme";

/// "true" once the welcome banner was shown
pub const WELCOME_SHOWN: &str = "welcomeShown";

/// Display name used for comments and replies
pub const COMMENTER_NAME: &str = "commenterName";
