//! User-facing strings shared by the web front-end and the terminal host.

pub const APP_TITLE: &str = "Let Me ChatGPT That For You";
pub const MOCK_ASSISTANT_NAME: &str = "ChatGPT";
pub const MOCK_DISCLAIMER: &str = "(A demonstration for the uninitiated)";

/// Placeholder of the mock chat input before anything is typed.
pub const INPUT_PLACEHOLDER: &str = "Ask anything...";
/// Placeholder of the composer input on the home page.
pub const COMPOSER_PLACEHOLDER: &str = "What's the capital of France?";

pub const COMMENT_HEADLINE: &str = "Was that so hard? 🙄";
pub const COMMENT_SUBLINE: &str = "Redirecting you to the answer you could've found yourself...";

pub const NO_QUERY: &str = "No query provided";
pub const NOT_FOUND: &str = "Oops! Page not found";

pub const LINK_COPIED: &str = "Link copied to clipboard";
pub const SHARE_HINT: &str = "Share this link with someone who needs a little... guidance 😏";
pub const FOOTER_TAGLINE: &str = "letmechatgptthat.com • For all those \"quick questions\"";
