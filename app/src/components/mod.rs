//! UI components

pub mod chat_input;
pub mod mock_chat;
pub mod share_link;
pub mod theme_toggle;
pub mod toast;
pub mod typed_text;

pub use chat_input::ChatInput;
pub use mock_chat::MockChat;
pub use share_link::ShareLink;
pub use theme_toggle::ThemeToggle;
pub use toast::{ToastFrame, ToastManager, ToastSeverity, use_toast, use_toast_provider};
pub use typed_text::TypedText;
