//! Toast notifications.
//!
//! A toast manager lives in context at the app root; any component can
//! push a message that dismisses itself after a few seconds.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Most toasts on screen at once. The oldest is dropped beyond this.
const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// 3 second duration
    Info,
    /// 5 second duration
    Error,
}

impl ToastSeverity {
    fn duration_ms(self) -> u32 {
        match self {
            ToastSeverity::Info => 3000,
            ToastSeverity::Error => 5000,
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
}

/// Access via [`use_toast`] from any component.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(vec![]),
            next_id: Signal::new(0),
        }
    }

    /// Show a toast that auto-dismisses after its severity's duration.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= MAX_TOASTS {
                toasts.remove(0);
            }
            toasts.push(Toast {
                id,
                message: message.into(),
                severity,
            });
        }

        let mut toasts = self.toasts;
        spawn(async move {
            TimeoutFuture::new(severity.duration_ms()).await;
            toasts.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Call once in the root component.
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Renders all active toasts. Place once at the end of the root layout.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-container",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        ToastSeverity::Info => "toast",
                        ToastSeverity::Error => "toast toast-error",
                    },
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        aria_label: "Dismiss",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_linger_longer_than_info() {
        assert_eq!(ToastSeverity::Info.duration_ms(), 3000);
        assert_eq!(ToastSeverity::Error.duration_ms(), 5000);
    }
}
