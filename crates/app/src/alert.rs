use dioxus::prelude::*;
use shared_types::{AlertMessage, AlertPresenter};
use shared_ui::{
    AlertDialogActions, AlertDialogCancel, AlertDialogContent, AlertDialogDescription,
    AlertDialogRoot, AlertDialogTitle,
};

/// App-wide handle for the blocking-alert surface.
///
/// At most one alert is pending at a time; showing another replaces it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlertHandle {
    pending: Signal<Option<AlertMessage>>,
}

impl AlertHandle {
    pub fn new() -> Self {
        Self {
            pending: Signal::new(None),
        }
    }

    pub fn show(&mut self, alert: AlertMessage) {
        tracing::warn!(title = %alert.title, body = %alert.body, "blocking alert shown");
        self.pending.set(Some(alert));
    }

    pub fn dismiss(&mut self) {
        self.pending.set(None);
    }
}

impl AlertPresenter for AlertHandle {
    fn present(&mut self, alert: AlertMessage) {
        self.show(alert);
    }
}

/// Hook to access the alert surface.
pub fn use_alert() -> AlertHandle {
    use_context::<AlertHandle>()
}

/// Renders the pending alert as a modal dialog over the current screen.
///
/// The overlay swallows interaction until the user dismisses it; the screen
/// underneath keeps its state and becomes interactive again on dismissal.
#[component]
pub fn BlockingAlert() -> Element {
    let mut handle = use_alert();
    let pending = handle.pending.read().clone();

    rsx! {
        if let Some(alert) = pending {
            AlertDialogRoot {
                open: true,
                on_open_change: move |open: bool| {
                    if !open {
                        handle.dismiss();
                    }
                },
                AlertDialogContent {
                    AlertDialogTitle { "{alert.title}" }
                    AlertDialogDescription { "{alert.body}" }
                    AlertDialogActions {
                        AlertDialogCancel { "OK" }
                    }
                }
            }
        }
    }
}
