use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use shared_types::EmailForm;
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};

use crate::alert::use_alert;
use crate::routes::{Route, RouterNav};

/// Forgot-password page — the flow entry.
///
/// Collects an email address and hands off to OTP verification. Presence is
/// the only gate: the submit control stays disabled (and dimmed) while the
/// field is empty. An empty submit is still reachable by pressing Enter in
/// the field; it surfaces a blocking alert instead of navigating.
#[component]
pub fn ForgotPassword() -> Element {
    let mut form = use_signal(EmailForm::new);
    let mut alerts = use_alert();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut nav = RouterNav(navigator());
        form.read().submit(&mut nav, &mut alerts);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-brand",
                Icon::<LdLock> { icon: LdLock, width: 22, height: 22 }
                span { class: "auth-brand-name", "Sesame" }
            }

            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Forgot Password" }
                    CardDescription { "Enter your email and we'll send you a verification code" }
                }

                CardContent {
                    form { onsubmit: handle_submit,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "user@example.com",
                                value: form.read().email().to_string(),
                                on_input: move |e: FormEvent| form.write().set_email(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit",
                            disabled: !form.read().submit_enabled(),
                            "Send Code"
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have a code? "
                        Link { to: Route::VerifyOtp {}, "Enter it" }
                    }
                }
            }
        }
    }
}
