use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdShield, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::AlertMessage;
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};

use crate::alert::use_alert;
use crate::routes::Route;

/// OTP-verification page — the destination the forgot-password screen hands
/// off to.
///
/// Collects the code sent to the user's email with the same local-only
/// semantics as the entry screen: an empty code on submit surfaces a
/// blocking alert; a non-empty one replaces the form with a success panel.
/// Checking the code against anything is a later step outside this flow.
#[component]
pub fn VerifyOtp() -> Element {
    let mut code = use_signal(String::new);
    let mut submitted = use_signal(|| false);
    let mut alerts = use_alert();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if code().is_empty() {
            alerts.show(AlertMessage::empty_code());
            return;
        }
        tracing::info!("verification code submitted");
        submitted.set(true);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-brand",
                Icon::<LdShield> { icon: LdShield, width: 22, height: 22 }
                span { class: "auth-brand-name", "Sesame" }
            }

            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Enter Verification Code" }
                    CardDescription { "Type the code from the email we sent you" }
                }

                CardContent {
                    if submitted() {
                        div { class: "auth-success",
                            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                            "Code received. Continue in the app to finish resetting your password."
                        }
                    } else {
                        form { onsubmit: handle_submit,
                            div { class: "auth-field",
                                Label { html_for: "code", "Verification Code" }
                                Input {
                                    input_type: "text",
                                    id: "code",
                                    placeholder: "123456",
                                    value: code(),
                                    on_input: move |e: FormEvent| code.set(e.value()),
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "auth-submit",
                                disabled: code().is_empty(),
                                "Verify"
                            }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Didn't get a code? "
                        Link { to: Route::ForgotPassword {}, "Start over" }
                    }
                }
            }
        }
    }
}
