use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Named destination screens the recovery flow can transition to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Destination {
    OtpVerification,
}

/// A blocking, user-dismissible message with a title and body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertMessage {
    pub title: String,
    pub body: String,
}

impl AlertMessage {
    /// The fixed alert shown when the email field is submitted empty.
    pub fn empty_email() -> Self {
        AppError::validation("Please enter your email").into()
    }

    /// The fixed alert shown when the verification code is submitted empty.
    pub fn empty_code() -> Self {
        AppError::validation("Please enter the verification code").into()
    }
}

impl From<AppError> for AlertMessage {
    fn from(err: AppError) -> Self {
        Self {
            title: "Error".to_string(),
            body: err.friendly_message(),
        }
    }
}

/// One-shot "go to screen X" capability.
///
/// Handed to the form controller explicitly so it never reaches for an
/// ambient navigation handle and stays testable in isolation.
pub trait ScreenNavigator {
    fn navigate_to(&mut self, destination: Destination);
}

/// Blocking alert capability. The presenter must require explicit
/// dismissal before the underlying screen becomes interactive again.
pub trait AlertPresenter {
    fn present(&mut self, alert: AlertMessage);
}

/// State behind the forgot-password form.
///
/// Owns the email string for the lifetime of the screen. Any string,
/// including the empty one, is a legal intermediate value; presence is the
/// only thing `submit` gates on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailForm {
    email: String,
}

impl EmailForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace the stored value unconditionally. No trimming, no format
    /// checks, no length limit.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Whether the submit control accepts interaction. Recomputed from the
    /// current value on every call.
    pub fn submit_enabled(&self) -> bool {
        !self.email.is_empty()
    }

    /// Submit the form.
    ///
    /// An empty email surfaces the fixed blocking alert and leaves the form
    /// untouched; anything else hands off to OTP verification. The email
    /// value itself is not forwarded with the navigation request.
    pub fn submit(&self, nav: &mut impl ScreenNavigator, alerts: &mut impl AlertPresenter) {
        if self.email.is_empty() {
            alerts.present(AlertMessage::empty_email());
            return;
        }
        nav.navigate_to(Destination::OtpVerification);
    }
}
