pub mod forgot_password;
pub mod not_found;
pub mod verify_otp;

use dioxus::prelude::*;
use dioxus::prelude::dioxus_router::Navigator;
use shared_types::{Destination, ScreenNavigator};

use forgot_password::ForgotPassword;
use not_found::NotFound;
use verify_otp::VerifyOtp;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    ForgotPassword {},
    #[route("/verify")]
    VerifyOtp {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Resolve a flow destination to its route.
pub fn destination_route(destination: Destination) -> Route {
    match destination {
        Destination::OtpVerification => Route::VerifyOtp {},
    }
}

/// [`ScreenNavigator`] over the router — the one-shot "go to screen X"
/// capability the form controller is handed.
pub struct RouterNav(pub Navigator);

impl ScreenNavigator for RouterNav {
    fn navigate_to(&mut self, destination: Destination) {
        let route = destination_route(destination);
        tracing::info!(?destination, %route, "navigating");
        self.0.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn otp_verification_resolves_to_verify_route() {
        assert_eq!(
            destination_route(Destination::OtpVerification),
            Route::VerifyOtp {}
        );
    }

    #[test]
    fn route_paths_are_stable() {
        assert_eq!(Route::ForgotPassword {}.to_string(), "/");
        assert_eq!(Route::VerifyOtp {}.to_string(), "/verify");
    }
}
