use api::ApiError;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use ui::{use_session, SessionContext};

use crate::Route;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod registro;
pub use registro::Registro;

mod reset_password;
pub use reset_password::{NewPassword, ResetEmailSent, ResetPassword};

mod onboarding;
pub use onboarding::{PasoActividad, PasoDatosBasicos, PasoExito, PasoMedidas, PasoObjetivos};

mod app_layout;
pub use app_layout::AppLayout;

mod dashboard;
pub use dashboard::Dashboard;

mod history;
pub use history::History;

mod resumen;
pub use resumen::Resumen;

mod social;
pub use social::Social;

mod configuracion;
pub use configuracion::Configuracion;

pub(crate) fn login_route(message_key: &str) -> Route {
    Route::Login {
        messageKey: message_key.to_string(),
    }
}

/// Redirect anonymous visitors to the login page. Returns whether the caller
/// may render its content.
///
/// A session the backend just rejected lands on the login page with the
/// `sessionExpired` notice.
pub(crate) fn use_require_session() -> bool {
    let session = use_session();
    let nav = use_navigator();
    if session.is_authenticated() {
        true
    } else {
        nav.replace(login_route(guard_notice(session.is_expired())));
        false
    }
}

fn guard_notice(expired: bool) -> &'static str {
    if expired {
        "sessionExpired"
    } else {
        ""
    }
}

/// Send logged-in users straight to the dashboard.
pub(crate) fn use_redirect_if_logged_in() {
    let session = use_session();
    let nav = use_navigator();
    if session.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }
}

/// Log a failed backend call. A rejected token ends the session and leaves
/// for the login page.
pub(crate) fn report_api_error(
    what: &str,
    err: &ApiError,
    mut session: SessionContext,
    nav: Navigator,
) {
    if session.report_error(what, err) {
        nav.replace(login_route("sessionExpired"));
    }
}

/// Centered card used by the login, registration and password pages.
#[component]
pub(crate) fn AuthShell(title: String, #[props(default)] subtitle: String, children: Element) -> Element {
    rsx! {
        main {
            class: "auth-page",
            div {
                class: "auth-card card",
                div { class: "brand", "GoH2" }
                h1 { class: "auth-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "muted", "{subtitle}" }
                }
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_notice_after_rejected_session() {
        assert_eq!(guard_notice(true), "sessionExpired");
        assert_eq!(guard_notice(false), "");
        assert!(ui::components::notice_message(guard_notice(true)).is_some());
    }

    #[test]
    fn test_login_route_carries_only_known_key() {
        assert_eq!(
            login_route("sessionExpired"),
            Route::Login {
                messageKey: "sessionExpired".to_string()
            }
        );
        assert!(!login_route("").to_string().contains("sessionExpired"));
    }
}
