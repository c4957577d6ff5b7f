use dioxus::prelude::*;
use ui::use_session;

use super::login_route;
use crate::Route;

/// Redirect `/` to the dashboard or the login page.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();
    if session.is_authenticated() {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(login_route(""));
    }
    rsx! {}
}
