use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Bottom navigation bar of the authenticated area. Platform crates supply the
/// router links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            {children}
        }
    }
}
