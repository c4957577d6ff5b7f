use dioxus::prelude::*;

use ui::{load_config, OnboardingProvider, SessionProvider};
use views::{
    AppLayout, Configuracion, Dashboard, History, Home, Login, NewPassword, PasoActividad,
    PasoDatosBasicos, PasoExito, PasoMedidas, PasoObjetivos, Registro, ResetEmailSent,
    ResetPassword, Resumen, Social,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[allow(non_snake_case)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login?:messageKey")]
    Login { messageKey: String },
    #[route("/registro")]
    Registro {},
    #[route("/restablecer-password?:token")]
    ResetPassword { token: String },
    #[route("/restablecer-password-enviado?:email")]
    ResetEmailSent { email: String },
    #[route("/restablecer-password/new-password?:token")]
    NewPassword { token: String },
    #[nest("/onboarding")]
        #[route("/paso-datos-basicos")]
        PasoDatosBasicos {},
        #[route("/paso-medidas")]
        PasoMedidas {},
        #[route("/paso-actividad")]
        PasoActividad {},
        #[route("/paso-objetivos")]
        PasoObjetivos {},
        #[route("/paso-exito")]
        PasoExito {},
    #[end_nest]
    #[layout(AppLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/history")]
        History {},
        #[route("/resumen")]
        Resumen {},
        #[route("/social")]
        Social {},
        #[route("/configuracion")]
        Configuracion {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = load_config();
        tracing::info!("Using API at {}", config.api.base_url);
        config
    });
    let locale = config.ui.default_locale.clone();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { http_equiv: "content-language", content: locale }

        SessionProvider {
            config,
            OnboardingProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Unknown paths fall back to the landing redirect.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No route for /{}", segments.join("/"));
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
