//! The onboarding steps after registration. Each step validates its own form,
//! merges it into the shared draft and moves on; the last data step submits the
//! whole draft as a single `PUT /perfil`.

use api::{Genero, NivelActividad};
use chrono::Local;
use dioxus::prelude::*;
use store::onboarding::BiometricPatch;
use store::validation::{ActivityForm, BasicDataForm, MeasurementsForm, ValidationErrors};
use store::OnboardingStep;
use ui::components::{Button, ButtonVariant, FormError, Input};
use ui::icons::{FaArrowLeft, FaCircleCheck};
use ui::{use_onboarding, use_session, Icon};

use super::{report_api_error, use_require_session};
use crate::Route;

fn step_route(step: OnboardingStep) -> Route {
    match step {
        OnboardingStep::DatosBasicos => Route::PasoDatosBasicos {},
        OnboardingStep::Medidas => Route::PasoMedidas {},
        OnboardingStep::Actividad => Route::PasoActividad {},
        OnboardingStep::Objetivos => Route::PasoObjetivos {},
        OnboardingStep::Exito => Route::PasoExito {},
    }
}

/// Back link, "Paso N de M" and the progress bar.
#[component]
fn StepShell(step: OnboardingStep, title: String, children: Element) -> Element {
    let progress = step.progress_percent();
    rsx! {
        main {
            class: "onboarding-page",
            header {
                class: "onboarding-header",
                if let Some(previous) = step.previous() {
                    Link {
                        class: "icon-button",
                        to: step_route(previous),
                        Icon { icon: FaArrowLeft, width: 16, height: 16 }
                    }
                }
                span { class: "muted", {OnboardingStep::header(step.number())} }
            }
            div {
                class: "onboarding-progress",
                div { class: "onboarding-progress-fill", style: "width: {progress}%;" }
            }
            h1 { class: "onboarding-title", "{title}" }
            {children}
        }
    }
}

#[component]
pub fn PasoDatosBasicos() -> Element {
    let allowed = use_require_session();
    let mut draft = use_onboarding();
    let nav = use_navigator();
    let mut form = use_signal(|| {
        let draft = draft.peek();
        BasicDataForm {
            fecha_nacimiento: draft
                .fecha_nacimiento
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            genero: draft
                .genero
                .map(|g| g.as_str().to_string())
                .unwrap_or_default(),
        }
    });
    let mut field_errors = use_signal(ValidationErrors::default);

    if !allowed {
        return rsx! {};
    }

    let handle_next = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().validate(Local::now().date_naive()) {
            Ok((fecha, genero)) => {
                draft.write().set_biometric_data(BiometricPatch {
                    fecha_nacimiento: Some(fecha),
                    genero: Some(genero),
                    ..Default::default()
                });
                nav.push(Route::PasoMedidas {});
            }
            Err(errors) => field_errors.set(errors),
        }
    };

    let field = move |name: &str| field_errors.read().message_for(name).map(str::to_string);

    rsx! {
        StepShell {
            step: OnboardingStep::DatosBasicos,
            title: "Cuéntanos sobre ti",
            form {
                class: "onboarding-form",
                onsubmit: handle_next,
                label {
                    class: "field",
                    span { "Fecha de nacimiento" }
                    Input {
                        r#type: "date",
                        invalid: field("fechaNacimiento").is_some(),
                        value: form.read().fecha_nacimiento.clone(),
                        oninput: move |evt: FormEvent| form.write().fecha_nacimiento = evt.value(),
                    }
                    FormError { message: field("fechaNacimiento") }
                }
                fieldset {
                    class: "field",
                    legend { "Género" }
                    div {
                        class: "choice-row",
                        for genero in Genero::ALL {
                            button {
                                key: "{genero.as_str()}",
                                r#type: "button",
                                class: if form.read().genero == genero.as_str() { "choice choice-active" } else { "choice" },
                                onclick: move |_| form.write().genero = genero.as_str().to_string(),
                                "{genero.as_str()}"
                            }
                        }
                    }
                    FormError { message: field("genero") }
                }
                Button { r#type: "submit", class: "w-full", "Continuar" }
            }
        }
    }
}

#[component]
pub fn PasoMedidas() -> Element {
    let allowed = use_require_session();
    let mut draft = use_onboarding();
    let nav = use_navigator();
    let mut form = use_signal(|| {
        let draft = draft.peek();
        MeasurementsForm {
            altura_cm: draft.altura_cm.map(|a| a.to_string()).unwrap_or_default(),
            peso_kg: draft.peso_kg.map(|p| p.to_string()).unwrap_or_default(),
        }
    });
    let mut field_errors = use_signal(ValidationErrors::default);

    if !allowed {
        return rsx! {};
    }

    let handle_next = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().validate() {
            Ok((altura, peso)) => {
                draft.write().set_biometric_data(BiometricPatch {
                    altura_cm: Some(altura),
                    peso_kg: Some(peso),
                    ..Default::default()
                });
                nav.push(Route::PasoActividad {});
            }
            Err(errors) => field_errors.set(errors),
        }
    };

    let field = move |name: &str| field_errors.read().message_for(name).map(str::to_string);

    rsx! {
        StepShell {
            step: OnboardingStep::Medidas,
            title: "Tus medidas",
            p { class: "muted", "Las usamos para calcular tu objetivo diario de hidratación." }
            form {
                class: "onboarding-form",
                onsubmit: handle_next,
                label {
                    class: "field",
                    span { "Altura (cm)" }
                    Input {
                        r#type: "number",
                        placeholder: "170",
                        invalid: field("alturaCm").is_some(),
                        value: form.read().altura_cm.clone(),
                        oninput: move |evt: FormEvent| form.write().altura_cm = evt.value(),
                    }
                    FormError { message: field("alturaCm") }
                }
                label {
                    class: "field",
                    span { "Peso (kg)" }
                    Input {
                        r#type: "number",
                        placeholder: "70",
                        invalid: field("pesoKg").is_some(),
                        value: form.read().peso_kg.clone(),
                        oninput: move |evt: FormEvent| form.write().peso_kg = evt.value(),
                    }
                    FormError { message: field("pesoKg") }
                }
                Button { r#type: "submit", class: "w-full", "Continuar" }
            }
        }
    }
}

#[component]
pub fn PasoActividad() -> Element {
    let allowed = use_require_session();
    let mut draft = use_onboarding();
    let nav = use_navigator();
    let mut form = use_signal(|| ActivityForm {
        nivel_actividad: draft
            .peek()
            .nivel_actividad
            .map(|n| n.as_str().to_string())
            .unwrap_or_default(),
    });
    let mut field_errors = use_signal(ValidationErrors::default);

    if !allowed {
        return rsx! {};
    }

    let handle_next = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().validate() {
            Ok(nivel) => {
                draft.write().set_biometric_data(BiometricPatch {
                    nivel_actividad: Some(nivel),
                    ..Default::default()
                });
                nav.push(Route::PasoObjetivos {});
            }
            Err(errors) => field_errors.set(errors),
        }
    };

    let nivel_error = field_errors
        .read()
        .message_for("nivelActividad")
        .map(str::to_string);

    rsx! {
        StepShell {
            step: OnboardingStep::Actividad,
            title: "¿Qué tan activo eres?",
            form {
                class: "onboarding-form",
                onsubmit: handle_next,
                div {
                    class: "activity-options",
                    for nivel in NivelActividad::ALL {
                        button {
                            key: "{nivel.as_str()}",
                            r#type: "button",
                            class: if form.read().nivel_actividad == nivel.as_str() { "activity-option choice-active" } else { "activity-option" },
                            onclick: move |_| form.write().nivel_actividad = nivel.as_str().to_string(),
                            span { class: "activity-label", "{nivel.label()}" }
                            span { class: "muted", "{nivel.description()}" }
                        }
                    }
                }
                FormError { message: nivel_error.clone() }
                Button { r#type: "submit", class: "w-full", "Continuar" }
            }
        }
    }
}

/// Review of the collected data and the final submission.
#[component]
pub fn PasoObjetivos() -> Element {
    let allowed = use_require_session();
    let session = use_session();
    let mut draft = use_onboarding();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    if !allowed {
        return rsx! {};
    }

    let handle_finish = move |_| {
        error.set(None);
        let update = match draft.read().to_profile_update() {
            Ok(update) => update,
            Err(e) => {
                tracing::warn!("Onboarding draft incomplete: {:?}", e);
                error.set(Some(e.to_string()));
                return;
            }
        };
        let api = session.api();
        spawn(async move {
            saving.set(true);
            match api.update_profile(&update).await {
                Ok(()) => {
                    tracing::info!("Onboarding profile saved");
                    draft.write().reset();
                    nav.replace(Route::PasoExito {});
                }
                Err(e) => {
                    report_api_error("profile update", &e, session, nav);
                    error.set(Some(e.message().to_string()));
                    saving.set(false);
                }
            }
        });
    };

    let summary = draft.read().clone();
    let fecha = summary
        .fecha_nacimiento
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string());
    let genero = summary.genero.map(|g| g.as_str()).unwrap_or("-");
    let altura = summary
        .altura_cm
        .map(|a| format!("{a} cm"))
        .unwrap_or_else(|| "-".to_string());
    let peso = summary
        .peso_kg
        .map(|p| format!("{p} kg"))
        .unwrap_or_else(|| "-".to_string());
    let nivel = summary.nivel_actividad.map(|n| n.label()).unwrap_or("-");

    rsx! {
        StepShell {
            step: OnboardingStep::Objetivos,
            title: "Revisa tus datos",
            p { class: "muted", "Con esta información calcularemos tu objetivo diario." }
            dl {
                class: "review-list card",
                dt { "Fecha de nacimiento" } dd { "{fecha}" }
                dt { "Género" } dd { "{genero}" }
                dt { "Altura" } dd { "{altura}" }
                dt { "Peso" } dd { "{peso}" }
                dt { "Nivel de actividad" } dd { "{nivel}" }
            }
            FormError { message: error() }
            Button {
                class: "w-full",
                loading: saving(),
                onclick: handle_finish,
                "Finalizar"
            }
        }
    }
}

#[component]
pub fn PasoExito() -> Element {
    let allowed = use_require_session();
    let nav = use_navigator();

    if !allowed {
        return rsx! {};
    }

    rsx! {
        StepShell {
            step: OnboardingStep::Exito,
            title: "¡Todo listo!",
            div {
                class: "success-icon",
                Icon { icon: FaCircleCheck, width: 56, height: 56 }
            }
            p { "Tu perfil está configurado. Empieza a registrar lo que bebes y alcanza tu objetivo diario." }
            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                onclick: move |_| {
                    nav.replace(Route::Dashboard {});
                },
                "Ir al inicio"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_routes_match_paths() {
        let mut step = OnboardingStep::DatosBasicos;
        loop {
            assert_eq!(step_route(step).to_string(), step.path());
            match step.next() {
                Some(next) => step = next,
                None => break,
            }
        }
    }
}
