//! Onboarding draft context.
//!
//! The draft is kept in memory only, so it lives for the app session and is
//! lost on reload.

use dioxus::prelude::*;
use store::OnboardingDraft;

pub fn use_onboarding() -> Signal<OnboardingDraft> {
    use_context::<Signal<OnboardingDraft>>()
}

#[component]
pub fn OnboardingProvider(children: Element) -> Element {
    let draft = use_signal(OnboardingDraft::new);
    use_context_provider(|| draft);

    rsx! {
        {children}
    }
}
