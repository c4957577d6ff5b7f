//! Shared UI for the GoH2 front-end: context providers, form components and
//! the widgets each page is assembled from.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod timer;
pub use timer::sleep;

mod session;
pub use session::{
    expire_on_rejection, load_config, make_backend, use_api, use_session, PlatformStore,
    SessionContext, SessionProvider,
};

mod onboarding;
pub use onboarding::{use_onboarding, OnboardingProvider};

mod navbar;
pub use navbar::Navbar;

mod dashboard;
pub use dashboard::{AddRegistroModal, BeverageIcon, BeverageSelector, HydrationProgress, LogList};

mod summary;
pub use summary::{StatsGrid, WeeklyChart, WeeklyInsight};

mod social;
pub use social::{FeedList, PeriodTabs, RankingList, UserSearch};

mod settings;
pub use settings::{DeleteAccountModal, ProfileForm, SecurityForm};
