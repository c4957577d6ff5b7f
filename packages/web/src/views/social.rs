use api::{FeedItem, Periodo, RankingItem};
use dioxus::prelude::*;
use store::social::{apply_like, remove_from_ranking, rollback_like, SocialQuery, SocialTab};
use ui::components::{FormError, Loading};
use ui::{use_session, FeedList, PeriodTabs, RankingList, UserSearch};

use super::report_api_error;

#[component]
pub fn Social() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut tab = use_signal(SocialTab::default);
    let mut periodo = use_signal(Periodo::default);
    let mut reload = use_signal(|| 0u32);
    let mut ranking = use_signal(|| Option::<Vec<RankingItem>>::None);
    let mut feed = use_signal(|| Option::<Vec<FeedItem>>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Re-runs on tab switch, period change and after a follow.
    let _loader = use_resource(move || {
        let api = session.api();
        let query = SocialQuery::for_tab(tab(), periodo());
        reload();
        async move {
            error.set(None);
            match query {
                SocialQuery::Ranking(periodo) => match api.get_ranking(periodo).await {
                    Ok(items) => ranking.set(Some(items)),
                    Err(e) => {
                        report_api_error("Ranking load", &e, session, nav);
                        error.set(Some(e.message().to_string()));
                        ranking.set(Some(Vec::new()));
                    }
                },
                SocialQuery::Feed { page } => match api.get_feed(page).await {
                    Ok(feed_page) => feed.set(Some(feed_page.data)),
                    Err(e) => {
                        report_api_error("Feed load", &e, session, nav);
                        error.set(Some(e.message().to_string()));
                        feed.set(Some(Vec::new()));
                    }
                },
            }
        }
    });

    // The like shows up immediately; a failed request puts it back.
    let handle_like = move |registro_id: String| {
        let Some(toggle) = feed.write().as_mut().and_then(|items| apply_like(items, &registro_id)) else {
            return;
        };
        let api = session.api();
        spawn(async move {
            if let Err(e) = api.toggle_like(&toggle.registro_id, toggle.was_liked).await {
                report_api_error("Like toggle", &e, session, nav);
                if let Some(items) = feed.write().as_mut() {
                    rollback_like(items, &toggle);
                }
            }
        });
    };

    let handle_unfollow = move |usuario_id: String| {
        let api = session.api();
        spawn(async move {
            error.set(None);
            match api.unfollow(&usuario_id).await {
                Ok(()) => {
                    if let Some(items) = ranking.write().as_mut() {
                        remove_from_ranking(items, &usuario_id);
                    }
                }
                Err(e) => {
                    report_api_error("Unfollow", &e, session, nav);
                    error.set(Some(e.message().to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page social",
            header {
                class: "page-header",
                h1 { "Social" }
            }
            UserSearch { on_followed: move |_| reload += 1 }
            div {
                class: "tabs",
                for t in SocialTab::ALL {
                    button {
                        key: "{t.label()}",
                        class: if tab() == t { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(t),
                        "{t.label()}"
                    }
                }
            }
            FormError { message: error() }
            match tab() {
                SocialTab::Ranking => rsx! {
                    PeriodTabs {
                        value: periodo(),
                        on_change: move |p| periodo.set(p),
                    }
                    match ranking() {
                        None => rsx! { Loading { label: "Cargando ranking..." } },
                        Some(items) => rsx! { RankingList { items, on_unfollow: handle_unfollow } },
                    }
                },
                SocialTab::Feed => rsx! {
                    match feed() {
                        None => rsx! { Loading { label: "Cargando actividad..." } },
                        Some(items) => rsx! { FeedList { items, on_like: handle_like } },
                    }
                },
            }
        }
    }
}
