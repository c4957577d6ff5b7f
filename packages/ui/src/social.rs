//! Widgets of the social page: ranking, activity feed and user search.

use api::{FeedItem, Periodo, RankingItem, UsuarioBusqueda};
use chrono::Local;
use dioxus::prelude::*;
use store::models::format_ml;
use store::social::{
    follow_success_message, ranking_bars, remove_from_search, CommentThread, Medal,
    UNFOLLOW_PROMPT,
};

use crate::components::{Button, ButtonVariant, FormError, Loading, Notification, NotificationKind};
use crate::dashboard::BeverageIcon;
use crate::icons::{
    FaComment, FaHeart, FaMagnifyingGlass, FaMedal, FaPaperPlane, FaTrophy, FaUserMinus,
    FaUserPlus,
};
use crate::session::use_session;
use crate::views::ModalOverlay;
use crate::Icon;

fn initial(nombre: &str) -> String {
    nombre
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[component]
pub fn PeriodTabs(value: Periodo, on_change: EventHandler<Periodo>) -> Element {
    rsx! {
        div {
            class: "tabs",
            role: "tablist",
            for periodo in Periodo::ALL {
                button {
                    key: "{periodo.as_str()}",
                    class: if periodo == value { "tab tab-active" } else { "tab" },
                    role: "tab",
                    aria_selected: periodo == value,
                    onclick: move |_| on_change.call(periodo),
                    "{periodo.label()}"
                }
            }
        }
    }
}

/// Ranking among followed users. `on_unfollow` receives the user id once the
/// user confirms.
#[component]
pub fn RankingList(items: Vec<RankingItem>, on_unfollow: EventHandler<String>) -> Element {
    let mut pending = use_signal(|| Option::<String>::None);

    if items.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                Icon { icon: FaTrophy, width: 28, height: 28 }
                p { "Aún no hay datos en el ranking." }
                p { class: "muted", "¡Invita a amigos para competir!" }
            }
        };
    }

    rsx! {
        ol {
            class: "ranking-list",
            for bar in ranking_bars(&items) {
                li {
                    key: "{bar.item.usuario_id}",
                    class: if bar.is_top3() { "ranking-row ranking-top" } else { "ranking-row" },
                    span {
                        class: "ranking-position",
                        match bar.medal {
                            Some(Medal::Gold) => rsx! { span { class: "medal medal-gold", Icon { icon: FaMedal, width: 16, height: 16 } } },
                            Some(Medal::Silver) => rsx! { span { class: "medal medal-silver", Icon { icon: FaMedal, width: 16, height: 16 } } },
                            Some(Medal::Bronze) => rsx! { span { class: "medal medal-bronze", Icon { icon: FaMedal, width: 16, height: 16 } } },
                            None => rsx! { "{bar.position}" },
                        }
                    }
                    div {
                        class: "ranking-body",
                        div {
                            class: "ranking-line",
                            span { class: "ranking-name", "{bar.display_name()}" }
                            span { class: "ranking-total", "{format_ml(bar.item.total_ml)} ml" }
                        }
                        div {
                            class: "ranking-track",
                            div { class: "ranking-bar", style: "width: {bar.percent}%;" }
                        }
                    }
                    if !bar.item.es_usuario_actual {
                        button {
                            class: "icon-button",
                            title: "Dejar de seguir",
                            onclick: {
                                let id = bar.item.usuario_id.clone();
                                move |_| pending.set(Some(id.clone()))
                            },
                            Icon { icon: FaUserMinus, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
        if let Some(usuario_id) = pending() {
            ModalOverlay {
                on_close: move |_| pending.set(None),
                div {
                    class: "modal-body",
                    p { "{UNFOLLOW_PROMPT}" }
                    div {
                        class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| pending.set(None),
                            "Cancelar"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: move |_| {
                                pending.set(None);
                                on_unfollow.call(usuario_id.clone());
                            },
                            "Dejar de seguir"
                        }
                    }
                }
            }
        }
    }
}

/// Activity feed. `on_like` receives the registro id.
#[component]
pub fn FeedList(items: Vec<FeedItem>, on_like: EventHandler<String>) -> Element {
    if items.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                p { "No hay actividad reciente." }
                p { class: "muted", "¡Sigue a más amigos para ver su progreso!" }
            }
        };
    }

    rsx! {
        div {
            class: "feed-list",
            for item in items {
                FeedPost {
                    key: "{item.id}",
                    item: item.clone(),
                    on_like: move |id| on_like.call(id),
                }
            }
        }
    }
}

#[component]
fn FeedPost(item: FeedItem, on_like: EventHandler<String>) -> Element {
    let mut session = use_session();
    let api = session.api();
    let comment_count = item.conteo_de_comentarios;
    let mut thread = use_signal(move || CommentThread::new(comment_count));
    // A reloaded feed may bring a newer count for the same post.
    use_effect(use_reactive!(|(comment_count,)| {
        if comment_count > thread.peek().count {
            thread.write().sync_count(comment_count);
        }
    }));
    let mut expanded = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let time = item.fecha_hora.with_timezone(&Local).format("%H:%M").to_string();
    let registro_id = item.id.clone();

    let toggle_comments = {
        let api = api.clone();
        let registro_id = registro_id.clone();
        move |_| {
            let open = !expanded();
            expanded.set(open);
            if !open || !thread.read().needs_load() || loading() {
                return;
            }
            let api = api.clone();
            let registro_id = registro_id.clone();
            spawn(async move {
                loading.set(true);
                match api.get_comentarios(&registro_id).await {
                    Ok(comments) => thread.write().set_loaded(comments),
                    Err(e) => {
                        session.report_error("Comment load", &e);
                        error.set(Some(e.message().to_string()));
                    }
                }
                loading.set(false);
            });
        }
    };

    let submit_comment = {
        let registro_id = registro_id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let texto = draft().trim().to_string();
            if texto.is_empty() {
                return;
            }
            let api = api.clone();
            let registro_id = registro_id.clone();
            spawn(async move {
                error.set(None);
                match api.add_comentario(&registro_id, &texto).await {
                    Ok(comment) => {
                        thread.write().push(comment);
                        draft.set(String::new());
                    }
                    Err(e) => {
                        session.report_error("Comment", &e);
                        error.set(Some(e.message().to_string()));
                    }
                }
            });
        }
    };

    rsx! {
        article {
            class: "feed-post card",
            header {
                class: "feed-post-header",
                span { class: "avatar", "{initial(&item.usuario.nombre)}" }
                div {
                    class: "feed-post-who",
                    span { class: "feed-post-name", "{item.usuario.nombre}" }
                    span { class: "muted", "{time}" }
                }
            }
            div {
                class: "feed-post-body",
                BeverageIcon { nombre: item.bebida.nombre.clone() }
                span { "{item.bebida.nombre} · {item.cantidad_consumida_ml} ml" }
            }
            footer {
                class: "feed-post-actions",
                button {
                    class: if item.le_di_like { "action action-liked" } else { "action" },
                    aria_pressed: item.le_di_like,
                    onclick: move |_| on_like.call(registro_id.clone()),
                    Icon { icon: FaHeart, width: 14, height: 14 }
                    span { "{item.conteo_de_likes}" }
                }
                button {
                    class: if expanded() { "action action-active" } else { "action" },
                    onclick: toggle_comments,
                    Icon { icon: FaComment, width: 14, height: 14 }
                    span { "{thread.read().count}" }
                }
            }
            if expanded() {
                div {
                    class: "comments",
                    if loading() {
                        p { class: "muted", "Cargando comentarios..." }
                    } else if thread.read().comments.is_empty() {
                        p { class: "muted", "Sé el primero en comentar." }
                    } else {
                        ul {
                            for comment in thread.read().comments.clone() {
                                li {
                                    key: "{comment.id}",
                                    class: "comment",
                                    span { class: "comment-author", "{comment.usuario.nombre}" }
                                    span { class: "comment-text", "{comment.texto}" }
                                }
                            }
                        }
                    }
                    FormError { message: error() }
                    form {
                        class: "comment-form",
                        onsubmit: submit_comment,
                        input {
                            class: "input",
                            placeholder: "Escribe un comentario...",
                            value: "{draft}",
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button {
                            class: "icon-button",
                            r#type: "submit",
                            aria_label: "Enviar comentario",
                            disabled: draft().trim().is_empty(),
                            Icon { icon: FaPaperPlane, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
    }
}

/// Search box for finding users to follow. `on_followed` fires after a
/// successful follow.
#[component]
pub fn UserSearch(on_followed: EventHandler<()>) -> Element {
    let mut session = use_session();
    let api = session.api();
    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<UsuarioBusqueda>::new);
    let mut searching = use_signal(|| false);
    let mut searched = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<(String, NotificationKind)>::None);

    let handle_search = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let q = query().trim().to_string();
            if q.is_empty() {
                results.set(Vec::new());
                searched.set(false);
                return;
            }
            let api = api.clone();
            spawn(async move {
                error.set(None);
                searching.set(true);
                match api.search_usuarios(&q).await {
                    Ok(found) => results.set(found),
                    Err(e) => {
                        session.report_error("User search", &e);
                        error.set(Some(e.message().to_string()));
                    }
                }
                searched.set(true);
                searching.set(false);
            });
        }
    };

    let follow = move |usuario: UsuarioBusqueda| {
        let api = api.clone();
        spawn(async move {
            notice.set(None);
            match api.follow(&usuario.id).await {
                Ok(()) => {
                    remove_from_search(&mut results.write(), &usuario.id);
                    notice.set(Some((
                        follow_success_message(&usuario.nombre),
                        NotificationKind::Success,
                    )));
                    on_followed.call(());
                }
                Err(e) => {
                    session.report_error("Follow", &e);
                    notice.set(Some((e.message().to_string(), NotificationKind::Error)));
                }
            }
        });
    };

    rsx! {
        section {
            class: "user-search card",
            form {
                class: "search-form",
                onsubmit: handle_search,
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    class: "input",
                    r#type: "search",
                    placeholder: "Buscar usuarios por nombre o email",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }
            FormError { message: error() }
            if let Some((message, kind)) = notice() {
                Notification {
                    message,
                    kind,
                    on_close: move |_| notice.set(None),
                }
            }
            if searching() {
                Loading { label: "Buscando..." }
            } else if searched() && results.read().is_empty() {
                p { class: "muted", "No se encontraron usuarios." }
            } else {
                ul {
                    class: "search-results",
                    for usuario in results() {
                        li {
                            key: "{usuario.id}",
                            class: "search-result",
                            span { class: "avatar", "{initial(&usuario.nombre)}" }
                            div {
                                class: "search-result-who",
                                span { "{usuario.nombre}" }
                                span { class: "muted", "{usuario.email}" }
                            }
                            button {
                                class: "btn btn-secondary",
                                onclick: {
                                    let mut follow = follow.clone();
                                    let usuario = usuario.clone();
                                    move |_| follow(usuario.clone())
                                },
                                Icon { icon: FaUserPlus, width: 14, height: 14 }
                                span { "Seguir" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_initial() {
        assert_eq!(initial("ana"), "A");
        assert_eq!(initial("Óscar"), "Ó");
        assert_eq!(initial(""), "?");
    }
}
