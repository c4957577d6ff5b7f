//! # Social view state
//!
//! Pure state transitions behind the social page: which request the active tab
//! needs, ranking bar geometry, the optimistic like toggle and its rollback, and
//! local list updates after follow and unfollow.
//!
//! ## Likes
//!
//! [`apply_like`] flips an item immediately and returns a [`LikeToggle`]
//! describing what it did. The caller sends the request with
//! [`LikeToggle::was_liked`] (which picks `POST` vs `DELETE`) and, if it fails,
//! hands the same toggle to [`rollback_like`]. A rollback only undoes its own
//! flip: if the item has been toggled again since, it is left alone.

use crate::models::{Comentario, FeedItem, Periodo, RankingItem, UsuarioBusqueda};

/// Asked before an unfollow is sent.
pub const UNFOLLOW_PROMPT: &str = "¿Dejar de seguir a este usuario?";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SocialTab {
    #[default]
    Ranking,
    Feed,
}

impl SocialTab {
    pub const ALL: [SocialTab; 2] = [SocialTab::Ranking, SocialTab::Feed];

    pub fn label(&self) -> &'static str {
        match self {
            SocialTab::Ranking => "Ranking",
            SocialTab::Feed => "Actividad",
        }
    }
}

/// The one request the social page sends for its active tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialQuery {
    Ranking(Periodo),
    Feed { page: u32 },
}

impl SocialQuery {
    pub fn for_tab(tab: SocialTab, periodo: Periodo) -> Self {
        match tab {
            SocialTab::Ranking => SocialQuery::Ranking(periodo),
            SocialTab::Feed => SocialQuery::Feed { page: 1 },
        }
    }
}

pub fn follow_success_message(nombre: &str) -> String {
    format!("¡Ahora sigues a {nombre}! Aparecerá en tu ranking.")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankingBar {
    /// 1-based position.
    pub position: usize,
    pub item: RankingItem,
    /// Bar width relative to the leader, `0..=100`.
    pub percent: u32,
    pub medal: Option<Medal>,
}

impl RankingBar {
    pub fn display_name(&self) -> &str {
        if self.item.es_usuario_actual {
            "Yo"
        } else {
            &self.item.nombre
        }
    }

    pub fn is_top3(&self) -> bool {
        self.position <= 3
    }
}

pub fn ranking_bars(items: &[RankingItem]) -> Vec<RankingBar> {
    let max = items.iter().map(|i| i.total_ml).fold(1.0, f64::max);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| RankingBar {
            position: index + 1,
            item: item.clone(),
            percent: (item.total_ml / max * 100.0).round().clamp(0.0, 100.0) as u32,
            medal: match index {
                0 => Some(Medal::Gold),
                1 => Some(Medal::Silver),
                2 => Some(Medal::Bronze),
                _ => None,
            },
        })
        .collect()
}

/// Record of one optimistic like flip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeToggle {
    pub registro_id: String,
    /// State before the flip; `true` means the request must remove the like.
    pub was_liked: bool,
}

/// Flip the like on `registro_id`, adjusting its counter.
pub fn apply_like(feed: &mut [FeedItem], registro_id: &str) -> Option<LikeToggle> {
    let item = feed.iter_mut().find(|i| i.id == registro_id)?;
    let was_liked = item.le_di_like;
    flip(item);
    Some(LikeToggle {
        registro_id: registro_id.to_string(),
        was_liked,
    })
}

/// Undo `toggle` if the item still shows its result.
pub fn rollback_like(feed: &mut [FeedItem], toggle: &LikeToggle) -> bool {
    match feed.iter_mut().find(|i| i.id == toggle.registro_id) {
        Some(item) if item.le_di_like != toggle.was_liked => {
            flip(item);
            true
        }
        _ => false,
    }
}

fn flip(item: &mut FeedItem) {
    if item.le_di_like {
        item.le_di_like = false;
        item.conteo_de_likes = item.conteo_de_likes.saturating_sub(1);
    } else {
        item.le_di_like = true;
        item.conteo_de_likes = item.conteo_de_likes.saturating_add(1);
    }
}

/// Drop an unfollowed user from the ranking.
pub fn remove_from_ranking(ranking: &mut Vec<RankingItem>, usuario_id: &str) {
    ranking.retain(|r| r.usuario_id != usuario_id);
}

/// Drop a just-followed user from the search results.
pub fn remove_from_search(results: &mut Vec<UsuarioBusqueda>, usuario_id: &str) {
    results.retain(|u| u.id != usuario_id);
}

/// Comments of one feed item, loaded lazily the first time it is expanded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentThread {
    pub comments: Vec<Comentario>,
    pub loaded: bool,
    pub count: u32,
}

impl CommentThread {
    pub fn new(count: u32) -> Self {
        Self {
            comments: Vec::new(),
            loaded: false,
            count,
        }
    }

    pub fn needs_load(&self) -> bool {
        !self.loaded
    }

    pub fn set_loaded(&mut self, comments: Vec<Comentario>) {
        self.comments = comments;
        self.loaded = true;
    }

    pub fn push(&mut self, comment: Comentario) {
        self.comments.push(comment);
        self.count = self.count.saturating_add(1);
    }

    /// Take a newer server count, e.g. after the feed reloads.
    ///
    /// Never drops below what this thread has already seen locally.
    pub fn sync_count(&mut self, server_count: u32) -> bool {
        let seen = self.count.max(self.comments.len() as u32);
        let next = seen.max(server_count);
        let changed = next != self.count;
        self.count = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComentarioAutor, NombreRef};
    use chrono::{TimeZone, Utc};

    fn item(id: &str, liked: bool, likes: u32) -> FeedItem {
        FeedItem {
            id: id.to_string(),
            cantidad_consumida_ml: 250,
            fecha_hora: Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap(),
            usuario: NombreRef {
                nombre: "Luis".to_string(),
            },
            bebida: NombreRef {
                nombre: "Agua".to_string(),
            },
            conteo_de_likes: likes,
            conteo_de_comentarios: 0,
            le_di_like: liked,
        }
    }

    fn ranked(id: &str, total: f64, me: bool) -> RankingItem {
        RankingItem {
            usuario_id: id.to_string(),
            nombre: format!("user-{id}"),
            total_ml: total,
            es_usuario_actual: me,
        }
    }

    #[test]
    fn test_like_is_applied_immediately() {
        let mut feed = vec![item("a", false, 3)];
        let toggle = apply_like(&mut feed, "a").unwrap();
        assert!(feed[0].le_di_like);
        assert_eq!(feed[0].conteo_de_likes, 4);
        assert!(!toggle.was_liked);
    }

    #[test]
    fn test_unlike_decrements() {
        let mut feed = vec![item("a", true, 1)];
        let toggle = apply_like(&mut feed, "a").unwrap();
        assert!(toggle.was_liked);
        assert!(!feed[0].le_di_like);
        assert_eq!(feed[0].conteo_de_likes, 0);
    }

    #[test]
    fn test_rollback_restores_previous_state() {
        let mut feed = vec![item("a", false, 3), item("b", false, 0)];
        let toggle = apply_like(&mut feed, "a").unwrap();
        assert!(rollback_like(&mut feed, &toggle));
        assert!(!feed[0].le_di_like);
        assert_eq!(feed[0].conteo_de_likes, 3);
        assert_eq!(feed[1], item("b", false, 0));
    }

    #[test]
    fn test_rollback_after_second_toggle_is_noop() {
        let mut feed = vec![item("a", false, 3)];
        let first = apply_like(&mut feed, "a").unwrap();
        let _second = apply_like(&mut feed, "a").unwrap();
        // First request fails after the user already undid the like.
        assert!(!rollback_like(&mut feed, &first));
        assert!(!feed[0].le_di_like);
        assert_eq!(feed[0].conteo_de_likes, 3);
    }

    #[test]
    fn test_unknown_item() {
        let mut feed = vec![item("a", false, 3)];
        assert!(apply_like(&mut feed, "zzz").is_none());
    }

    #[test]
    fn test_ranking_bars() {
        let bars = ranking_bars(&[
            ranked("1", 2000.0, false),
            ranked("2", 1000.0, true),
            ranked("3", 333.0, false),
            ranked("4", 0.0, false),
        ]);
        assert_eq!(bars[0].percent, 100);
        assert_eq!(bars[1].percent, 50);
        assert_eq!(bars[2].percent, 17);
        assert_eq!(bars[3].percent, 0);
        assert_eq!(bars[1].display_name(), "Yo");
        assert_eq!(bars[0].display_name(), "user-1");
        assert_eq!(bars[0].medal, Some(Medal::Gold));
        assert_eq!(bars[3].medal, None);
        assert!(bars[2].is_top3());
    }

    #[test]
    fn test_ranking_all_zero() {
        let bars = ranking_bars(&[ranked("1", 0.0, true)]);
        assert_eq!(bars[0].percent, 0);
    }

    #[test]
    fn test_follow_unfollow_list_updates() {
        let mut ranking = vec![ranked("1", 10.0, false), ranked("2", 5.0, true)];
        remove_from_ranking(&mut ranking, "1");
        assert_eq!(ranking.len(), 1);

        let mut results = vec![UsuarioBusqueda {
            id: "9".to_string(),
            nombre: "Eva".to_string(),
            email: "eva@example.com".to_string(),
        }];
        remove_from_search(&mut results, "9");
        assert!(results.is_empty());
    }

    #[test]
    fn test_active_tab_picks_its_request() {
        assert_eq!(
            SocialQuery::for_tab(SocialTab::Ranking, Periodo::Semana),
            SocialQuery::Ranking(Periodo::Semana)
        );
        assert_eq!(
            SocialQuery::for_tab(SocialTab::Feed, Periodo::Semana),
            SocialQuery::Feed { page: 1 }
        );
        // Switching tabs changes the request even with the same period.
        assert_ne!(
            SocialQuery::for_tab(SocialTab::Ranking, Periodo::Dia),
            SocialQuery::for_tab(SocialTab::Feed, Periodo::Dia)
        );
        assert_eq!(SocialTab::default(), SocialTab::Ranking);
        assert_eq!(SocialTab::Feed.label(), "Actividad");
    }

    #[test]
    fn test_follow_success_message() {
        assert_eq!(
            follow_success_message("Eva"),
            "¡Ahora sigues a Eva! Aparecerá en tu ranking."
        );
    }

    #[test]
    fn test_comment_count_follows_server_and_local_adds() {
        let mut thread = CommentThread::new(1);
        thread.push(comment("c1"));
        assert_eq!(thread.count, 2);

        // A reload that still reports the old count keeps the local add.
        assert!(!thread.sync_count(1));
        assert_eq!(thread.count, 2);

        // Someone else commented meanwhile.
        assert!(thread.sync_count(4));
        assert_eq!(thread.count, 4);
    }

    fn comment(id: &str) -> Comentario {
        Comentario {
            id: id.to_string(),
            texto: "¡Bien!".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 16, 10, 0, 0).unwrap(),
            usuario: ComentarioAutor {
                id: "u1".to_string(),
                nombre: "Ana".to_string(),
            },
        }
    }

    #[test]
    fn test_comment_thread() {
        let mut thread = CommentThread::new(2);
        assert!(thread.needs_load());
        thread.set_loaded(Vec::new());
        assert!(!thread.needs_load());
        thread.push(comment("c1"));
        assert_eq!(thread.count, 3);
        assert_eq!(thread.comments.len(), 1);
    }
}
