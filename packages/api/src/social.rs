//! Ranking, feed, search, follows, likes and comments.

use reqwest::{Method, RequestBuilder};
use serde::Serialize;

use crate::{
    send_ack, send_json, ApiClient, ApiError, Comentario, FeedPage, Periodo, RankingItem,
    UsuarioBusqueda,
};

/// Page size requested from `/social/feed`.
pub const FEED_PAGE_SIZE: u32 = 20;

#[derive(Serialize)]
struct NuevoComentario<'a> {
    texto: &'a str,
}

impl ApiClient {
    fn ranking_request(&self, periodo: Periodo) -> Result<RequestBuilder, ApiError> {
        Ok(self
            .authed(Method::GET, "/social/ranking")?
            .query(&[("periodo", periodo.as_str())]))
    }

    pub async fn get_ranking(&self, periodo: Periodo) -> Result<Vec<RankingItem>, ApiError> {
        send_json(self.ranking_request(periodo)?, "Error al obtener ranking").await
    }

    fn feed_request(&self, page: u32) -> Result<RequestBuilder, ApiError> {
        Ok(self
            .authed(Method::GET, "/social/feed")?
            .query(&[("page", page), ("limit", FEED_PAGE_SIZE)]))
    }

    /// One page (1-based) of the feed of followed users.
    pub async fn get_feed(&self, page: u32) -> Result<FeedPage, ApiError> {
        send_json(self.feed_request(page)?, "Error al obtener feed").await
    }

    fn search_request(&self, query: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.authed(Method::GET, "/social/buscar")?.query(&[("q", query)]))
    }

    /// Search users by name or email. An empty query returns nothing without a request.
    pub async fn search_usuarios(&self, query: &str) -> Result<Vec<UsuarioBusqueda>, ApiError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        send_json(self.search_request(query)?, "Error en la búsqueda").await
    }

    pub async fn follow(&self, usuario_id: &str) -> Result<(), ApiError> {
        let req = self.authed(Method::POST, &format!("/social/seguir/{usuario_id}"))?;
        send_ack(req, "Error al seguir usuario").await
    }

    pub async fn unfollow(&self, usuario_id: &str) -> Result<(), ApiError> {
        let req = self.authed(Method::DELETE, &format!("/social/dejar-de-seguir/{usuario_id}"))?;
        send_ack(req, "Error al dejar de seguir usuario").await
    }

    fn like_request(&self, registro_id: &str, is_liked: bool) -> Result<RequestBuilder, ApiError> {
        let method = if is_liked { Method::DELETE } else { Method::POST };
        self.authed(method, &format!("/social/registros/{registro_id}/like"))
    }

    /// Add a like, or remove it when `is_liked` says the item is already liked.
    pub async fn toggle_like(&self, registro_id: &str, is_liked: bool) -> Result<(), ApiError> {
        send_ack(self.like_request(registro_id, is_liked)?, "Error al dar like").await
    }

    pub async fn get_comentarios(&self, registro_id: &str) -> Result<Vec<Comentario>, ApiError> {
        let req = self.authed(Method::GET, &format!("/social/registros/{registro_id}/comentarios"))?;
        send_json(req, "Error al obtener comentarios").await
    }

    pub async fn add_comentario(&self, registro_id: &str, texto: &str) -> Result<Comentario, ApiError> {
        let req = self
            .authed(Method::POST, &format!("/social/registros/{registro_id}/comentar"))?
            .json(&NuevoComentario { texto });
        send_json(req, "Error al comentar").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://api.test").with_token(Some("tok".to_string()))
    }

    #[test]
    fn test_ranking_period_param() {
        let req = client().ranking_request(Periodo::Semana).unwrap().build().unwrap();
        assert_eq!(req.url().as_str(), "http://api.test/social/ranking?periodo=semana");
    }

    #[test]
    fn test_feed_pagination() {
        let req = client().feed_request(2).unwrap().build().unwrap();
        assert_eq!(req.url().query(), Some("page=2&limit=20"));
    }

    #[test]
    fn test_search_query_is_encoded() {
        let req = client().search_request("ana lópez").unwrap().build().unwrap();
        assert_eq!(req.url().query(), Some("q=ana+l%C3%B3pez"));
    }

    #[tokio::test]
    async fn test_empty_search_short_circuits() {
        // No server listens on this address; an actual request would fail.
        let client = ApiClient::new("http://127.0.0.1:9").with_token(Some("tok".to_string()));
        assert!(client.search_usuarios("").await.unwrap().is_empty());
    }

    #[test]
    fn test_like_method_follows_current_state() {
        let like = client().like_request("r1", false).unwrap().build().unwrap();
        assert_eq!(like.method(), Method::POST);
        assert_eq!(like.url().path(), "/social/registros/r1/like");

        let unlike = client().like_request("r1", true).unwrap().build().unwrap();
        assert_eq!(unlike.method(), Method::DELETE);
    }
}
