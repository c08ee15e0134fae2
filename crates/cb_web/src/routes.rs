use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use cb_core::{ArticleId, FRONT_PAGE_SIZE};
use maud::Markup;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::RequestError;
use crate::views;
use crate::views::layout::Assets;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ArticleQuery {
    pub id: Option<String>,
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Result<Markup, RequestError> {
    let articles = state.store.list_recent(FRONT_PAGE_SIZE).await?;
    debug!("Rendering {} articles on the front page", articles.len());
    Ok(views::list::render_list_page(
        &articles,
        Assets::served(state.assets_dir.is_some()),
    ))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ArticleQuery>, QueryRejection>,
) -> Result<Markup, RequestError> {
    let raw_id = match query {
        Ok(Query(ArticleQuery { id: Some(id) })) => id,
        Ok(Query(ArticleQuery { id: None })) => return Err(RequestError::MissingParameter("id")),
        Err(rejection) => {
            debug!(%rejection, "Unreadable article query");
            return Err(RequestError::NotFound);
        }
    };

    // Unusable ids never reach the store.
    let id: ArticleId = raw_id.parse().map_err(|_| RequestError::NotFound)?;

    let article = state
        .store
        .get_by_id(id)
        .await?
        .ok_or(RequestError::NotFound)?;

    Ok(views::detail::render_detail_page(
        &article,
        Assets::served(state.assets_dir.is_some()),
    ))
}
