use axum::Router;

use crate::app::views::ITEMS_PATH;

pub mod items;
pub mod system;

/// Router for the item pages.
pub fn router() -> Router {
    Router::new().nest(ITEMS_PATH, items::router())
}
