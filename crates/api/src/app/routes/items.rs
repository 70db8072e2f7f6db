use std::sync::Arc;

use axum::{
    extract::{Extension, Form, Path},
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Router,
};

use itemservice_core::ItemId;

use crate::app::services::AppServices;
use crate::app::{dto, errors, views};
use crate::context::RequestContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/addForm", get(add_form).post(add_item))
        .route("/:id", get(get_item))
        .route("/:id/edit", get(edit_form).post(edit_item))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services.items_list();
    Html(views::items_page(&items)).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match id.parse::<ItemId>().and_then(|id| services.items_get(id)) {
        Ok(item) => Html(views::item_page(&item)).into_response(),
        Err(e) => errors::domain_error_to_response(e, &ctx),
    }
}

pub async fn add_form() -> axum::response::Response {
    Html(views::add_form_page()).into_response()
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<dto::ItemForm>,
) -> axum::response::Response {
    let item = services.items_create(form.into());
    Redirect::to(&views::item_path(&item)).into_response()
}

pub async fn edit_form(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match id.parse::<ItemId>().and_then(|id| services.items_get(id)) {
        Ok(item) => Html(views::edit_form_page(&item)).into_response(),
        Err(e) => errors::domain_error_to_response(e, &ctx),
    }
}

pub async fn edit_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
    Form(form): Form<dto::ItemForm>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e, &ctx),
    };

    match services.items_update(id, form.into()) {
        Ok(()) => Redirect::to(&format!("{}/{id}", views::ITEMS_PATH)).into_response(),
        Err(e) => errors::domain_error_to_response(e, &ctx),
    }
}
