//! Server-side HTML rendering for the item pages.
//!
//! Every piece of user-supplied text goes through [`escape`] before it is
//! written into markup.

use std::borrow::Cow;
use std::fmt::Write;

use axum::http::StatusCode;
use uuid::Uuid;

use itemservice_items::Item;

pub const ITEMS_PATH: &str = "/basic/items";

pub fn item_path(item: &Item) -> String {
    format!("{ITEMS_PATH}/{}", item.id())
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<div class="container">
{body}
</div>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn items_page(items: &[Item]) -> String {
    let mut rows = String::new();
    for item in items {
        let href = item_path(item);
        // Writing into a String cannot fail.
        let _ = write!(
            rows,
            r#"<tr><td><a href="{href}">{id}</a></td><td><a href="{href}">{name}</a></td><td>{price}</td><td>{quantity}</td></tr>
"#,
            id = item.id(),
            name = escape(&item.name),
            price = item.price,
            quantity = item.quantity,
        );
    }

    let body = format!(
        r#"<h2>Items</h2>
<p><a href="{ITEMS_PATH}/addForm">Add item</a></p>
<table>
<thead><tr><th>ID</th><th>Name</th><th>Price</th><th>Quantity</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    );
    layout("Items", &body)
}

pub fn item_page(item: &Item) -> String {
    let body = format!(
        r#"<h2>Item</h2>
<dl>
<dt>ID</dt><dd id="itemId">{id}</dd>
<dt>Name</dt><dd id="itemName">{name}</dd>
<dt>Price</dt><dd id="price">{price}</dd>
<dt>Quantity</dt><dd id="quantity">{quantity}</dd>
</dl>
<p><a href="{href}/edit">Edit</a> <a href="{ITEMS_PATH}">Back to list</a></p>"#,
        id = item.id(),
        name = escape(&item.name),
        price = item.price,
        quantity = item.quantity,
        href = item_path(item),
    );
    layout("Item", &body)
}

pub fn add_form_page() -> String {
    let body = format!(
        r#"<h2>Add item</h2>
<form action="{ITEMS_PATH}/addForm" method="post">
<label for="itemName">Name</label> <input type="text" id="itemName" name="itemName">
<label for="price">Price</label> <input type="number" id="price" name="price">
<label for="quantity">Quantity</label> <input type="number" id="quantity" name="quantity">
<button type="submit">Save</button>
<a href="{ITEMS_PATH}">Cancel</a>
</form>"#
    );
    layout("Add item", &body)
}

pub fn edit_form_page(item: &Item) -> String {
    let body = format!(
        r#"<h2>Edit item</h2>
<form action="{href}/edit" method="post">
<label for="id">ID</label> <input type="text" id="id" name="id" value="{id}" readonly>
<label for="itemName">Name</label> <input type="text" id="itemName" name="itemName" value="{name}">
<label for="price">Price</label> <input type="number" id="price" name="price" value="{price}">
<label for="quantity">Quantity</label> <input type="number" id="quantity" name="quantity" value="{quantity}">
<button type="submit">Save</button>
<a href="{href}">Cancel</a>
</form>"#,
        href = item_path(item),
        id = item.id(),
        name = escape(&item.name),
        price = item.price,
        quantity = item.quantity,
    );
    layout("Edit item", &body)
}

pub fn error_page(status: StatusCode, message: &str, request_id: Uuid) -> String {
    let body = format!(
        r#"<h2>{code} {reason}</h2>
<p>{message}</p>
<p><small>request id: {request_id}</small></p>
<p><a href="{ITEMS_PATH}">Back to list</a></p>"#,
        code = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Error"),
        message = escape(message),
    );
    layout("Error", &body)
}
