//! Markup rendering for projected rows.
//!
//! # Responsibility
//! - Map each `RenderRow` to one list element block.
//! - Tag every block with `data-item-index` so the view adapter can
//!   resolve interactions back to canonical store operations.
//!
//! # Invariants
//! - Checked rows render static text; unchecked rows render an edit form.
//! - Item names are HTML-escaped in text and attribute positions.
//! - Output is deterministic for identical rows.

use crate::view::projector::RenderRow;

/// Renders rows into one markup fragment, in row order.
///
/// An empty row slice renders an empty string.
pub fn render(rows: &[RenderRow]) -> String {
    rows.iter().map(render_row).collect()
}

/// Renders a single row block.
pub fn render_row(row: &RenderRow) -> String {
    let body = if row.editable {
        render_edit_form(&row.name)
    } else {
        render_display_name(&row.name, row.checked)
    };

    format!(
        concat!(
            r#"<li class="js-item-index-element" data-item-index="{index}" data-item-id="{id}">"#,
            "{body}",
            r#"<div class="shopping-item-controls">"#,
            r#"<button class="shopping-item-toggle js-item-toggle"><span class="button-label">check</span></button>"#,
            r#"<button class="shopping-item-delete js-item-delete"><span class="button-label">delete</span></button>"#,
            "</div></li>"
        ),
        index = row.canonical_index,
        id = row.item_id,
        body = body,
    )
}

fn render_display_name(name: &str, checked: bool) -> String {
    let checked_class = if checked { " shopping-item__checked" } else { "" };
    format!(
        r#"<span class="shopping-item js-shopping-item{checked_class}">{}</span>"#,
        escape_html(name)
    )
}

fn render_edit_form(name: &str) -> String {
    format!(
        concat!(
            r#"<form class="js-edit-shopping-item-form">"#,
            r#"<input type="text" name="edit-shopping-item" class="js-edit-shopping-item" value="{}" />"#,
            r#"<button type="submit">submit edit</button>"#,
            r#"<button type="button" class="js-cancel-edit">cancel edit</button>"#,
            "</form>"
        ),
        escape_html(name)
    )
}

/// Escapes `&`, `<`, `>`, `"` and `'` for text and quoted attribute use.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
