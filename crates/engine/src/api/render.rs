//! HTML rendering of the sheet page.
//!
//! One form holds every field, keyed by its display name from
//! [`FORM_FIELDS`]. Two submit buttons send the same form either to
//! `/download` or, with the chosen file, to `/upload`.

use std::fmt::Write;

use axum::response::Html;
use sheetkeeper_domain::{SheetField, SheetRecord, FORM_FIELDS};

use super::submission::UPLOAD_FIELD;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Adventure Sheet</title>
<style>
body { font-family: Georgia, serif; max-width: 48rem; margin: 2rem auto; }
fieldset { margin-bottom: 1rem; }
label { display: block; margin: 0.25rem 0; }
textarea { width: 100%; min-height: 4rem; }
</style>
</head>
<body>
<h1>Adventure Sheet</h1>
<form method="post" action="/download" enctype="multipart/form-data">
"#;

const PAGE_TAIL: &str = r#"</form>
</body>
</html>
"#;

/// Render the sheet page pre-filled with `record`.
pub fn sheet_page(record: &SheetRecord) -> Html<String> {
    let mut page = String::from(PAGE_HEAD);

    page.push_str("<fieldset>\n<legend>Sheet</legend>\n");
    for (display_name, field) in FORM_FIELDS {
        let value = escape_html(record.get(field).unwrap_or_default());
        let label = label(field);
        // Writing to a String cannot fail
        let _ = if is_multiline(field) {
            writeln!(
                page,
                r#"<label for="{display_name}">{label}</label><textarea id="{display_name}" name="{display_name}">{value}</textarea>"#
            )
        } else {
            writeln!(
                page,
                r#"<label for="{display_name}">{label}</label><input type="text" id="{display_name}" name="{display_name}" value="{value}">"#
            )
        };
    }
    page.push_str("</fieldset>\n");

    let _ = writeln!(
        page,
        r#"<button type="submit" formaction="/download">Download</button>
<input type="file" name="{UPLOAD_FIELD}" accept="application/json,.json">
<button type="submit" formaction="/upload">Upload</button>"#
    );
    page.push_str(PAGE_TAIL);

    Html(page)
}

fn label(field: SheetField) -> &'static str {
    match field {
        SheetField::MaxSkill => "Skill (initial)",
        SheetField::CurSkill => "Skill (current)",
        SheetField::MaxHp => "Stamina (initial)",
        SheetField::CurHp => "Stamina (current)",
        SheetField::MaxLuck => "Luck (initial)",
        SheetField::CurLuck => "Luck (current)",
        SheetField::Checkpoint => "Page",
        SheetField::Gold => "Gold",
        SheetField::Treasures => "Treasures",
        SheetField::Food => "Food",
        SheetField::Provisions => "Provisions",
        SheetField::Inventory => "Equipment and items",
        SheetField::Special => "Conditions",
        SheetField::Notes => "Clues",
        SheetField::Book1 => "Book 1",
        SheetField::Book2 => "Book 2",
        SheetField::Book3 => "Book 3",
        SheetField::Book4 => "Book 4",
    }
}

fn is_multiline(field: SheetField) -> bool {
    matches!(
        field,
        SheetField::Inventory | SheetField::Special | SheetField::Notes
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
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
