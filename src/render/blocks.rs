//! Rich text blocks to HTML

use crate::content::Block;
use crate::helpers::{html_escape, is_safe_href};

/// Render a block document
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        render_block(block, &mut html);
    }
    html
}

fn render_children(block: &Block, html: &mut String) {
    for child in block.children() {
        render_block(child, html);
    }
}

fn wrap(tag: &str, block: &Block, html: &mut String) {
    html.push_str(&format!("<{}>", tag));
    render_children(block, html);
    html.push_str(&format!("</{}>", tag));
}

fn render_block(block: &Block, html: &mut String) {
    match block.kind.as_str() {
        "text" => render_text(block, html),
        "paragraph" => wrap("p", block, html),
        "heading" => {
            let level = block.u64_field("level").unwrap_or(1).clamp(1, 6);
            wrap(&format!("h{}", level), block, html);
        }
        "list" => {
            let tag = match block.str_field("format") {
                Some("ordered") => "ol",
                _ => "ul",
            };
            wrap(tag, block, html);
        }
        "list-item" => wrap("li", block, html),
        "quote" => wrap("blockquote", block, html),
        "code" => {
            html.push_str("<pre><code>");
            html.push_str(&html_escape(&block.plain_text()));
            html.push_str("</code></pre>");
        }
        "link" => {
            let url = block
                .str_field("url")
                .filter(|url| is_safe_href(url))
                .unwrap_or("#");
            html.push_str(&format!(r#"<a href="{}">"#, html_escape(url)));
            render_children(block, html);
            html.push_str("</a>");
        }
        "image" => render_image(block, html),
        other => {
            tracing::debug!("Passing through unknown block type '{}'", other);
            render_children(block, html);
        }
    }
}

fn render_text(block: &Block, html: &mut String) {
    let mut text = html_escape(block.str_field("text").unwrap_or_default());

    for (field, tag) in [
        ("code", "code"),
        ("strikethrough", "s"),
        ("underline", "u"),
        ("italic", "em"),
        ("bold", "strong"),
    ] {
        if block.bool_field(field) {
            text = format!("<{tag}>{text}</{tag}>");
        }
    }

    html.push_str(&text);
}

fn render_image(block: &Block, html: &mut String) {
    let Some(image) = block.fields.get("image") else {
        return;
    };
    let Some(url) = image
        .get("url")
        .and_then(|v| v.as_str())
        .filter(|url| is_safe_href(url))
    else {
        return;
    };
    let alt = image
        .get("alternativeText")
        .and_then(|v| v.as_str())
        .unwrap_or_default();

    html.push_str(&format!(
        r#"<img src="{}" alt="{}">"#,
        html_escape(url),
        html_escape(alt)
    ));
}
