#![forbid(unsafe_code)]

//! Overlay markup.
//!
//! Two pieces: the shell, mounted once, and the product content that fills
//! the shell's `.modal-content` container on every render. Class names are
//! the storefront stylesheet's contract; changing one is a CSS change too.
//!
//! Every piece of product text is HTML-escaped. Multi-line spec values
//! (a bat's forehand and backhand rubbers) are joined with `<br>` after
//! escaping.

use pips_catalog::model::NOT_AVAILABLE;
use pips_catalog::{Category, Price, ProductRecord, RubberFinish, Specs};

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Overlay shell: dialog container, header, content placeholder, nav
/// buttons and the swipe hint.
#[must_use]
pub fn render_shell() -> String {
    concat!(
        r#"<div class="modal-overlay">"#,
        r#"<div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title" tabindex="-1">"#,
        r#"<div class="modal-header">"#,
        r#"<div class="modal-drag-handle"></div>"#,
        r#"<button class="modal-close" aria-label="Close modal">&times;</button>"#,
        r#"</div>"#,
        r#"<div class="modal-content">"#,
        r#"<div class="modal-loading"><div class="modal-spinner"></div></div>"#,
        r#"</div>"#,
        r#"<button class="modal-nav modal-nav-prev" aria-label="Previous product">&lsaquo;</button>"#,
        r#"<button class="modal-nav modal-nav-next" aria-label="Next product">&rsaquo;</button>"#,
        r#"<div class="modal-swipe-indicator">Swipe to navigate</div>"#,
        r#"</div>"#,
        r#"</div>"#,
    )
    .to_string()
}

/// Content markup for one product.
#[must_use]
pub fn render_product(record: &ProductRecord) -> String {
    let _span = tracing::debug_span!("render_product", name = %record.name).entered();

    let mut html = String::with_capacity(2048);
    html.push_str(&format!(
        r#"<img src="{}" alt="{}" class="modal-product-image">"#,
        escape_html(&record.image_url),
        escape_html(&record.image_alt),
    ));
    html.push_str(&format!(
        r#"<h2 id="modal-title" class="modal-product-title">{}</h2>"#,
        escape_html(&record.name),
    ));
    push_specs(&mut html, &record.specs);
    push_price(&mut html, &record.price);
    if record.category == Category::Rubber {
        push_finish(&mut html, &record.finish);
    }

    html.push_str(r#"<div class="modal-product-description">"#);
    html.push_str(&format!(
        "<h4>{}</h4>",
        escape_html(&record.description.title)
    ));
    for paragraph in record.description.visible_paragraphs() {
        html.push_str(&format!("<p>{}</p>", escape_html(paragraph)));
    }
    html.push_str("</div>");

    tracing::trace!(bytes = html.len(), "product markup rendered");
    html
}

fn push_specs(html: &mut String, specs: &Specs) {
    html.push_str(r#"<div class="modal-product-specs"><div class="modal-specs-grid">"#);
    for field in specs.fields() {
        let value = field
            .value
            .lines()
            .map(escape_html)
            .collect::<Vec<_>>()
            .join("<br>");
        html.push_str(&format!(
            concat!(
                r#"<div class="modal-spec-item">"#,
                r#"<span class="modal-spec-label">{}:</span>"#,
                r#"<span class="modal-spec-value">{}</span>"#,
                r#"</div>"#,
            ),
            field.label, value,
        ));
    }
    html.push_str("</div></div>");
}

fn push_price(html: &mut String, price: &Price) {
    html.push_str(r#"<div class="modal-product-price">"#);
    if let Some(old) = &price.old {
        html.push_str(&format!(
            r#"<del class="modal-price-old">{}</del> "#,
            escape_html(old)
        ));
    }
    html.push_str(&format!(
        r#"<span class="modal-price-current">{}</span>"#,
        escape_html(&price.current)
    ));
    html.push_str("</div>");
}

fn push_finish(html: &mut String, finish: &RubberFinish) {
    if finish.is_empty() {
        return;
    }
    let colors = finish.colors.as_deref().unwrap_or(NOT_AVAILABLE);
    let thickness = finish.thickness.as_deref().unwrap_or(NOT_AVAILABLE);
    html.push_str(&format!(
        r#"<div class="modal-product-colors"><span class="modal-colors-label">Colours: {} | Thickness: {}</span></div>"#,
        escape_html(colors),
        escape_html(thickness),
    ));
}
