// HTML export of a rendered page: the `.filters` button bar followed by
// the `.gallery` figures, wrapped in a minimal document for `write_page`.

use crate::api::PortfolioSource;
use crate::error::Result;
use crate::filters::FilterMenu;
use crate::gallery::Gallery;
use crate::page::Page;
use std::path::Path;

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
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
    out
}

pub fn render_filters(menu: &FilterMenu) -> String {
    let mut out = String::from("<div class=\"filters\">\n");
    for button in menu.buttons() {
        out.push_str(&format!(
            "  <button class=\"{}\">{}</button>\n",
            escape(&button.classes().join(" ")),
            escape(&button.label)
        ));
    }
    out.push_str("</div>\n");
    out
}

pub fn render_gallery(gallery: &Gallery) -> String {
    let mut out = String::from("<div class=\"gallery\">\n");
    for card in gallery.cards() {
        out.push_str(&format!(
            "  <figure><img src=\"{}\" alt=\"{}\" category=\"{}\"><figcaption>{}</figcaption></figure>\n",
            escape(&card.image_url),
            escape(&card.alt),
            card.category_id,
            escape(&card.caption)
        ));
    }
    out.push_str("</div>\n");
    out
}

pub fn render_page<S: PortfolioSource>(page: &Page<S>) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head><meta charset=\"utf-8\"><title>Portfolio</title></head>\n<body>\n<section id=\"portfolio\">\n",
    );
    out.push_str(&render_filters(page.menu()));
    out.push_str(&render_gallery(page.gallery()));
    out.push_str("</section>\n</body>\n</html>\n");
    out
}

pub fn write_page<S: PortfolioSource>(page: &Page<S>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, render_page(page))?;
    tracing::info!(path = %path.display(), "page exported");
    Ok(())
}
