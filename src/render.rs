//! Terminal rendering of view state as tables or JSON.

use std::io::Write;

use clap::ValueEnum;
use comfy_table::{Cell, Table};
use serde::Serialize;
use serde_json::json;

use crate::domain::aggregates::FilterOptions;
use crate::views::{DetailView, ThumbnailCard};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table (default)
    Table,
    /// Pretty-printed JSON document
    Json,
}

fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)
}

fn join<T: ToString>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

pub fn write_options<W: Write>(options: &FilterOptions, format: OutputFormat, writer: &mut W) -> std::io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(writer, options);
    }
    let mut table = Table::new();
    table.set_header(vec!["Filter", "Values"]);
    table.add_row(vec![Cell::new("Material"), Cell::new(join(&options.materials))]);
    table.add_row(vec![Cell::new("Variant color"), Cell::new(join(&options.colors))]);
    table.add_row(vec![Cell::new("Color tags"), Cell::new(join(&options.color_tags))]);
    table.add_row(vec![Cell::new("Eye size"), Cell::new(join(&options.eye_sizes))]);
    table.add_row(vec![Cell::new("B"), Cell::new(join(&options.bridges))]);
    table.add_row(vec![Cell::new("Frame PD"), Cell::new(join(&options.frame_pds))]);
    table.add_row(vec![Cell::new("Temple"), Cell::new(join(&options.temples))]);
    writeln!(writer, "{table}")
}

pub fn write_thumbnails<W: Write>(cards: &[ThumbnailCard], format: OutputFormat, writer: &mut W) -> std::io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(writer, cards);
    }
    if cards.is_empty() {
        return writeln!(writer, "No frames match the current filters.");
    }
    let mut table = Table::new();
    table.set_header(vec!["Frame", "SKUs", "Badge", "Image", "Link"]);
    for card in cards {
        table.add_row(vec![
            Cell::new(&card.frame_name),
            Cell::new(card.sku_count),
            Cell::new(card.badge.as_ref().map_or("", |b| b.label())),
            Cell::new(card.image.display()),
            Cell::new(&card.link),
        ]);
    }
    writeln!(writer, "{table}")
}

pub fn write_detail<W: Write>(view: &DetailView, format: OutputFormat, writer: &mut W) -> std::io::Result<()> {
    let selector = view.selector();
    let main = view.main_image();
    if format == OutputFormat::Json {
        let doc = json!({
            "frame_name": view.frame_name(),
            "colors": selector.colors(),
            "eye_sizes": selector.eye_sizes(),
            "selected_color": selector.selected_color(),
            "selected_eye_size": selector.selected_eye_size(),
            "variant": view.active_variant().map(|v| v.sku.as_str()),
            "main_image": view.main_image_path(),
            "main_image_alt": main.alt(),
            "back_ordered_overlay": main.overlay_visible,
            "gallery": view.gallery(),
            "skus": view.sku_table(),
        });
        return write_json(writer, &doc);
    }

    writeln!(writer, "{}", view.frame_name())?;
    writeln!(
        writer,
        "Color: {} [{}]   Eye Size: {} [{}]",
        selector.selected_color().unwrap_or("-"),
        join(selector.colors()),
        selector.selected_eye_size().map_or_else(|| "-".to_string(), |s| s.to_string()),
        join(selector.eye_sizes()),
    )?;
    let overlay = if main.overlay_visible { "  BACK ORDERED" } else { "" };
    writeln!(writer, "Image: {} ({}){overlay}", view.main_image_path().display(), main.alt())?;
    let gallery = view.gallery();
    for (i, thumb) in gallery.thumbs().iter().enumerate() {
        let mark = if gallery.selected() == Some(i) { "*" } else { " " };
        writeln!(writer, " {mark} [{i}] {} {}", thumb.filename(), thumb.label())?;
    }

    let mut table = Table::new();
    table.set_header(vec!["SKU", "Color", "Eye Size", "B", "PD", "Temple", "Back Ordered"]);
    for row in view.sku_table() {
        table.add_row(vec![
            Cell::new(&row.sku),
            Cell::new(&row.color),
            Cell::new(row.eye_size),
            Cell::new(row.b),
            Cell::new(row.frame_pd),
            Cell::new(row.temple),
            Cell::new(row.back_ordered),
        ]);
    }
    writeln!(writer, "{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ImageDir;
    use crate::fixtures::sku;
    use crate::views::CatalogView;
    use crate::Catalog;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            sku(json!({ "SKU": "AV-B52" })),
            sku(json!({ "SKU": "AV-G54", "Color": "Gold", "EyeSize": 54, "BackOrdered": true })),
        ])
    }

    #[test]
    fn test_thumbnail_table() {
        let cards = CatalogView::new(catalog(), ImageDir::default()).thumbnails();
        let mut out = Vec::new();
        write_thumbnails(&cards, OutputFormat::Table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Aviator"));
        assert!(text.contains("details.html?frame=Aviator"));

        let mut out = Vec::new();
        write_thumbnails(&[], OutputFormat::Table, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No frames match"));
    }

    #[test]
    fn test_detail_json() {
        let view = DetailView::open(&catalog(), "Aviator", ImageDir::default()).unwrap();
        let mut out = Vec::new();
        write_detail(&view, OutputFormat::Json, &mut out).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["selected_color"], "Black");
        assert_eq!(doc["skus"][1]["back_ordered"], "Yes");
        assert_eq!(doc["colors"], json!(["Black", "Gold"]));
    }

    #[test]
    fn test_options_table() {
        let view = CatalogView::new(catalog(), ImageDir::default());
        let mut out = Vec::new();
        write_options(view.options(), OutputFormat::Table, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("52, 54"));
    }
}
