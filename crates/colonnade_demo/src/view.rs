//! Plain-text rendering of a bound surface tree.
//!
//! Columns are laid out side by side, each sized to its widest cell
//! (capped), padded by display width so wide glyphs line up.

use colonnade::MemorySurface;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns wider than this are truncated with an ellipsis.
const MAX_COLUMN_WIDTH: usize = 24;

/// Spacing between adjacent columns.
const GUTTER: &str = "  ";

/// Renders the surface as a titled, side-by-side column view.
#[must_use]
pub fn render(surface: &MemorySurface) -> String {
    let columns = surface.columns();
    let mut lines = Vec::new();

    let title = surface.title();
    if !title.is_empty() {
        lines.push(title.to_string());
        lines.push(String::new());
    }

    if columns.is_empty() {
        lines.push("(empty table)".to_string());
        return lines.join("\n");
    }

    let widths: Vec<usize> = columns
        .iter()
        .map(|(header, cells)| {
            cells
                .iter()
                .map(|c| c.width())
                .chain([header.width(), 1])
                .max()
                .unwrap_or(1)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    lines.push(row_line(columns.iter().map(|(h, _)| h.as_str()), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(GUTTER),
    );

    let depth = columns.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
    for i in 0..depth {
        lines.push(row_line(
            columns
                .iter()
                .map(|(_, cells)| cells.get(i).map_or("", String::as_str)),
            &widths,
        ));
    }

    lines.join("\n")
}

fn row_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    padded.join(GUTTER).trim_end().to_string()
}

/// Pads text to the given display width, truncating first if needed.
fn pad(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let fill = width.saturating_sub(truncated.width());
    format!("{truncated}{}", " ".repeat(fill))
}

/// Truncates a string to the given display width, adding ellipsis if needed.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use colonnade::{ElementKind, Surface};

    use super::*;

    fn surface_with(title: &str, columns: &[(&str, &[&str])]) -> MemorySurface {
        let mut surface = MemorySurface::new();
        surface.set_title(title);
        for (header, cells) in columns {
            let column = surface.create_element(ElementKind::Column, None);
            surface.set_text(&column, header);
            for cell in *cells {
                let handle = surface.create_element(ElementKind::Cell, Some(&column));
                surface.set_text(&handle, cell);
            }
        }
        surface
    }

    #[test]
    fn renders_title_headers_and_rows() {
        let surface = surface_with(
            "Demo",
            &[("X", &["1", "3"]), ("Y", &["2"])],
        );
        let view = render(&surface);
        let lines: Vec<&str> = view.lines().collect();

        assert_eq!(lines[0], "Demo");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "X  Y");
        assert_eq!(lines[3], "-  -");
        assert_eq!(lines[4], "1  2");
        // Ragged column: Y is exhausted, trailing padding is trimmed.
        assert_eq!(lines[5], "3");
    }

    #[test]
    fn empty_surface_renders_placeholder() {
        let surface = MemorySurface::new();
        assert_eq!(render(&surface), "(empty table)");
    }

    #[test]
    fn untitled_table_skips_title_block() {
        let surface = surface_with("", &[("A", &[])]);
        let view = render(&surface);
        assert!(view.starts_with('A'));
    }

    #[test]
    fn column_width_tracks_widest_cell() {
        let surface = surface_with("", &[("A", &["wide cell"]), ("B", &["x"])]);
        let view = render(&surface);
        let lines: Vec<&str> = view.lines().collect();

        assert_eq!(lines[0], "A          B");
        assert_eq!(lines[1], "---------  -");
        assert_eq!(lines[2], "wide cell  x");
    }

    #[test]
    fn truncates_overlong_cells_with_ellipsis() {
        let long = "x".repeat(MAX_COLUMN_WIDTH + 10);
        let truncated = truncate(&long, MAX_COLUMN_WIDTH);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncated.width(), MAX_COLUMN_WIDTH);
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hi", 2), "Hi");
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn pad_accounts_for_display_width() {
        // Fullwidth characters occupy two cells each.
        let padded = pad("日本", 6);
        assert_eq!(padded.width(), 6);
        assert!(padded.ends_with("  "));
    }
}
