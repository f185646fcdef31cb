use dexview_sdk::types::{CatalogView, ErrorInfo, PageMarker, Record, ViewMode};
use dexview_sdk::utils::{display_name, format_record_id, page_numbers, truncate};
use serde::Serialize;
use std::fmt::Write;

use super::Palette;

const NAME_WIDTH: usize = 16;

/// JSON shape of a catalog screen: the merged read model with the
/// filtered records in place of the raw ones.
#[derive(Debug, Serialize)]
pub struct CatalogOutput<'a> {
    pub mode: ViewMode,
    pub page_index: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub has_more: bool,
    pub error: Option<&'a ErrorInfo>,
    pub loaded_count: usize,
    pub records: &'a [Record],
}

impl<'a> CatalogOutput<'a> {
    pub fn new(view: &'a CatalogView, visible: &'a [Record]) -> Self {
        Self {
            mode: view.mode,
            page_index: view.page_index,
            total_pages: view.total_pages,
            total_count: view.total_count,
            has_more: view.has_more,
            error: view.error.as_ref(),
            loaded_count: view.records.len(),
            records: visible,
        }
    }
}

pub fn render(view: &CatalogView, visible: &[Record], palette: Palette) -> String {
    let mut out = String::new();

    if visible.is_empty() {
        let _ = writeln!(out, "{}", palette.dim("No records match."));
    }
    for record in visible {
        let categories: Vec<&str> = record.categories.iter().map(String::as_str).collect();
        let _ = writeln!(
            out,
            "{}  {:<width$}  {}",
            palette.accent(&format_record_id(record.id)),
            truncate(&display_name(&record.name), NAME_WIDTH - 3),
            palette.dim(&categories.join(", ")),
            width = NAME_WIDTH
        );
    }

    out.push('\n');
    let _ = writeln!(out, "{}", summary_line(view, visible.len()));
    if view.mode == ViewMode::Paged && view.total_pages > 1 {
        let _ = writeln!(out, "Pages: {}", pager(view.page_index, view.total_pages));
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "{} {}", palette.error("Error:"), error);
    }
    out
}

fn summary_line(view: &CatalogView, shown: usize) -> String {
    let loaded = view.records.len();
    match view.mode {
        ViewMode::Paged => format!(
            "Showing {} of {} on page {}/{} ({} total)",
            shown,
            loaded,
            view.page_index + 1,
            view.total_pages.max(1),
            view.total_count
        ),
        ViewMode::Incremental => {
            let more = if view.has_more {
                "more available"
            } else {
                "end of catalog"
            };
            format!(
                "Showing {} of {} loaded ({} total, {})",
                shown, loaded, view.total_count, more
            )
        }
    }
}

/// `1 … 4 [5] 6 … 20`
pub fn pager(current: usize, total_pages: usize) -> String {
    page_numbers(current, total_pages)
        .into_iter()
        .map(|marker| match marker {
            PageMarker::Page(n) if n == current + 1 => format!("[{}]", n),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Gap => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
