//! Terminal rendering of dashboard snapshots.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_core::{Catalog, DashboardSnapshot};
use catalog_model::{CategoryCounts, RankedList, YearSeries};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn counts_table(label: &str, rows: impl IntoIterator<Item = (String, usize)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Titles")]);
    apply_table_style(&mut table);
    let mut empty = true;
    for (value, count) in rows {
        empty = false;
        table.add_row(vec![Cell::new(value), Cell::new(count)]);
    }
    if empty {
        table.add_row(vec![dim_cell("(none)"), dim_cell("-")]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

pub fn distribution_table(counts: &CategoryCounts) -> Table {
    counts_table(
        "Type",
        counts.iter().map(|(label, count)| (label.to_string(), count)),
    )
}

pub fn additions_table(series: &YearSeries) -> Table {
    counts_table(
        "Year added",
        series
            .points()
            .iter()
            .map(|(year, count)| (year.to_string(), *count)),
    )
}

pub fn ranking_table(label: &str, ranked: &RankedList) -> Table {
    counts_table(label, ranked.entries().iter().cloned())
}

/// Observed types with their title counts across the whole catalog.
pub fn types_table(catalog: &Catalog) -> Table {
    let rows: Vec<(String, usize)> = catalog
        .content_types()
        .into_iter()
        .map(|content_type| {
            let count = catalog
                .records()
                .iter()
                .filter(|r| r.content_type.as_deref() == Some(content_type))
                .count();
            (content_type.to_string(), count)
        })
        .collect();
    counts_table("Type", rows)
}

/// Every section of the snapshot as text, preview first.
pub fn render_snapshot(snapshot: &DashboardSnapshot, preview: &str) -> String {
    let criteria = &snapshot.criteria;
    let types: Vec<&str> = criteria.allowed_types.iter().map(String::as_str).collect();
    let types = if types.is_empty() {
        "(none)".to_string()
    } else {
        types.join(", ")
    };

    let mut out = String::new();
    out.push_str(&format!("Types: {types}\n"));
    out.push_str(&format!("Release years: {}\n", criteria.year_range));
    out.push_str(&format!(
        "Shape: {} rows x {} columns\n\n",
        snapshot.row_count, snapshot.column_count
    ));
    out.push_str(preview);
    out.push_str("\n\nContent types\n");
    out.push_str(&distribution_table(&snapshot.type_distribution).to_string());
    out.push_str("\n\nTitles added per year\n");
    out.push_str(&additions_table(&snapshot.additions_by_year).to_string());
    for (title, label, ranked) in [
        ("Top genres", "Genre", &snapshot.top_genres),
        ("Top countries", "Country", &snapshot.top_countries),
        ("Top directors", "Director", &snapshot.top_directors),
    ] {
        out.push_str(&format!("\n\n{title}\n"));
        out.push_str(&ranking_table(label, ranked).to_string());
    }
    out.push_str(&format!(
        "\n\nCast corpus: {} names\n",
        snapshot.cast_corpus.token_count
    ));
    out
}

/// Pretty JSON for machine consumers.
pub fn snapshot_json(snapshot: &DashboardSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}
