//! Pure logic behind the generic tabular view: column projection, search,
//! discrete filters, and page math. Kept free of rendering so the behavior
//! is unit-testable; `RecordTable` composes these over its local state.

use std::collections::HashMap;

use dioxus::prelude::*;

/// Fixed page size for every table instance.
pub const ITEMS_PER_PAGE: usize = 10;

/// Declares how one column is labeled, projected, and rendered.
///
/// `field` is the plain projection used for search and as the default cell
/// text; `render` takes precedence for display when present. Both are
/// function-valued fields, not trait objects.
pub struct Column<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub field: fn(&T) -> String,
    pub render: Option<fn(&T) -> Element>,
    pub class: Option<&'static str>,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, header: &'static str, field: fn(&T) -> String) -> Self {
        Column { key, header, field, render: None, class: None }
    }

    /// Custom cell renderer; wins over `field` for display purposes.
    pub fn render(mut self, render: fn(&T) -> Element) -> Self {
        self.render = Some(render);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

// Manual impls: deriving would put unnecessary bounds on `T`, which only
// appears behind function pointers here.
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.header == other.header
            && self.field == other.field
            && self.render == other.render
            && self.class == other.class
    }
}

/// A discrete filter over one column's projection. `key` names the column
/// whose `field` output the selected option is compared against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableFilter {
    pub key: &'static str,
    pub label: &'static str,
    pub options: &'static [&'static str],
}

/// Case-insensitive substring match across every column projection of a
/// row. An empty or whitespace query matches everything.
pub fn row_matches<T>(columns: &[Column<T>], item: &T, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    columns.iter().any(|column| (column.field)(item).to_lowercase().contains(&query))
}

/// Apply the selected filter options to a row. An empty selection or a
/// selection naming an unknown column is inert.
pub fn filters_accept<T>(
    columns: &[Column<T>],
    selections: &HashMap<&'static str, String>,
    item: &T,
) -> bool {
    selections.iter().all(|(key, value)| {
        if value.is_empty() {
            return true;
        }
        match columns.iter().find(|column| column.key == *key) {
            Some(column) => (column.field)(item).eq_ignore_ascii_case(value),
            None => true,
        }
    })
}

/// Total pages for a row count; zero rows means zero pages.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(ITEMS_PER_PAGE)
}

/// Clamp a 1-based page into range for the given row count, so a shrunken
/// filtered set can never strand the view past the last page.
pub fn clamp_page(page: usize, count: usize) -> usize {
    page.clamp(1, total_pages(count).max(1))
}

/// Half-open row range `[start, end)` shown on a 1-based page.
pub fn page_bounds(count: usize, page: usize) -> (usize, usize) {
    let start = ((page - 1) * ITEMS_PER_PAGE).min(count);
    (start, (start + ITEMS_PER_PAGE).min(count))
}

/// The sliding window of page buttons: at most five numbers centered on
/// the current page, clamped to the valid range.
pub fn page_window(current: usize, total: usize) -> std::ops::RangeInclusive<usize> {
    let lo = current.saturating_sub(2).max(1);
    let hi = (current + 2).min(total);
    lo..=hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone, PartialEq)]
    struct Row {
        name: &'static str,
        class: &'static str,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "Name", |r: &Row| r.name.to_string()),
            Column::new("class", "Class", |r: &Row| r.class.to_string()),
        ]
    }

    #[test]
    fn twenty_three_rows_make_three_pages() {
        assert_eq!(total_pages(23), 3);
        assert_eq!(page_bounds(23, 1), (0, 10));
        assert_eq!(page_bounds(23, 2), (10, 20));
        // Page 3 shows rows 21-23.
        assert_eq!(page_bounds(23, 3), (20, 23));
    }

    #[test]
    fn zero_rows_make_zero_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(page_bounds(0, 1), (0, 0));
    }

    #[test]
    fn page_clamps_into_valid_range() {
        assert_eq!(clamp_page(0, 23), 1);
        assert_eq!(clamp_page(7, 23), 3);
        // Empty collections still report page 1.
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn page_window_is_centered_and_clamped() {
        assert_eq!(page_window(1, 10).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(page_window(5, 10).collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10).collect::<Vec<_>>(), vec![8, 9, 10]);
        assert_eq!(page_window(1, 1).collect::<Vec<_>>(), vec![1]);
        assert!(page_window(1, 0).collect::<Vec<_>>().is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows =
            [Row { name: "Aarav Sharma", class: "8-A" }, Row { name: "Rohan Gupta", class: "9-B" }];
        let cols = columns();
        let matched: Vec<&str> = rows
            .iter()
            .filter(|r| row_matches(&cols, r, "aar"))
            .map(|r| r.name)
            .collect();
        assert_eq!(matched, vec!["Aarav Sharma"]);
    }

    #[test]
    fn search_spans_every_column_projection() {
        let row = Row { name: "Aarav Sharma", class: "8-A" };
        let cols = columns();
        assert!(row_matches(&cols, &row, "8-a"));
        assert!(!row_matches(&cols, &row, "9-b"));
    }

    #[test]
    fn blank_query_matches_everything() {
        let row = Row { name: "Aarav Sharma", class: "8-A" };
        assert!(row_matches(&columns(), &row, ""));
        assert!(row_matches(&columns(), &row, "   "));
    }

    #[test]
    fn filters_match_projection_case_insensitively() {
        let cols = columns();
        let row = Row { name: "Aarav Sharma", class: "8-A" };
        let mut selections = HashMap::new();

        selections.insert("class", "8-a".to_string());
        assert!(filters_accept(&cols, &selections, &row));

        selections.insert("class", "9-B".to_string());
        assert!(!filters_accept(&cols, &selections, &row));
    }

    #[test]
    fn empty_or_unknown_filter_selections_are_inert() {
        let cols = columns();
        let row = Row { name: "Aarav Sharma", class: "8-A" };
        let mut selections = HashMap::new();

        selections.insert("class", String::new());
        assert!(filters_accept(&cols, &selections, &row));

        selections.insert("nonexistent", "whatever".to_string());
        assert!(filters_accept(&cols, &selections, &row));
    }

    #[test]
    fn render_takes_precedence_is_declared_not_inferred() {
        // The column keeps its plain projection for search even when a
        // custom renderer is attached.
        let col = Column::new("name", "Name", |r: &Row| r.name.to_string())
            .render(|_| rsx! { span { "custom" } });
        assert!(col.render.is_some());
        assert_eq!((col.field)(&Row { name: "Aarav", class: "8-A" }), "Aarav");
    }
}
