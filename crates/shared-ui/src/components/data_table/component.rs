use std::collections::HashMap;

use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::table::{
    clamp_page, filters_accept, page_bounds, page_window, row_matches, total_pages, Column,
    TableFilter,
};

#[derive(Props, Clone, PartialEq)]
pub struct RecordTableProps<T: Clone + PartialEq + 'static> {
    pub items: Vec<T>,
    pub columns: Vec<Column<T>>,
    /// Stable identity for each row, used as the list key.
    pub key_of: fn(&T) -> String,
    #[props(default = "Search...".to_string())]
    pub search_placeholder: String,
    #[props(default)]
    pub filters: Vec<TableFilter>,
    /// Trailing per-row action cell. A function pointer keeps the props
    /// comparable so the table only rerenders when the data changes.
    #[props(default)]
    pub actions: Option<fn(&T) -> Element>,
    #[props(default)]
    pub on_row_click: Option<EventHandler<T>>,
    #[props(default = "No records found.".to_string())]
    pub empty_message: String,
}

/// Searchable, filterable, paginated table over an in-memory collection.
///
/// Search and filter state live inside the component; every keystroke
/// narrows the rows and snaps back to page one. The page is clamped at
/// render time, so a shrinking result set can never leave the view past
/// the end.
pub fn RecordTable<T: Clone + PartialEq + 'static>(props: RecordTableProps<T>) -> Element {
    let RecordTableProps {
        items,
        columns,
        key_of,
        search_placeholder,
        filters,
        actions,
        on_row_click,
        empty_message,
    } = props;

    let mut query = use_signal(String::new);
    let mut selections = use_signal(HashMap::<&'static str, String>::new);
    let mut page = use_signal(|| 1usize);

    let query_now = query.read().clone();
    let selections_now = selections.read().clone();
    let filtered: Vec<T> = items
        .iter()
        .filter(|item| {
            row_matches(&columns, item, &query_now)
                && filters_accept(&columns, &selections_now, item)
        })
        .cloned()
        .collect();

    let count = filtered.len();
    let total = total_pages(count);
    let current = clamp_page(*page.read(), count);
    let (start, end) = page_bounds(count, current);
    let visible: Vec<T> = filtered[start..end].to_vec();

    let span = columns.len() + usize::from(actions.is_some());
    let header_columns = columns.clone();
    let cell_columns = columns;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "record-table",
            div { class: "record-table-toolbar",
                input {
                    class: "record-table-search",
                    r#type: "search",
                    placeholder: "{search_placeholder}",
                    value: "{query_now}",
                    oninput: move |evt| {
                        query.set(evt.value());
                        page.set(1);
                    },
                }
                for filter in filters {
                    select {
                        class: "record-table-filter",
                        "aria-label": filter.label,
                        onchange: move |evt| {
                            selections.write().insert(filter.key, evt.value());
                            page.set(1);
                        },
                        option { value: "", "All {filter.label}" }
                        for opt in filter.options {
                            option { value: *opt, "{opt}" }
                        }
                    }
                }
            }
            div { class: "record-table-scroll",
                table {
                    thead {
                        tr {
                            for column in header_columns {
                                th { "{column.header}" }
                            }
                            if actions.is_some() {
                                th { class: "record-table-actions", "Actions" }
                            }
                        }
                    }
                    tbody {
                        if visible.is_empty() {
                            tr {
                                td {
                                    class: "record-table-empty",
                                    colspan: "{span}",
                                    "{empty_message}"
                                }
                            }
                        }
                        for item in visible {
                            tr {
                                key: "{key_of(&item)}",
                                class: if on_row_click.is_some() { "record-table-row clickable" } else { "record-table-row" },
                                onclick: {
                                    let row = item.clone();
                                    move |_| {
                                        if let Some(handler) = &on_row_click {
                                            handler.call(row.clone());
                                        }
                                    }
                                },
                                for column in cell_columns.clone() {
                                    td {
                                        class: column.class.unwrap_or_default(),
                                        if let Some(render) = column.render {
                                            {render(&item)}
                                        } else {
                                            "{(column.field)(&item)}"
                                        }
                                    }
                                }
                                if let Some(actions) = actions {
                                    td { class: "record-table-actions",
                                        {actions(&item)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if total > 1 {
                div { class: "record-table-pagination",
                    span { class: "record-table-count",
                        "Showing {start + 1} to {end} of {count} results"
                    }
                    div { class: "record-table-pages",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: current <= 1,
                            onclick: move |_| {
                                let now = *page.read();
                                page.set(now.saturating_sub(1).max(1));
                            },
                            "Previous"
                        }
                        for n in page_window(current, total) {
                            Button {
                                variant: if n == current { ButtonVariant::Primary } else { ButtonVariant::Outline },
                                onclick: move |_| page.set(n),
                                "{n}"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: current >= total,
                            onclick: move |_| {
                                let now = *page.read();
                                page.set((now + 1).min(total));
                            },
                            "Next"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq)]
    struct Pupil {
        id: u32,
        name: String,
        class: &'static str,
    }

    fn pupils(n: u32) -> Vec<Pupil> {
        (1..=n)
            .map(|i| Pupil { id: i, name: format!("Student {i}"), class: "8-A" })
            .collect()
    }

    fn pupil_columns() -> Vec<Column<Pupil>> {
        vec![
            Column::new("name", "Name", |p: &Pupil| p.name.clone()),
            Column::new("class", "Class", |p: &Pupil| p.class.to_string()),
        ]
    }

    fn render_roster(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn empty_collection_renders_placeholder_row() {
        fn app() -> Element {
            rsx! {
                RecordTable::<Pupil> {
                    items: vec![],
                    columns: pupil_columns(),
                    key_of: |p: &Pupil| p.id.to_string(),
                    empty_message: "No students enrolled.".to_string(),
                }
            }
        }

        let html = render_roster(app);
        assert!(html.contains("No students enrolled."));
        assert!(html.contains("colspan=\"2\""));
        // No pagination strip without pages.
        assert!(!html.contains("Showing"));
    }

    #[test]
    fn first_page_shows_ten_of_twenty_three() {
        fn app() -> Element {
            rsx! {
                RecordTable::<Pupil> {
                    items: pupils(23),
                    columns: pupil_columns(),
                    key_of: |p: &Pupil| p.id.to_string(),
                }
            }
        }

        let html = render_roster(app);
        assert!(html.contains("Student 1"));
        assert!(html.contains("Student 10"));
        assert!(!html.contains("Student 11<"));
        assert!(html.contains("Showing 1 to 10 of 23 results"));
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
    }

    #[test]
    fn action_column_adds_header_and_widens_empty_row() {
        fn app() -> Element {
            rsx! {
                RecordTable::<Pupil> {
                    items: vec![],
                    columns: pupil_columns(),
                    key_of: |p: &Pupil| p.id.to_string(),
                    actions: (|_p: &Pupil| rsx! { button { "View" } }) as fn(&Pupil) -> Element,
                }
            }
        }

        let html = render_roster(app);
        assert!(html.contains("Actions"));
        assert!(html.contains("colspan=\"3\""));
    }
}
