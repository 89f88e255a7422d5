//! Presentation model for paginated tables.
//!
//! A [`DataTable`] turns rows into string cells through per-column renderers
//! and decides what the view shows: a loading placeholder, the empty message,
//! or rows plus an optional pagination footer.

use serde::Serialize;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

type CellRenderer<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

pub struct Column<T> {
    pub key: &'static str,
    pub header: &'static str,
    render: CellRenderer<T>,
}

impl<T> Column<T> {
    pub fn new<F>(key: &'static str, header: &'static str, render: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            key,
            header,
            render: Box::new(render),
        }
    }

    pub fn render(&self, item: &T) -> String {
        (self.render)(item)
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .finish()
    }
}

/// What the table area displays.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum TableState {
    Loading,
    Empty(String),
    Rows,
}

/// Footer shown under a table with more than one page.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationFooter {
    pub label: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Rendered headers and cells.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TableBody {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub struct DataTable<'a, T> {
    columns: &'a [Column<T>],
    rows: &'a [T],
    loading: bool,
    current_page: u64,
    total_pages: u64,
    empty_message: String,
}

impl<'a, T> DataTable<'a, T> {
    pub fn new(columns: &'a [Column<T>], rows: &'a [T]) -> Self {
        Self {
            columns,
            rows,
            loading: false,
            current_page: 1,
            total_pages: 1,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn pages(mut self, current_page: u64, total_pages: u64) -> Self {
        self.current_page = current_page;
        self.total_pages = total_pages;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Loading wins over emptiness.
    pub fn state(&self) -> TableState {
        if self.loading {
            TableState::Loading
        } else if self.rows.is_empty() {
            TableState::Empty(self.empty_message.clone())
        } else {
            TableState::Rows
        }
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn footer_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }

    /// The footer, only when rows are shown and there is more than one page.
    pub fn footer(&self) -> Option<PaginationFooter> {
        if self.state() != TableState::Rows || !self.show_pagination() {
            return None;
        }
        Some(PaginationFooter {
            label: self.footer_label(),
            prev_disabled: self.prev_disabled(),
            next_disabled: self.next_disabled(),
        })
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.header.to_string()).collect()
    }

    pub fn body(&self) -> TableBody {
        let rows = self
            .rows
            .iter()
            .map(|row| self.columns.iter().map(|c| c.render(row)).collect())
            .collect();
        TableBody {
            headers: self.headers(),
            rows,
        }
    }
}
