use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("Invalid grid span: {rows} rows x {columns} columns")]
    InvalidSpan { rows: usize, columns: usize },

    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    #[error("Invalid span count {span_count} for page size {page_size}")]
    InvalidSpanCount { span_count: usize, page_size: usize },

    #[error("Layout is not a grid: {0}")]
    NotAGrid(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
