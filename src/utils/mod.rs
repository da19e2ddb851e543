pub mod format;
pub mod page;

pub use format::{escape_html, format_js_number, format_timestamp, group_thousands};
pub use page::{Node, Page, Region};
