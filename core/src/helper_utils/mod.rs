pub mod list;

pub use list::{parse_list_items, strip_list_marker};
