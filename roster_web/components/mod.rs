mod layout;

pub use layout::{LayoutBody, wrap_in_html_shell};
