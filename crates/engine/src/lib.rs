pub mod formatter;
pub mod selection;
pub mod validator;

pub use formatter::{format_status, parse_record, render};
pub use selection::select_records;
pub use validator::validate_response;
