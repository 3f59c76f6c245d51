pub mod api_utils;
pub mod date_utils;
pub mod format_utils;
pub mod http;
pub mod message;
