pub mod api_status;
pub mod error_code;
