pub mod api_client;
pub mod enums;
pub mod errors;
pub mod session;
