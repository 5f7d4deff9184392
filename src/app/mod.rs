pub mod controller;
pub mod credentials;
pub mod enums;
pub mod env;
pub mod errors;
pub mod models;
pub mod router;
pub mod service;
pub mod util;
