pub mod models;
pub mod moderation;
pub mod service;
pub mod structs;
