pub mod media_model;
