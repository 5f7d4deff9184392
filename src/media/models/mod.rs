pub mod dimensions;
pub mod generate_media_response;
pub mod media_models_response;
