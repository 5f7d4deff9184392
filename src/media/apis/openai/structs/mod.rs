pub mod openai_error_response;
pub mod openai_images_response;
pub mod openai_moderation_response;
