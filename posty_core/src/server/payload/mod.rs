pub mod create_post_request;
pub mod generate_post_request;
pub mod generate_post_response;
