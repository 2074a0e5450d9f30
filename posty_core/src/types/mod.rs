pub mod caller;
pub mod generated_response;
pub mod post;
