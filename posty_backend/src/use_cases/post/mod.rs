pub mod generate_post_use_case;
