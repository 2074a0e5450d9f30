use crate::application::post::service::PostService;
use crate::domain::post::repository::PostRepository;
use crate::use_cases::post::generate_post_use_case::GeneratePostUseCase;
use posty_core::session::ResponseGenerator;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct AppState {
    pub service_post: Arc<PostService>,
    pub use_case_generate_post: Arc<GeneratePostUseCase>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, generator: Arc<dyn ResponseGenerator>) -> Self {
        let repo_post = Arc::new(PostRepository::new(Arc::new(db)));
        AppState {
            service_post: Arc::new(PostService::new(repo_post)),
            use_case_generate_post: Arc::new(GeneratePostUseCase::new(generator)),
        }
    }
}
