use std::sync::Arc;

use crate::error::{ErrorBackend, Result};
use posty_core::server::payload::generate_post_request::GeneratePostRequest;
use posty_core::session::ResponseGenerator;
use posty_core::types::generated_response::ResponsePair;
use tracing::debug;

pub struct GeneratePostUseCase {
    generator: Arc<dyn ResponseGenerator>,
}

impl GeneratePostUseCase {
    pub fn new(generator: Arc<dyn ResponseGenerator>) -> Self {
        GeneratePostUseCase { generator }
    }

    pub async fn generate(&self, req: GeneratePostRequest) -> Result<ResponsePair> {
        let prompt = req.prompt.trim();
        if prompt.is_empty() {
            return Err(ErrorBackend::EmptyPrompt);
        }
        debug!("Generating posts for prompt {prompt:?}");
        let responses = self.generator.generate(prompt).await?;
        Ok(responses)
    }
}
