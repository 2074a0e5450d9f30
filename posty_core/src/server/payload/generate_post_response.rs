use serde::{Deserialize, Serialize};

use crate::types::generated_response::ResponsePair;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratePostResponse {
    pub responses: ResponsePair,
}
