use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::server::default_config::generation_latency;
use crate::types::generated_response::ResponsePair;

#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<ResponsePair>;
}

/// Placeholder for a real generation backend: two canned LinkedIn posts built around the prompt.
pub fn mock_responses(prompt: &str) -> ResponsePair {
    let idea = prompt.trim();

    let storytelling = format!(
        "Il y a un an, je n'aurais jamais imaginé écrire ces lignes.\n\n\
         Tout a commencé par une idée simple : {idea}.\n\n\
         Des doutes, des nuits courtes, des « non » à répétition... \
         et puis, un matin, le déclic.\n\n\
         Ce que j'en retiens ? Les projets qui comptent naissent rarement dans le confort.\n\n\
         Et vous, quelle idée attend encore que vous lui donniez sa chance ? 👇"
    );

    let business = format!(
        "📈 {idea}\n\n\
         3 enseignements concrets à partager :\n\n\
         1️⃣ Partir du problème client, pas de la solution.\n\
         2️⃣ Mesurer tôt, itérer vite.\n\
         3️⃣ S'entourer des bonnes personnes.\n\n\
         Le résultat : plus de clarté, plus d'impact, et une équipe alignée.\n\n\
         Intéressé(e) par le sujet ? Parlons-en en commentaire. \
         #entrepreneuriat #croissance #leadership"
    );

    ResponsePair::new(storytelling, business)
}

/// [`mock_responses`] behind a fixed artificial latency that stands in for a network round-trip.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    latency: Duration,
}

impl MockGenerator {
    pub fn new(latency: Duration) -> Self {
        MockGenerator { latency }
    }

    /// Latency taken from `POSTY_GENERATION_LATENCY_MS`.
    pub fn from_env() -> Self {
        MockGenerator::new(generation_latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        MockGenerator::from_env()
    }
}

#[async_trait]
impl ResponseGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<ResponsePair> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        debug!("Mock generation done after {:?}", self.latency);
        Ok(mock_responses(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::generated_response::ResponseKind;

    #[test]
    fn test_mock_responses_has_one_of_each_kind() {
        let pair = mock_responses("Je lance un nouveau produit");
        let kinds: Vec<ResponseKind> = pair.to_vec().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ResponseKind::Storytelling, ResponseKind::Business]);
    }

    #[test]
    fn test_mock_responses_mention_the_prompt() {
        let pair = mock_responses("  recrutement d'un CTO  ");
        assert!(pair.storytelling().content.contains("recrutement d'un CTO."));
        assert!(pair.business().content.starts_with("📈 recrutement d'un CTO\n"));
    }

    #[test]
    fn test_mock_responses_are_deterministic() {
        assert_eq!(mock_responses("idée"), mock_responses("idée"));
    }

    #[tokio::test]
    async fn test_mock_generator_without_latency() {
        let generator = MockGenerator::new(Duration::ZERO);
        let pair = generator.generate("idée").await.unwrap();
        assert_eq!(pair, mock_responses("idée"));
    }
}
