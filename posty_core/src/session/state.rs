use serde::Serialize;
use thiserror::Error;

use crate::types::generated_response::GeneratedResponse;

/// Failures shown to the user. Details of unexpected failures are logged, never carried here.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum SessionError {
    #[error("Veuillez saisir une idée de post.")]
    EmptyPrompt,

    #[error("Limite atteinte : connectez-vous pour continuer à générer des posts.")]
    QuotaExceeded,

    #[error("Une erreur est survenue lors de la génération. Veuillez réessayer.")]
    Generation,

    #[error("Une génération est déjà en cours.")]
    Busy,
}

/// What happened to the post record after a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum PostOutcome {
    /// Guest, or member without a user id.
    #[default]
    NotRequested,
    Saved(String),
    /// The store rejected the write; responses are still shown.
    Unsaved,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    #[default]
    Idle,
    Generating,
    Succeeded {
        post: PostOutcome,
    },
    Failed(SessionError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SessionState {
    pub phase: Phase,
    pub responses: Vec<GeneratedResponse>,
    pub last_prompt: String,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Generating
    }

    pub fn error(&self) -> Option<&SessionError> {
        match &self.phase {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn post_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::Succeeded {
                post: PostOutcome::Saved(id),
            } => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn is_unsaved(&self) -> bool {
        matches!(
            self.phase,
            Phase::Succeeded {
                post: PostOutcome::Unsaved
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle_and_empty() {
        let state = SessionState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.responses.is_empty());
        assert!(state.last_prompt.is_empty());
        assert_eq!(state.error(), None);
        assert_eq!(state.post_id(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_accessors_follow_phase() {
        let state = SessionState {
            phase: Phase::Succeeded {
                post: PostOutcome::Saved("p1".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(state.post_id(), Some("p1"));
        assert_eq!(state.error(), None);

        let state = SessionState {
            phase: Phase::Failed(SessionError::QuotaExceeded),
            ..Default::default()
        };
        assert!(state.error().unwrap().to_string().starts_with("Limite atteinte"));
        assert_eq!(state.post_id(), None);
    }
}
