use posty_core::session::{
    GUEST_GENERATION_LIMIT, Phase, PostOutcome, SessionError, SessionState,
};
use posty_core::types::post::Post;

/// Both variants, each under its label, followed by the save status.
pub fn render_state(state: &SessionState) -> String {
    let mut out = String::new();
    for response in &state.responses {
        out.push_str(&format!("── {} ──\n{}\n\n", response.kind, response.content));
    }
    match &state.phase {
        Phase::Succeeded {
            post: PostOutcome::Saved(id),
        } => out.push_str(&format!("✅ Post saved ({id})\n")),
        Phase::Succeeded {
            post: PostOutcome::Unsaved,
        } => out.push_str("⚠️ Post could not be saved\n"),
        Phase::Failed(error) => out.push_str(&format!("⚠️ {error}\n")),
        _ => {}
    }
    out
}

/// A refused or failed `generate` prints its message only.
pub fn render_outcome(outcome: &Result<SessionState, SessionError>) -> String {
    match outcome {
        Ok(state) => render_state(state),
        Err(error) => format!("⚠️ {error}\n"),
    }
}

pub fn render_quota(count: u32) -> String {
    let remaining = GUEST_GENERATION_LIMIT.saturating_sub(count);
    format!("Guest generations: {count}/{GUEST_GENERATION_LIMIT} ({remaining} remaining)")
}

pub fn render_post(post: &Post) -> String {
    format!(
        "{}  {}  {}",
        post.created_at.format("%Y-%m-%d %H:%M"),
        post.id,
        post.prompt
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use posty_core::session::mock_responses;

    #[test]
    fn test_render_saved_state() {
        let state = SessionState {
            phase: Phase::Succeeded {
                post: PostOutcome::Saved("post-1".to_string()),
            },
            responses: mock_responses("idée").to_vec(),
            last_prompt: "idée".to_string(),
        };
        let out = render_state(&state);
        assert!(out.contains("── storytelling ──"));
        assert!(out.contains("── business ──"));
        assert!(out.contains("post-1"));
    }

    #[test]
    fn test_render_failed_state_shows_message() {
        let state = SessionState {
            phase: Phase::Failed(SessionError::QuotaExceeded),
            ..SessionState::default()
        };
        assert!(render_state(&state).contains("Limite atteinte"));
    }

    #[test]
    fn test_render_outcome_reports_refusals() {
        assert_eq!(
            render_outcome(&Err(SessionError::Busy)),
            "⚠️ Une génération est déjà en cours.\n"
        );
        let state = SessionState {
            phase: Phase::Succeeded {
                post: PostOutcome::NotRequested,
            },
            responses: mock_responses("idée").to_vec(),
            last_prompt: "idée".to_string(),
        };
        assert_eq!(render_outcome(&Ok(state.clone())), render_state(&state));
    }

    #[test]
    fn test_render_quota() {
        assert_eq!(render_quota(0), "Guest generations: 0/2 (2 remaining)");
        assert_eq!(render_quota(5), "Guest generations: 5/2 (0 remaining)");
    }
}
