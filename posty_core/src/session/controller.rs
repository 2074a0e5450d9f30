use std::fmt::Debug;
use std::sync::{Arc, RwLock};

use tracing::{debug, error, info, warn};

use crate::error::ErrorCore;
use crate::session::generator::ResponseGenerator;
use crate::session::persistence::PostStore;
use crate::session::quota::GuestQuota;
use crate::session::state::{Phase, PostOutcome, SessionError, SessionState};
use crate::types::caller::Caller;
use crate::types::generated_response::ResponsePair;
use crate::types::post::NewPost;
use crate::utils::rw_lock::RwLockExt;

#[derive(Debug, Default)]
struct Shared {
    state: SessionState,
    /// Bumped by every generation start and every reset; a pipeline only
    /// settles if the epoch it started with is still current.
    epoch: u64,
    /// Set while a pipeline runs, whatever the displayed phase. A reset
    /// leaves it alone, so a second run can never overlap the first.
    in_flight: bool,
}

/// Drives one chat session: `Idle -> Generating -> Succeeded | Failed`.
///
/// Cloning gives another handle on the same session.
#[derive(Clone)]
pub struct ChatSession {
    shared: Arc<RwLock<Shared>>,
    quota: GuestQuota,
    generator: Arc<dyn ResponseGenerator>,
    posts: Arc<dyn PostStore>,
}

impl Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("shared", &self.shared)
            .field("quota", &self.quota)
            .finish()
    }
}

fn state_unavailable(e: ErrorCore) -> SessionError {
    error!("Session state unavailable: {e}");
    SessionError::Generation
}

impl ChatSession {
    pub fn new(
        quota: GuestQuota,
        generator: Arc<dyn ResponseGenerator>,
        posts: Arc<dyn PostStore>,
    ) -> Self {
        ChatSession {
            shared: Arc::new(RwLock::new(Shared::default())),
            quota,
            generator,
            posts,
        }
    }

    pub fn state(&self) -> crate::error::Result<SessionState> {
        Ok(self.shared.read_lock("reading session state")?.state.clone())
    }

    pub fn guest_count(&self) -> u32 {
        self.quota.count()
    }

    pub fn quota(&self) -> &GuestQuota {
        &self.quota
    }

    /// Read from the quota store on every call, never cached.
    pub fn can_generate(&self, caller: &Caller) -> bool {
        !caller.is_guest() || !self.quota.is_exhausted()
    }

    /// Runs one generation for `prompt`.
    ///
    /// A call made while another generation is running is refused with
    /// [`SessionError::Busy`] and leaves the state untouched. Validation and
    /// quota failures never touch the previous responses. Once started, the
    /// generation runs to completion even if the returned future is dropped.
    pub async fn generate(
        &self,
        prompt: &str,
        caller: &Caller,
    ) -> Result<SessionState, SessionError> {
        let prompt = prompt.trim().to_string();

        let epoch = {
            let mut shared = self
                .shared
                .write_lock("starting generation")
                .map_err(state_unavailable)?;

            if shared.in_flight {
                debug!("Generation refused: session busy");
                return Err(SessionError::Busy);
            }
            if prompt.is_empty() {
                shared.state.phase = Phase::Failed(SessionError::EmptyPrompt);
                return Err(SessionError::EmptyPrompt);
            }
            if caller.is_guest() && self.quota.is_exhausted() {
                info!("Guest generation refused: limit reached");
                shared.state.phase = Phase::Failed(SessionError::QuotaExceeded);
                return Err(SessionError::QuotaExceeded);
            }

            shared.state.phase = Phase::Generating;
            shared.state.last_prompt = prompt.clone();
            shared.in_flight = true;
            shared.epoch += 1;
            shared.epoch
        };

        let pipeline = Pipeline {
            shared: self.shared.clone(),
            quota: self.quota.clone(),
            generator: self.generator.clone(),
            posts: self.posts.clone(),
            epoch,
            prompt,
            caller: caller.clone(),
        };

        match tokio::spawn(pipeline.run()).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let e = ErrorCore::from(e);
                error!("{e}");
                let mut shared = self
                    .shared
                    .write_lock("recording aborted generation")
                    .map_err(state_unavailable)?;
                shared.in_flight = false;
                if shared.epoch == epoch {
                    shared.state.phase = Phase::Failed(SessionError::Generation);
                }
                Err(SessionError::Generation)
            }
        }
    }

    /// Back to `Idle` with nothing shown. The guest counter is left alone.
    ///
    /// A generation still in flight finishes its side effects but no longer
    /// updates this session. New generations stay refused with
    /// [`SessionError::Busy`] until it has finished.
    pub fn reset(&self) -> crate::error::Result<SessionState> {
        let mut shared = self.shared.write_lock("resetting session")?;
        shared.state = SessionState::default();
        shared.epoch += 1;
        Ok(shared.state.clone())
    }
}

struct Pipeline {
    shared: Arc<RwLock<Shared>>,
    quota: GuestQuota,
    generator: Arc<dyn ResponseGenerator>,
    posts: Arc<dyn PostStore>,
    epoch: u64,
    prompt: String,
    caller: Caller,
}

impl Pipeline {
    async fn run(self) -> Result<SessionState, SessionError> {
        let responses = match self.generator.generate(&self.prompt).await {
            Ok(responses) => responses,
            Err(e) => {
                error!("Generation failed for prompt {:?}: {e}", self.prompt);
                return self.settle(Phase::Failed(SessionError::Generation), None);
            }
        };

        let post = match &self.caller {
            Caller::Guest => {
                if let Err(e) = self.quota.increment() {
                    error!("Failed to record guest generation: {e}");
                    return self.settle(Phase::Failed(SessionError::Generation), Some(responses));
                }
                PostOutcome::NotRequested
            }
            Caller::Member { user_id: None } => {
                debug!("Member without user id, post not saved");
                PostOutcome::NotRequested
            }
            Caller::Member {
                user_id: Some(user_id),
            } => self.save(user_id, &responses).await,
        };

        self.settle(Phase::Succeeded { post }, Some(responses))
    }

    async fn save(&self, user_id: &str, responses: &ResponsePair) -> PostOutcome {
        let post = NewPost {
            user_id: user_id.to_string(),
            prompt: self.prompt.clone(),
            variant_a: responses.storytelling().content.clone(),
            variant_b: responses.business().content.clone(),
        };
        match self.posts.create_post(post).await {
            Ok(id) => {
                info!("Saved post {id} for user {user_id}");
                PostOutcome::Saved(id)
            }
            Err(e) => {
                error!("Failed to save post for user {user_id}: {e}");
                PostOutcome::Unsaved
            }
        }
    }

    fn settle(
        &self,
        phase: Phase,
        responses: Option<ResponsePair>,
    ) -> Result<SessionState, SessionError> {
        let mut shared = self
            .shared
            .write_lock("settling generation")
            .map_err(state_unavailable)?;
        shared.in_flight = false;

        if shared.epoch != self.epoch {
            warn!("Session was reset during generation, outcome discarded");
            return Ok(shared.state.clone());
        }

        if let Some(responses) = responses {
            shared.state.responses = responses.into();
        }
        shared.state.phase = phase;

        match &shared.state.phase {
            Phase::Failed(error) => Err(error.clone()),
            _ => Ok(shared.state.clone()),
        }
    }
}
