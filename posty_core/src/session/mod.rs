//! Client-side chat session: prompt validation, guest quota, mock generation
//! and optional persistence of the generated post.

pub mod controller;
pub mod generator;
pub mod persistence;
pub mod quota;
pub mod state;
pub mod storage;

pub use controller::ChatSession;
pub use generator::{MockGenerator, ResponseGenerator, mock_responses};
pub use persistence::PostStore;
pub use quota::{GUEST_COUNT_KEY, GUEST_GENERATION_LIMIT, GuestQuota};
pub use state::{Phase, PostOutcome, SessionError, SessionState};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
