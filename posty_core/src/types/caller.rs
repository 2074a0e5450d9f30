use serde::{Deserialize, Serialize};

/// Who is asking for a generation, as reported by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Caller {
    Guest,
    Member { user_id: Option<String> },
}

impl Caller {
    /// Builds a caller from the `{ userId, isGuest }` pair handed over by the auth provider.
    pub fn from_parts(user_id: Option<String>, is_guest: bool) -> Self {
        if is_guest {
            Caller::Guest
        } else {
            Caller::Member {
                user_id: user_id.filter(|id| !id.trim().is_empty()),
            }
        }
    }

    pub fn member(user_id: impl Into<String>) -> Self {
        Caller::Member {
            user_id: Some(user_id.into()),
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Caller::Guest)
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Caller::Guest => None,
            Caller::Member { user_id } => user_id.as_deref(),
        }
    }
}
