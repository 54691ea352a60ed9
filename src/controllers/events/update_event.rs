use std::time::Duration;

use crate::controllers::session::session_id::SessionId;

/// A state change applied on the update context.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateEvent {
    VerticesAppended {
        session: SessionId,
        appended: usize,
        total: usize,
        elapsed: Duration,
    },
    VerticesErased {
        session: SessionId,
    },
    SessionEnabled {
        session: SessionId,
        enabled: bool,
    },
    BatchEnabled {
        enabled: bool,
    },
}

impl UpdateEvent {
    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        match self {
            Self::VerticesAppended { session, .. }
            | Self::VerticesErased { session }
            | Self::SessionEnabled { session, .. } => Some(*session),
            Self::BatchEnabled { .. } => None,
        }
    }
}
