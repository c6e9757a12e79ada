//! Application layer errors.

use thiserror::Error;

use crate::domain::foundation::{FieldId, SessionId};
use crate::domain::interview::Directive;

/// Errors returned by [`super::InterviewSession`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session {session_id} already ended with {directive}")]
    AlreadyTerminated {
        session_id: SessionId,
        directive: Directive,
    },

    #[error("Session {session_id} cannot store {field} before consent was granted")]
    ConsentRequired {
        session_id: SessionId,
        field: FieldId,
    },
}
