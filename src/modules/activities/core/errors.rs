use thiserror::Error;

/// The three ways a roster operation can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Conflict,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::Conflict => "CONFLICT",
        }
    }
}

// Display strings double as the `detail` of REST error bodies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student not signed up for this activity")]
    NotSignedUp,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::ActivityNotFound => ErrorKind::NotFound,
            RosterError::InvalidEmail => ErrorKind::InvalidInput,
            RosterError::AlreadySignedUp | RosterError::NotSignedUp => ErrorKind::Conflict,
        }
    }
}
