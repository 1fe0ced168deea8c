#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    ParticipantSignedUp { activity_name: String, email: String },
    ParticipantWithdrawn { activity_name: String, email: String },
}

impl RosterEvent {
    pub fn activity_name(&self) -> &str {
        match self {
            RosterEvent::ParticipantSignedUp { activity_name, .. }
            | RosterEvent::ParticipantWithdrawn { activity_name, .. } => activity_name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            RosterEvent::ParticipantSignedUp { email, .. }
            | RosterEvent::ParticipantWithdrawn { email, .. } => email,
        }
    }

    /// Confirmation shown to the caller once the event has been applied.
    pub fn confirmation(&self) -> String {
        match self {
            RosterEvent::ParticipantSignedUp {
                activity_name,
                email,
            } => format!("Signed up {email} for {activity_name}"),
            RosterEvent::ParticipantWithdrawn {
                activity_name,
                email,
            } => format!("Removed {email} from {activity_name}"),
        }
    }
}
