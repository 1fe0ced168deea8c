use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::RosterEvent;

// Events for another activity leave the roster untouched.
pub fn evolve(mut activity: Activity, event: RosterEvent) -> Activity {
    if activity.name != event.activity_name() {
        return activity;
    }
    match event {
        RosterEvent::ParticipantSignedUp { email, .. } => {
            activity.participants.push(email);
        }
        RosterEvent::ParticipantWithdrawn { email, .. } => {
            if let Some(index) = activity.participants.iter().position(|p| *p == email) {
                activity.participants.remove(index);
            }
        }
    }
    activity
}
