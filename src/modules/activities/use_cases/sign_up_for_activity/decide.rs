// Pure decision function for signing a student up.
//
// The caller has already resolved the activity; an unknown activity never reaches here.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::email::{looks_like_email, normalize_email};
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(
    activity: &Activity,
    command: SignUpForActivity,
) -> Result<RosterEvent, RosterError> {
    let email = normalize_email(&command.email);
    if !looks_like_email(&email) {
        return Err(RosterError::InvalidEmail);
    }
    if activity.is_enrolled(&email) {
        return Err(RosterError::AlreadySignedUp);
    }
    Ok(RosterEvent::ParticipantSignedUp {
        activity_name: activity.name.clone(),
        email,
    })
}
