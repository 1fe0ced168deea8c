// Pure decision function for withdrawing a student.
//
// The email is matched verbatim against the stored roster. Unlike signup there is
// no normalization, so "  MICHAEL@mergington.edu" does not withdraw
// "michael@mergington.edu".

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::withdraw_from_activity::command::WithdrawFromActivity;

pub fn decide_withdraw(
    activity: &Activity,
    command: WithdrawFromActivity,
) -> Result<RosterEvent, RosterError> {
    if !activity.is_enrolled(&command.email) {
        return Err(RosterError::NotSignedUp);
    }
    Ok(RosterEvent::ParticipantWithdrawn {
        activity_name: activity.name.clone(),
        email: command.email,
    })
}
