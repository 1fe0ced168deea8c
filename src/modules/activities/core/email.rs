// Email handling for roster entries.
//
// Signup normalizes before comparing; withdrawal matches stored values verbatim.

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Weak structural check: an `@` and a `.` must both be present.
pub fn looks_like_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}
