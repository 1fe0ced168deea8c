#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: String,
    // As typed by the student; normalized by the decider.
    pub email: String,
}
