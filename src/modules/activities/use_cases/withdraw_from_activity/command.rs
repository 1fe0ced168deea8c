#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawFromActivity {
    pub activity_name: String,
    pub email: String,
}
