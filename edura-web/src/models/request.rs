/// Lifecycle of one kind of request.
///
/// `Fulfilled` and `Rejected` are the two settled outcomes. A new request
/// moves back to `Pending`, which also drops any previous error message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Message of a rejected request.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(message),
            _ => None,
        }
    }
}
