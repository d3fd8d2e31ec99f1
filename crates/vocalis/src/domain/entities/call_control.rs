//! CallControl - routing for inbound call legs

/// DialInstruction - bridge the current call to a single number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialInstruction {
    pub caller_id: String,
    pub destination: String,
}

impl DialInstruction {
    /// Dial `destination`, or the caller id itself when none is provisioned
    pub fn new(caller_id: impl Into<String>, destination: Option<String>) -> Self {
        let caller_id = caller_id.into();
        let destination = destination.unwrap_or_else(|| caller_id.clone());
        Self {
            caller_id,
            destination,
        }
    }
}
