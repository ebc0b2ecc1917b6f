///
/// Terminal result of one best-effort delivery attempt.
/// There is no retry: a failed attempt ends here.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The gateway accepted the message; a record may be persisted
    Delivered,
    /// The token is permanently unusable and its registration was
    /// scheduled for deletion
    InvalidTarget,
    /// Anything else: missing token, network fault, gateway rejection
    TransientFailure,
}
