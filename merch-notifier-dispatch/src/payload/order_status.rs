use strum::{Display, EnumString};

///
/// Lifecycle state of an order. Parsed from the raw status string of the
/// order document; states this subsystem does not know fall into [Other]
/// and still produce the generic phrase.
///
/// [Other]: OrderStatus::Other
///
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
    RefundRequested,
    #[strum(default, to_string = "{0}")]
    Other(String),
}

impl OrderStatus {
    pub fn parse(status: &str) -> Self {
        status
            .parse()
            .unwrap_or_else(|_| Self::Other(status.to_string()))
    }
}

///
/// Human-readable phrase appended to "Order #{id} ..." in buyer-facing
/// status notifications.
///
pub fn status_phrase(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Processing => "is being processed",
        OrderStatus::Shipped => "has been shipped",
        OrderStatus::Delivered => "has been delivered",
        OrderStatus::Cancelled => "has been cancelled",
        OrderStatus::Refunded => "has been refunded",
        _ => "has been updated",
    }
}
