use serde::Deserialize;

///
/// Trigger delivery for a freshly created order document.
///
#[derive(Debug, Deserialize)]
pub struct OrderCreatedEvent {
    pub order_id: String,
    pub order: OrderDocument,
}

///
/// Order snapshot. The status is kept as the raw store string; this
/// subsystem does not own the order schema.
///
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDocument {
    pub buyer_id: String,
    pub seller_id: String,
    #[serde(default)]
    pub status: String,
}
