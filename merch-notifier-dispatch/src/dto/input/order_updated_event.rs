use super::OrderDocument;
use serde::Deserialize;

///
/// Trigger delivery for any update of an order document.
/// Fires for every field edit; the handler decides whether the
/// status actually changed.
///
#[derive(Debug, Deserialize)]
pub struct OrderUpdatedEvent {
    pub order_id: String,
    pub before: OrderDocument,
    pub after: OrderDocument,
}
