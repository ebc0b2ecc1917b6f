use crate::dto::input;
use axum::async_trait;

///
/// Entry points for the watched document-store changes.
///
/// None of the handlers fail: notification delivery is advisory and must
/// never surface an error to the store write that triggered it. Every
/// fault is logged and swallowed; the event is not retried.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsService: Send + Sync {
    ///
    /// Notifies the conversation peer of a freshly created message.
    ///
    async fn handle_new_message(&self, event: input::MessageCreatedEvent);

    ///
    /// Notifies seller and buyer of a freshly created order.
    /// The two deliveries are independent of each other.
    ///
    async fn handle_new_order(&self, event: input::OrderCreatedEvent);

    ///
    /// Notifies the buyer of an order status change, and the seller when
    /// the new status requires their attention. Updates that do not change
    /// the status are ignored.
    ///
    async fn handle_order_update(&self, event: input::OrderUpdatedEvent);
}
