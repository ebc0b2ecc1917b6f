use super::{status_phrase, NotificationPayload, OrderStatus, PlatformHints};

///
/// A data-change event in the backing store, as seen by the notification
/// subsystem. Constructed once by the event handlers, never persisted.
///
#[derive(Debug, Clone)]
pub enum DomainEvent {
    MessageCreated {
        conversation_id: String,
        sender_id: String,
        content: String,
    },
    OrderCreated {
        order_id: String,
        buyer_id: String,
        seller_id: String,
    },
    OrderStatusChanged {
        order_id: String,
        buyer_id: String,
        seller_id: String,
        previous_status: OrderStatus,
        new_status: OrderStatus,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientRole {
    /// Conversation peer of a message sender
    Recipient,
    Buyer,
    Seller,
}

///
/// Builds the notification for one recipient of the event.
///
/// `counterpart_name` is the resolved display name of the other party
/// (message sender, or buyer for seller-facing notifications); a missing
/// name falls back to a placeholder.
///
/// ### Returns
/// [None] when the role receives nothing for this event
///
pub fn build(
    event: &DomainEvent,
    role: RecipientRole,
    counterpart_name: Option<&str>,
) -> Option<NotificationPayload> {
    match (event, role) {
        (
            DomainEvent::MessageCreated {
                conversation_id,
                sender_id,
                content,
            },
            RecipientRole::Recipient,
        ) => {
            let sender_name = counterpart_name.unwrap_or("Someone");
            Some(payload(
                format!("New message from {sender_name}"),
                content.clone(),
                &[
                    ("type", "message"),
                    ("conversationId", conversation_id),
                    ("senderId", sender_id),
                ],
            ))
        }
        (
            DomainEvent::OrderCreated {
                order_id, buyer_id, ..
            },
            RecipientRole::Seller,
        ) => {
            let buyer_name = counterpart_name.unwrap_or("Someone");
            Some(payload(
                "New Order Received".to_string(),
                format!("{buyer_name} placed a new order"),
                &[
                    ("type", "order"),
                    ("orderId", order_id),
                    ("buyerId", buyer_id),
                ],
            ))
        }
        (DomainEvent::OrderCreated { order_id, .. }, RecipientRole::Buyer) => Some(payload(
            "Order Placed Successfully".to_string(),
            format!("Your order #{order_id} has been placed"),
            &[("type", "order"), ("orderId", order_id)],
        )),
        (
            DomainEvent::OrderStatusChanged {
                order_id,
                previous_status,
                new_status,
                ..
            },
            RecipientRole::Buyer,
        ) => {
            if new_status == previous_status {
                return None;
            }

            Some(payload(
                "Order Status Updated".to_string(),
                format!("Order #{order_id} {}", status_phrase(new_status)),
                &[("type", "order"), ("orderId", order_id)],
            ))
        }
        (
            DomainEvent::OrderStatusChanged {
                order_id,
                buyer_id,
                previous_status,
                new_status,
                ..
            },
            RecipientRole::Seller,
        ) => {
            if new_status == previous_status {
                return None;
            }

            let buyer_name = counterpart_name.unwrap_or("A customer");
            let (title, body) = match new_status {
                OrderStatus::Delivered => (
                    "Order Delivered",
                    format!("{buyer_name} has received order #{order_id}"),
                ),
                OrderStatus::RefundRequested => (
                    "Refund Requested",
                    format!("{buyer_name} has requested a refund for order #{order_id}"),
                ),
                // Sellers are only notified about status changes
                // that require their action
                _ => return None,
            };

            Some(payload(
                title.to_string(),
                body,
                &[
                    ("type", "order"),
                    ("orderId", order_id),
                    ("buyerId", buyer_id),
                ],
            ))
        }
        _ => None,
    }
}

fn payload(title: String, body: String, data: &[(&str, &str)]) -> NotificationPayload {
    NotificationPayload {
        title,
        body,
        data: data
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
        hints: PlatformHints::default(),
    }
}
