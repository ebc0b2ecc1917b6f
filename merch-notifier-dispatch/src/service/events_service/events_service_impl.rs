use super::EventsService;
use crate::{
    dto::input,
    payload::{self, DomainEvent, OrderStatus, RecipientRole},
    repository::{
        ConversationsRepository, NewNotificationRecord, NotificationType, UsersRepository,
    },
    service::dispatch_service::DispatchService,
};
use axum::async_trait;
use std::sync::Arc;

pub struct EventsServiceImpl {
    conversations_repository: Arc<dyn ConversationsRepository>,
    users_repository: Arc<dyn UsersRepository>,
    dispatch_service: Arc<dyn DispatchService>,
}

impl EventsServiceImpl {
    pub fn new(
        conversations_repository: Arc<dyn ConversationsRepository>,
        users_repository: Arc<dyn UsersRepository>,
        dispatch_service: Arc<dyn DispatchService>,
    ) -> Self {
        Self {
            conversations_repository,
            users_repository,
            dispatch_service,
        }
    }

    async fn try_handle_new_message(
        &self,
        event: &input::MessageCreatedEvent,
    ) -> anyhow::Result<()> {
        let Some(participants) = self
            .conversations_repository
            .find_participants(&event.conversation_id)
            .await?
        else {
            tracing::info!("conversation not found");
            return Ok(());
        };

        let Some(recipient_id) = participants
            .iter()
            .find(|participant| **participant != event.message.sender_id)
        else {
            tracing::warn!("recipient not found among conversation participants");
            return Ok(());
        };

        let Some(token) = self.users_repository.find_device_token(recipient_id).await? else {
            tracing::info!(%recipient_id, "no device token registered for recipient");
            return Ok(());
        };

        let sender_name = self
            .users_repository
            .find_display_name(&event.message.sender_id)
            .await?;

        let domain_event = DomainEvent::MessageCreated {
            conversation_id: event.conversation_id.clone(),
            sender_id: event.message.sender_id.clone(),
            content: event.message.content.clone(),
        };
        let Some(notification) =
            payload::build(&domain_event, RecipientRole::Recipient, sender_name.as_deref())
        else {
            return Ok(());
        };

        let record = NewNotificationRecord {
            user_id: recipient_id.clone(),
            title: notification.title.clone(),
            message: notification.body.clone(),
            notification_type: NotificationType::Message,
            context_id: event.conversation_id.clone(),
        };
        self.dispatch_service
            .notify_and_record(recipient_id, Some(&token), &notification, record)
            .await;

        Ok(())
    }

    async fn try_notify_seller_of_new_order(
        &self,
        event: &input::OrderCreatedEvent,
    ) -> anyhow::Result<()> {
        let seller_id = &event.order.seller_id;

        let Some(token) = self.users_repository.find_device_token(seller_id).await? else {
            tracing::info!(%seller_id, "no device token registered for seller");
            return Ok(());
        };

        let buyer_name = self
            .users_repository
            .find_display_name(&event.order.buyer_id)
            .await?;

        let domain_event = Self::order_created_event(event);
        let Some(notification) =
            payload::build(&domain_event, RecipientRole::Seller, buyer_name.as_deref())
        else {
            return Ok(());
        };

        let record = NewNotificationRecord {
            user_id: seller_id.clone(),
            title: notification.title.clone(),
            message: notification.body.clone(),
            notification_type: NotificationType::OrderUpdate,
            context_id: event.order_id.clone(),
        };
        self.dispatch_service
            .notify_and_record(seller_id, Some(&token), &notification, record)
            .await;

        Ok(())
    }

    async fn try_notify_buyer_of_new_order(
        &self,
        event: &input::OrderCreatedEvent,
    ) -> anyhow::Result<()> {
        let buyer_id = &event.order.buyer_id;

        let Some(token) = self.users_repository.find_device_token(buyer_id).await? else {
            tracing::info!(%buyer_id, "no device token registered for buyer");
            return Ok(());
        };

        let domain_event = Self::order_created_event(event);
        let Some(notification) = payload::build(&domain_event, RecipientRole::Buyer, None) else {
            return Ok(());
        };

        let record = NewNotificationRecord {
            user_id: buyer_id.clone(),
            title: notification.title.clone(),
            message: notification.body.clone(),
            notification_type: NotificationType::OrderUpdate,
            context_id: event.order_id.clone(),
        };
        self.dispatch_service
            .notify_and_record(buyer_id, Some(&token), &notification, record)
            .await;

        Ok(())
    }

    async fn try_notify_buyer_of_status_change(
        &self,
        event: &input::OrderUpdatedEvent,
    ) -> anyhow::Result<()> {
        let buyer_id = &event.after.buyer_id;

        let Some(token) = self.users_repository.find_device_token(buyer_id).await? else {
            tracing::info!(%buyer_id, "no device token registered for buyer");
            return Ok(());
        };

        let domain_event = Self::order_status_changed_event(event);
        let Some(notification) = payload::build(&domain_event, RecipientRole::Buyer, None) else {
            return Ok(());
        };

        let record = NewNotificationRecord {
            user_id: buyer_id.clone(),
            title: notification.title.clone(),
            message: notification.body.clone(),
            notification_type: NotificationType::OrderUpdate,
            context_id: event.order_id.clone(),
        };
        self.dispatch_service
            .notify_and_record(buyer_id, Some(&token), &notification, record)
            .await;

        Ok(())
    }

    async fn try_notify_seller_of_status_change(
        &self,
        event: &input::OrderUpdatedEvent,
    ) -> anyhow::Result<()> {
        let new_status = OrderStatus::parse(&event.after.status);
        if !matches!(
            new_status,
            OrderStatus::Delivered | OrderStatus::RefundRequested
        ) {
            return Ok(());
        }

        let seller_id = &event.after.seller_id;

        let Some(token) = self.users_repository.find_device_token(seller_id).await? else {
            tracing::info!(%seller_id, "no device token registered for seller");
            return Ok(());
        };

        // Buyer name is only needed for the seller-facing templates
        let buyer_name = self
            .users_repository
            .find_display_name(&event.after.buyer_id)
            .await?;

        let domain_event = Self::order_status_changed_event(event);
        let Some(notification) =
            payload::build(&domain_event, RecipientRole::Seller, buyer_name.as_deref())
        else {
            return Ok(());
        };

        let record = NewNotificationRecord {
            user_id: seller_id.clone(),
            title: notification.title.clone(),
            message: notification.body.clone(),
            notification_type: NotificationType::OrderUpdate,
            context_id: event.order_id.clone(),
        };
        self.dispatch_service
            .notify_and_record(seller_id, Some(&token), &notification, record)
            .await;

        Ok(())
    }

    fn order_created_event(event: &input::OrderCreatedEvent) -> DomainEvent {
        DomainEvent::OrderCreated {
            order_id: event.order_id.clone(),
            buyer_id: event.order.buyer_id.clone(),
            seller_id: event.order.seller_id.clone(),
        }
    }

    fn order_status_changed_event(event: &input::OrderUpdatedEvent) -> DomainEvent {
        DomainEvent::OrderStatusChanged {
            order_id: event.order_id.clone(),
            buyer_id: event.after.buyer_id.clone(),
            seller_id: event.after.seller_id.clone(),
            previous_status: OrderStatus::parse(&event.before.status),
            new_status: OrderStatus::parse(&event.after.status),
        }
    }
}

#[async_trait]
impl EventsService for EventsServiceImpl {
    #[tracing::instrument(
        name = "New Message",
        skip_all,
        fields(
            conversation_id = %event.conversation_id,
            message_id = %event.message_id,
        )
    )]
    async fn handle_new_message(&self, event: input::MessageCreatedEvent) {
        tracing::info!("processing new message");

        if let Err(err) = self.try_handle_new_message(&event).await {
            tracing::error!(%err, "failed to process new message");
        }

        tracing::info!("new message processed");
    }

    #[tracing::instrument(
        name = "New Order",
        skip_all,
        fields(order_id = %event.order_id)
    )]
    async fn handle_new_order(&self, event: input::OrderCreatedEvent) {
        tracing::info!("processing new order");

        // Seller and buyer deliveries are unrelated;
        // one branch failing must not suppress the other
        if let Err(err) = self.try_notify_seller_of_new_order(&event).await {
            tracing::error!(%err, "failed to notify seller of new order");
        }
        if let Err(err) = self.try_notify_buyer_of_new_order(&event).await {
            tracing::error!(%err, "failed to notify buyer of new order");
        }

        tracing::info!("new order processed");
    }

    #[tracing::instrument(
        name = "Order Update",
        skip_all,
        fields(order_id = %event.order_id)
    )]
    async fn handle_order_update(&self, event: input::OrderUpdatedEvent) {
        // The trigger fires for every field edit
        if event.after.status == event.before.status {
            return;
        }

        tracing::info!(
            previous_status = %event.before.status,
            new_status = %event.after.status,
            "processing order status change",
        );

        if let Err(err) = self.try_notify_buyer_of_status_change(&event).await {
            tracing::error!(%err, "failed to notify buyer of status change");
        }
        if let Err(err) = self.try_notify_seller_of_status_change(&event).await {
            tracing::error!(%err, "failed to notify seller of status change");
        }

        tracing::info!("order status change processed");
    }
}
