use crate::{
    application::ApplicationState,
    dto::input::{MessageCreatedEvent, OrderCreatedEvent, OrderUpdatedEvent},
};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/triggers/messages", post(new_message))
        .route("/triggers/orders", post(new_order))
        .route("/triggers/order-updates", post(order_update))
}

async fn new_message(
    State(state): State<ApplicationState>,
    Json(event): Json<MessageCreatedEvent>,
) -> StatusCode {
    state.events_service.handle_new_message(event).await;
    StatusCode::NO_CONTENT
}

async fn new_order(
    State(state): State<ApplicationState>,
    Json(event): Json<OrderCreatedEvent>,
) -> StatusCode {
    state.events_service.handle_new_order(event).await;
    StatusCode::NO_CONTENT
}

async fn order_update(
    State(state): State<ApplicationState>,
    Json(event): Json<OrderUpdatedEvent>,
) -> StatusCode {
    state.events_service.handle_order_update(event).await;
    StatusCode::NO_CONTENT
}
