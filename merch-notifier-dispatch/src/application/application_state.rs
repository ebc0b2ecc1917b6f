use super::ApplicationEnv;
use crate::{
    gateway::{FcmPushGateway, FcmPushGatewayConfig, PushGateway},
    repository::{
        ConversationsRepository, ConversationsRepositoryImpl, NotificationsRepository,
        NotificationsRepositoryImpl, UsersRepository, UsersRepositoryImpl,
    },
    service::{
        dispatch_service::{DispatchService, DispatchServiceImpl},
        events_service::{EventsService, EventsServiceImpl},
    },
};
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub events_service: Arc<dyn EventsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let conversations_repository: Arc<dyn ConversationsRepository> =
        Arc::new(ConversationsRepositoryImpl::new(db.clone()));
    let users_repository: Arc<dyn UsersRepository> = Arc::new(UsersRepositoryImpl::new(db.clone()));
    let notifications_repository: Arc<dyn NotificationsRepository> =
        Arc::new(NotificationsRepositoryImpl::new(db).await?);

    tracing::info!("creating push gateway");
    let push_gateway: Arc<dyn PushGateway> = Arc::new(FcmPushGateway::new(FcmPushGatewayConfig {
        send_url: env.fcm_send_url.clone(),
        bearer_token: env.fcm_bearer_token.clone(),
    }));

    tracing::info!("creating services");
    let dispatch_service: Arc<dyn DispatchService> = Arc::new(DispatchServiceImpl::new(
        push_gateway,
        users_repository.clone(),
        notifications_repository,
    ));
    let events_service: Arc<dyn EventsService> = Arc::new(EventsServiceImpl::new(
        conversations_repository,
        users_repository,
        dispatch_service,
    ));

    Ok((
        ApplicationState { events_service },
        ApplicationStateToClose { db_client },
    ))
}
