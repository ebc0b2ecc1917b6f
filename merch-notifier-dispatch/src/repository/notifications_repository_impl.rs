use super::{
    dto::NewNotificationRecord, entity::NotificationRecordInsertEntity, Error,
    NotificationsRepository,
};
use axum::async_trait;
use bson::{doc, DateTime, Document};
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};
use time::OffsetDateTime;

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_USER_ID: &str = "index_user_id";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database.create_collection(NOTIFICATIONS).await?;

        let collection = database.collection::<Document>(NOTIFICATIONS);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_USER_ID.to_string()) {
            Self::create_user_id_index(&collection).await?;
            tracing::debug!("created index {NOTIFICATIONS}.{INDEX_NAME_USER_ID}");
        }

        Ok(Self { database })
    }

    async fn create_user_id_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "user_id": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_USER_ID.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn insert(&self, record: NewNotificationRecord) -> Result<(), Error> {
        let insert_entity = NotificationRecordInsertEntity {
            user_id: record.user_id,
            title: record.title,
            message: record.message,
            notification_type: record.notification_type.as_ref().to_string(),
            context_id: record.context_id,
            is_read: false,
            created_at: DateTime::from(OffsetDateTime::now_utc()),
        };

        self.database
            .collection::<NotificationRecordInsertEntity>(NOTIFICATIONS)
            .insert_one(&insert_entity)
            .await?;

        Ok(())
    }
}
