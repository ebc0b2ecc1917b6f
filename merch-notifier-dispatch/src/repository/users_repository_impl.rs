use super::{
    entity::{DeviceTokenFindEntity, UserFindEntity},
    Error, UsersRepository,
};
use axum::async_trait;
use bson::doc;
use mongodb::Database;

const USERS: &str = "users";
const DEVICE_TOKENS: &str = "device_tokens";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find_display_name(&self, user_id: &str) -> Result<Option<String>, Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! { "_id": user_id })
            .await?;

        Ok(user.and_then(|user| user.display_name))
    }

    async fn find_device_token(&self, user_id: &str) -> Result<Option<String>, Error> {
        let registration = self
            .database
            .collection::<DeviceTokenFindEntity>(DEVICE_TOKENS)
            .find_one(doc! { "_id": user_id })
            .await?;

        Ok(registration.map(|registration| registration.token))
    }

    async fn delete_device_token(&self, user_id: &str) -> Result<(), Error> {
        self.database
            .collection::<DeviceTokenFindEntity>(DEVICE_TOKENS)
            .delete_one(doc! { "_id": user_id })
            .await?;

        Ok(())
    }
}
