use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};
use crate::admin::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch_active_model(
        &self,
        user_id: Uuid,
    ) -> Result<UserActiveModel, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        Ok(user.into())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn set_employee_id(
        &self,
        user_id: Uuid,
        employee_id: String,
    ) -> Result<(), UserRepositoryError> {
        let mut user: UserActiveModel = self.fetch_active_model(user_id).await?;

        user.employee_id = Set(Some(employee_id));

        user.update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut user: UserActiveModel = self.fetch_active_model(user_id).await?;

        user.password_hash = Set(new_password_hash);

        user.update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
