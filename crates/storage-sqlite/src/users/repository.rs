use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use daybook_core::errors::Result;
use daybook_core::users::{NewUser, User, UserRepositoryTrait};

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        let row = NewUserDB::from_new_user(
            Uuid::new_v4().to_string(),
            user,
            Utc::now().naive_utc(),
        );
        debug!("Creating user {}", row.id);

        self.writer
            .exec(move |conn| {
                diesel::insert_into(users::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                users::table
                    .find(&row.id)
                    .select(UserDB::as_select())
                    .first::<UserDB>(conn)
                    .map(User::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user = users::table
            .filter(users::email.eq(email))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user.map(User::from))
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .map(User::from)
            .map_err(|e| StorageError::from(e).into())
    }

    async fn set_active(&self, user_id: &str, is_active: bool) -> Result<User> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(users::table.find(&user_id))
                    .set(users::is_active.eq(is_active))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                users::table
                    .find(&user_id)
                    .select(UserDB::as_select())
                    .first::<UserDB>(conn)
                    .map(User::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }
}
