//! Database models for user accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use daybook_core::users::{NewUser, User};

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Row written at registration; the id is assigned here.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl NewUserDB {
    pub fn from_new_user(id: String, user: NewUser, now: NaiveDateTime) -> Self {
        Self {
            id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            password_hash: user.password_hash,
            is_active: user.is_active,
            created_at: now,
        }
    }
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            email: db.email,
            first_name: db.first_name,
            last_name: db.last_name,
            password_hash: db.password_hash,
            is_active: db.is_active,
            created_at: db.created_at,
        }
    }
}
