use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::users_model::{normalize_email, validate_email};
use super::{NewUser, User, UserRepositoryTrait, UserServiceTrait};
use crate::errors::{DatabaseError, Error, Result, ValidationError};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

fn require(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, user: NewUser) -> Result<User> {
        let email = normalize_email(&user.email);
        validate_email(&email)?;
        let new_user = NewUser {
            first_name: require("firstName", &user.first_name)?,
            last_name: require("lastName", &user.last_name)?,
            email,
            ..user
        };

        if self.repository.find_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "An account for {} already exists",
                new_user.email
            )));
        }

        let created = self
            .repository
            .create_user(new_user)
            .await
            .map_err(|e| match e {
                Error::Database(DatabaseError::UniqueViolation(_)) => {
                    Error::ConstraintViolation("An account for this email already exists".into())
                }
                other => other,
            })?;
        info!(
            "Registered user {} (active: {})",
            created.id, created.is_active
        );
        Ok(created)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(&normalize_email(email))
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    async fn set_active(&self, user_id: &str, is_active: bool) -> Result<User> {
        info!("Setting user {} active={}", user_id, is_active);
        self.repository.set_active(user_id, is_active).await
    }
}
