//! In-memory implementation of the user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{Inserted, UserRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct UserTable {
    users: Vec<User>,
    by_id: HashMap<String, usize>,
    by_username: HashMap<String, usize>,
}

/// Process-local user storage indexed by id and username.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    table: RwLock<UserTable>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert_if_absent(&self, new_user: NewUser) -> Result<Inserted<User>, AppError> {
        let mut table = self.table.write().await;

        if let Some(&position) = table.by_username.get(&new_user.username) {
            return Ok(Inserted::Existing(table.users[position].clone()));
        }

        if table.by_id.contains_key(&new_user.id) {
            return Err(AppError::conflict("User id already exists"));
        }

        let position = table.users.len();
        let user = User::from(new_user);
        table.by_id.insert(user.id.clone(), position);
        table.by_username.insert(user.username.clone(), position);
        table.users.push(user.clone());

        Ok(Inserted::New(user))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.by_id.get(id).map(|&p| table.users[p].clone()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.by_username.get(username).map(|&p| table.users[p].clone()))
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.table.read().await.users.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
