//! Services shared by request handlers
//!
//! Registration is first-wins: asking for a service that is already present
//! keeps the existing instance, so any number of endpoints may request the
//! same dependency.

use std::sync::Arc;

use sqlx::SqlitePool;
use thiserror::Error;

use super::AppState;
use crate::auth::Authenticator;
use crate::features::books::repository::BookRepository;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ServiceError {
    #[error("No {0} was registered")]
    Missing(&'static str),
}

pub struct ServiceCollection {
    pool: SqlitePool,
    authenticator: Option<Arc<dyn Authenticator>>,
    books: Option<Arc<dyn BookRepository>>,
}

impl ServiceCollection {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            authenticator: None,
            books: None,
        }
    }

    /// Connection pool that store-backed services are built from
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Register the book repository unless one exists; `true` if registered
    pub fn try_add_books<F>(&mut self, factory: F) -> bool
    where
        F: FnOnce(&SqlitePool) -> Arc<dyn BookRepository>,
    {
        if self.books.is_some() {
            return false;
        }
        self.books = Some(factory(&self.pool));
        true
    }

    /// Register the authenticator unless one exists; `true` if registered
    pub fn try_add_authenticator<F>(&mut self, factory: F) -> bool
    where
        F: FnOnce() -> Arc<dyn Authenticator>,
    {
        if self.authenticator.is_some() {
            return false;
        }
        self.authenticator = Some(factory());
        true
    }

    /// Freeze the registrations into the router state
    pub fn build(self) -> Result<AppState, ServiceError> {
        Ok(AppState {
            books: self.books.ok_or(ServiceError::Missing("book repository"))?,
            authenticator: self
                .authenticator
                .ok_or(ServiceError::Missing("authenticator"))?,
        })
    }
}
