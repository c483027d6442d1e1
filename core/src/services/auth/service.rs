//! User management and authentication service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::{User, UserRole};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::auth::token::TokenService;

/// Authenticated caller identity, injected into requests by the middleware
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Id of the authenticated user
    pub user_id: Uuid,
    /// Role of the authenticated user
    pub role: UserRole,
}

impl AuthContext {
    /// Whether the caller may access admin-only routes
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// User registration, login, and token verification
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: TokenService,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Register a new user with a bcrypt-hashed password
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> DomainResult<User> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::validation("All fields are required"));
        }
        if self.users.find_by_email(email).await?.is_some() {
            return Err(DomainError::validation("User already exists"));
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))?;
        let user = self
            .users
            .create(User::new(name, email, password_hash, role))
            .await?;
        info!(email = %user.email, role = ?user.role, "user created");
        Ok(user)
    }

    /// Authenticate by email and password, returning the user and a token
    ///
    /// A missing user and a wrong password are deliberately the same error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<(User, String)> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| DomainError::internal(format!("Password verification failed: {}", e)))?;
        if !matches {
            return Err(DomainError::InvalidCredentials);
        }

        let token = self.tokens.generate(&user)?;
        info!(email = %user.email, "user logged in");
        Ok((user, token))
    }

    /// Resolve a bearer token to an authenticated caller
    ///
    /// The user must still exist: deleting an account invalidates its
    /// outstanding tokens. The role is read from the store, not the claims,
    /// so role changes take effect immediately.
    pub async fn authenticate(&self, token: &str) -> DomainResult<AuthContext> {
        let claims = self.tokens.verify(token)?;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| DomainError::unauthorized("malformed token subject"))?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::unauthorized("User not found"))?;

        Ok(AuthContext {
            user_id: user.id,
            role: user.role,
        })
    }

    /// All users, for the admin listing
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.users.list().await
    }

    /// Delete a user by id
    pub async fn delete_user(&self, id: Uuid) -> DomainResult<()> {
        if self.users.delete(id).await? {
            info!(%id, "user removed");
            Ok(())
        } else {
            Err(DomainError::not_found("User"))
        }
    }
}
