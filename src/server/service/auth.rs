//! Registration and login.
//!
//! Both operations end with a freshly issued identity token for the user, so a client
//! that just registered is already signed in.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{normalize_email, AuthenticatedUser, CreateUserParams, RegisterUserParams},
    service::token::TokenService,
    util::password::{dummy_password_verify, hash_password, verify_password},
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Creates an account and signs the new user in.
    ///
    /// The email is already normalized in `params`, so the unique index on the email column
    /// compares lower-cased addresses. It is the only duplicate check, which also covers
    /// two registrations racing for the same address.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - The created user with a token
    /// - `Err(AppError::BadRequest)` - "User already exists"
    /// - `Err(AppError::InternalErr)` - Hashing or token signing failed
    pub async fn register(&self, params: RegisterUserParams) -> Result<AuthenticatedUser, AppError> {
        let user_repo = UserRepository::new(self.db);

        let password_hash = hash_password(&params.password).await?;

        let user = user_repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash,
                role: params.role,
                department: params.department,
                year: params.year,
            })
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => user_exists(),
                _ => AppError::from(e),
            })?;

        tracing::info!("Registered user {} with role {}", user.id, user.role);

        let token = self.tokens.issue(user.id)?;

        Ok(AuthenticatedUser { token, user })
    }

    /// Checks credentials and signs the user in.
    ///
    /// An unknown email and a wrong password produce the same error, and both pay for one
    /// Argon2 verification so they also take the same time.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - The user with a new token
    /// - `Err(AppError::BadRequest)` - "Invalid credentials"
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&normalize_email(email)).await? else {
            dummy_password_verify(password).await?;
            return Err(AppError::BadRequest(INVALID_CREDENTIALS.to_string()));
        };

        if !verify_password(password, &user.password_hash).await? {
            tracing::debug!("Failed login for user {}", user.id);
            return Err(AppError::BadRequest(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue(user.id)?;

        Ok(AuthenticatedUser { token, user })
    }
}

fn user_exists() -> AppError {
    AppError::BadRequest("User already exists".to_string())
}
