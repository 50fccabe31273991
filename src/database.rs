//! Schema bootstrap and seed data.
//!
//! Tables are derived from the sea-orm entities so the same startup path works
//! on Postgres and on the SQLite databases used by the test suite.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::config::Config;
use crate::entity::{ContactMessage, Project, ServiceRequest, User};
use crate::error::AppResult;
use crate::models::{CreateUser, BOOTSTRAP_USERNAME};
use crate::repositories::UserRepository;
use crate::services::AuthService;

/// Create every table that does not exist yet
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, Project).await?;
    create_table(db, ContactMessage).await?;
    create_table(db, ServiceRequest).await?;
    create_table(db, User).await?;
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let table = entity.table_name().to_string();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::debug!(table = %table, "Table ready");
    Ok(())
}

/// Seed the bootstrap admin account when a password is configured and the
/// account does not exist yet
pub async fn seed_bootstrap_admin(db: &DatabaseConnection, config: &Config) -> AppResult<bool> {
    let Some(password) = config.bootstrap_admin_password.as_deref() else {
        return Ok(false);
    };

    if UserRepository::username_exists(db, BOOTSTRAP_USERNAME).await? {
        return Ok(false);
    }

    let password_hash = AuthService::hash_password(password)?;
    let input = CreateUser {
        username: BOOTSTRAP_USERNAME.to_string(),
        email: config.bootstrap_admin_email.clone(),
        role_id: 1,
    };
    UserRepository::create(db, &input, &password_hash).await?;

    tracing::info!("Seeded bootstrap admin account");
    Ok(true)
}
