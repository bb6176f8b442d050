use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User, UserStatus};

use super::repository;
use crate::system::auth::password;

/// Create a new user
pub async fn create(dto: CreateUserDto, created_by: Option<String>) -> Result<String> {
    if dto.username.trim().is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }

    if repository::get_by_username(&dto.username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    if let Some(ref email) = dto.email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow::anyhow!("Invalid email format"));
        }
    }

    password::validate_password_strength(&dto.password)?;

    let password_hash = password::hash_password(&dto.password)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let user = User {
        id: user_id.clone(),
        username: dto.username,
        display_name: dto.display_name,
        company: dto.company,
        email: dto.email,
        role: dto.role,
        is_verified: false,
        status: UserStatus::Active,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
        created_by,
    };

    repository::create_with_password(&user, &password_hash).await?;

    Ok(user_id)
}

/// Update user
pub async fn update(dto: UpdateUserDto) -> Result<()> {
    let mut user = repository::get_by_id(&dto.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User not found"))?;

    if let Some(ref email) = dto.email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow::anyhow!("Invalid email format"));
        }
    }

    user.display_name = dto.display_name;
    user.company = dto.company;
    user.email = dto.email;
    user.role = dto.role;
    user.is_verified = dto.is_verified;
    user.status = dto.status;
    user.updated_at = Utc::now().to_rfc3339();

    repository::update(&user).await
}

/// Delete user
pub async fn delete(id: &str) -> Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<User>> {
    repository::list_all().await
}

/// Check username/password. Banned users cannot log in. Returns the user
/// on success, None on any mismatch.
pub async fn verify_credentials(username: &str, password: &str) -> Result<Option<User>> {
    let user = match repository::get_by_username(username).await? {
        Some(user) => user,
        None => return Ok(None),
    };

    if user.status == UserStatus::Banned {
        return Ok(None);
    }

    let hash = match repository::get_password_hash(username).await? {
        Some(hash) => hash,
        None => return Ok(None),
    };

    if !password::verify_password(password, &hash)? {
        return Ok(None);
    }

    repository::touch_last_login(&user.id).await?;

    Ok(Some(user))
}

/// Change password. Non-admin callers must present the old password.
pub async fn change_password(dto: ChangePasswordDto, caller_is_admin: bool) -> Result<()> {
    let user = repository::get_by_id(&dto.user_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User not found"))?;

    if !caller_is_admin {
        let old_password = dto
            .old_password
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Old password required"))?;
        let hash = repository::get_password_hash(&user.username)
            .await?
            .ok_or_else(|| anyhow::anyhow!("User has no password"))?;
        if !password::verify_password(old_password, &hash)? {
            return Err(anyhow::anyhow!("Old password does not match"));
        }
    }

    password::validate_password_strength(&dto.new_password)?;
    let new_hash = password::hash_password(&dto.new_password)?;
    repository::update_password(&dto.user_id, &new_hash).await
}
