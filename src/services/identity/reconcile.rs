use tracing::{error, info};

use super::IdentityService;
use crate::errors::{ClassworksError, Result};
use crate::models::users::{
    entities::{User, UserRole},
    requests::{CreateUserRequest, IdentityProfile, UpdateUserRequest},
};
use crate::utils::validate::{validate_email, validate_full_name};

pub async fn reconcile_user(service: &IdentityService, profile: IdentityProfile) -> Result<User> {
    validate_email(&profile.email).map_err(ClassworksError::validation)?;
    validate_full_name(&profile.full_name).map_err(ClassworksError::validation)?;

    let existing = service
        .storage
        .get_user_by_external_id(&profile.external_id)
        .await?;

    match existing {
        Some(user) => {
            // 资料字段以身份提供方为准；角色从不在同步中变更
            let update = UpdateUserRequest {
                email: Some(profile.email),
                full_name: Some(profile.full_name),
                // None 时保留已有头像
                avatar_url: profile.avatar_url,
            };

            service
                .storage
                .update_user(user.id, update)
                .await
                .inspect_err(|e| error!("Identity sync failed to update user {}: {}", user.id, e))?
                .ok_or_else(|| ClassworksError::not_found("User not found"))
        }
        None => {
            // 首次见到该主体：以学生角色落库，之后只有管理员能改角色
            let created = service
                .storage
                .create_user(CreateUserRequest {
                    external_id: profile.external_id,
                    email: profile.email,
                    full_name: profile.full_name,
                    role: UserRole::Student,
                    avatar_url: profile.avatar_url,
                })
                .await
                .inspect_err(|e| error!("Identity sync failed to create user: {}", e))?;

            info!(
                "Created user {} from identity provider subject {}",
                created.id, created.external_id
            );
            Ok(created)
        }
    }
}
