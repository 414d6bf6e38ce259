use tracing::{error, info};

use super::UserService;
use crate::errors::{ClassworksError, Result};
use crate::models::users::entities::{User, UserRole};
use crate::policy::{self, Action, Actor};

pub async fn change_role(
    service: &UserService,
    actor: &Actor,
    user_id: i64,
    role: UserRole,
) -> Result<User> {
    policy::authorize(actor, &Action::ChangeUserRole)?;

    let updated = service
        .storage
        .update_user_role(user_id, role)
        .await
        .inspect_err(|e| error!("Failed to change role of user {}: {}", user_id, e))?
        .ok_or_else(|| ClassworksError::not_found("User not found"))?;

    info!("User {} role changed to {} by admin {}", user_id, role, actor.id);

    Ok(updated)
}
