use super::UserService;
use crate::errors::{ClassworksError, Result};
use crate::models::users::entities::User;
use crate::policy::{self, Action, Actor};

pub async fn get_user(service: &UserService, actor: &Actor, user_id: i64) -> Result<User> {
    policy::authorize(actor, &Action::ViewUser { user_id })?;

    service
        .storage
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| ClassworksError::not_found("User not found"))
}
