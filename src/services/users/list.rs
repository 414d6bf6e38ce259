use super::UserService;
use crate::errors::Result;
use crate::models::users::{requests::UserListQuery, responses::UserListResponse};
use crate::policy::{self, Action, Actor};

pub async fn list_users(
    service: &UserService,
    actor: &Actor,
    query: UserListQuery,
) -> Result<UserListResponse> {
    policy::authorize(actor, &Action::ListUsers)?;

    service.storage.list_users_with_pagination(query).await
}
