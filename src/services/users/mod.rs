pub mod get;
pub mod list;
pub mod role;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::users::{
    entities::{User, UserRole},
    requests::UserListQuery,
    responses::UserListResponse,
};
use crate::policy::Actor;
use crate::storage::Storage;

/// 用户管理服务
pub struct UserService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl UserService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 修改用户角色（仅管理员）
    pub async fn change_role(&self, actor: &Actor, user_id: i64, role: UserRole) -> Result<User> {
        role::change_role(self, actor, user_id, role).await
    }

    /// 获取用户资料（本人或管理员）
    pub async fn get(&self, actor: &Actor, user_id: i64) -> Result<User> {
        get::get_user(self, actor, user_id).await
    }

    /// 列出用户（仅管理员）
    pub async fn list(&self, actor: &Actor, query: UserListQuery) -> Result<UserListResponse> {
        list::list_users(self, actor, query).await
    }
}
