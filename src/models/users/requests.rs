use super::entities::UserRole;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 身份提供方给出的已认证主体资料（身份同步的输入）
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityProfile {
    pub external_id: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
}

// 用户创建请求（存储层）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub external_id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub avatar_url: Option<String>,
}

// 用户资料更新请求（不含角色：角色只能走管理员专用操作）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

// 用户列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}
