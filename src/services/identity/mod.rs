pub mod reconcile;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::users::{entities::User, requests::IdentityProfile};
use crate::storage::Storage;

/// 身份同步服务
///
/// 把外部身份提供方交来的已认证主体对齐到本地用户记录。
/// 发生在授权之前，因此没有 Actor 参数。
pub struct IdentityService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl IdentityService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 对齐外部主体与本地用户记录（幂等）
    pub async fn reconcile(&self, profile: IdentityProfile) -> Result<User> {
        reconcile::reconcile_user(self, profile).await
    }
}
