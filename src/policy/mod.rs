//! 权限规则表
//!
//! 三角色模型（管理员 / 教师 / 学生）下所有操作的唯一判定入口。
//! 每个操作族一条规则；服务层不得在别处比较角色。
//!
//! 判定是纯同步函数：调用方先从存储取出归属事实（课程归属教师、
//! 提交归属学生、选课状态），装进 [`Action`] 再判定，这里不做任何 I/O。

use crate::errors::{ClassworksError, Result};
use crate::models::users::entities::{User, UserRole};

/// 执行操作的已认证主体
///
/// 由嵌入方的传输层在完成身份验证后构造。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: i64,
    pub role: UserRole,
}

impl Actor {
    pub fn new(id: i64, role: UserRole) -> Self {
        Self { id, role }
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }
}

/// 待判定的操作及其归属事实
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 查看课程（含作业列表、资源列表、选课名单）
    ViewCourse { teacher_id: i64, enrolled: bool },
    /// 管理课程：增改作业、选课/退课、增删资源、改课程信息
    ManageCourse { teacher_id: i64 },
    /// 创建归属于 teacher_id 的课程
    CreateCourse { teacher_id: i64 },
    /// 提交/重新提交某学生的作业
    SubmitWork { teacher_id: i64, student_id: i64 },
    /// 查看单条提交
    ViewSubmission { teacher_id: i64, student_id: i64 },
    /// 评分（含查看作业的全部提交）
    GradeSubmission { teacher_id: i64 },
    /// 删除提交
    DeleteSubmission { teacher_id: i64, student_id: i64 },
    /// 修改用户角色
    ChangeUserRole,
    /// 查看用户资料
    ViewUser { user_id: i64 },
    /// 列出全部用户
    ListUsers,
}

/// 判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// 规则表
///
/// | 操作 | 允许的主体 |
/// |---|---|
/// | ViewCourse | 管理员；课程归属教师；已选课学生 |
/// | ManageCourse | 管理员；课程归属教师 |
/// | CreateCourse | 管理员；以本人为归属教师的教师 |
/// | SubmitWork | 管理员；课程归属教师；student_id 本人 |
/// | ViewSubmission | 管理员；课程归属教师；提交归属学生 |
/// | GradeSubmission | 管理员；课程归属教师 |
/// | DeleteSubmission | 管理员；课程归属教师；提交归属学生 |
/// | ChangeUserRole | 仅管理员 |
/// | ViewUser | 管理员；user_id 本人 |
/// | ListUsers | 仅管理员 |
pub fn evaluate(actor: &Actor, action: &Action) -> Decision {
    // 管理员放行所有操作
    if actor.role == UserRole::Admin {
        return Decision::Allow;
    }

    let owns_course =
        |teacher_id: i64| actor.role == UserRole::Teacher && actor.id == teacher_id;

    let allowed = match *action {
        Action::ViewCourse {
            teacher_id,
            enrolled,
        } => owns_course(teacher_id) || (actor.role == UserRole::Student && enrolled),
        Action::ManageCourse { teacher_id } => owns_course(teacher_id),
        Action::CreateCourse { teacher_id } => owns_course(teacher_id),
        Action::SubmitWork {
            teacher_id,
            student_id,
        } => actor.id == student_id || owns_course(teacher_id),
        Action::ViewSubmission {
            teacher_id,
            student_id,
        } => actor.id == student_id || owns_course(teacher_id),
        Action::GradeSubmission { teacher_id } => owns_course(teacher_id),
        Action::DeleteSubmission {
            teacher_id,
            student_id,
        } => actor.id == student_id || owns_course(teacher_id),
        Action::ChangeUserRole => false,
        Action::ViewUser { user_id } => actor.id == user_id,
        Action::ListUsers => false,
    };

    if allowed { Decision::Allow } else { Decision::Deny }
}

/// 判定并把拒绝映射为 PermissionDenied 错误
///
/// 拒绝一定以错误形式返回，不允许静默忽略。
pub fn authorize(actor: &Actor, action: &Action) -> Result<()> {
    match evaluate(actor, action) {
        Decision::Allow => Ok(()),
        Decision::Deny => Err(ClassworksError::permission_denied(deny_message(action))),
    }
}

fn deny_message(action: &Action) -> &'static str {
    match action {
        Action::ViewCourse { .. } => "You do not have access to this course",
        Action::ManageCourse { .. } => {
            "Only the course teacher or an admin can manage this course"
        }
        Action::CreateCourse { .. } => "You cannot create a course for another teacher",
        Action::SubmitWork { .. } => "You cannot submit work for this student",
        Action::ViewSubmission { .. } => "You do not have access to this submission",
        Action::GradeSubmission { .. } => {
            "Only the course teacher or an admin can grade submissions"
        }
        Action::DeleteSubmission { .. } => "You cannot delete this submission",
        Action::ChangeUserRole => "Only an admin can change user roles",
        Action::ViewUser { .. } => "You can only view your own profile",
        Action::ListUsers => "Only an admin can list users",
    }
}
