//! Classworks - 学习管理平台核心库
//!
//! 课程、选课、作业、提交与评分的业务核心，基于三角色权限模型
//! （管理员 / 教师 / 学生）。传输层、身份认证与文件存储均为外部协作方，
//! 由嵌入本库的服务负责；本库只消费一个已认证的 Actor。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `policy`: 权限规则表（唯一的角色判定入口）
//! - `runtime`: 日志与存储初始化
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod policy;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
