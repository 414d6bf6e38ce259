//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//!
//! 业务规则类错误（Validation / NotFound / Conflict / PermissionDenied）
//! 是预期结果，直接返回给调用方；Database* / Serialization 类错误属于
//! 协作方故障，记录日志后以不透明形式上抛，核心层不做重试。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classworks_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum ClassworksError {
            $($variant(String),)*
        }

        impl ClassworksError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassworksError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassworksError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassworksError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassworksError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassworksError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classworks_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Serialization("E004", "Serialization Error"),
    DateParse("E005", "Date Parse Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Conflict("E008", "Resource Conflict"),
    PermissionDenied("E009", "Permission Denied"),
}

impl ClassworksError {
    /// 是否属于可直接展示给调用方的业务规则错误
    pub fn is_business_error(&self) -> bool {
        matches!(
            self,
            ClassworksError::Validation(_)
                | ClassworksError::NotFound(_)
                | ClassworksError::Conflict(_)
                | ClassworksError::PermissionDenied(_)
        )
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassworksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassworksError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassworksError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassworksError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassworksError {
    fn from(err: serde_json::Error) -> Self {
        ClassworksError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClassworksError {
    fn from(err: chrono::ParseError) -> Self {
        ClassworksError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassworksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassworksError::database_config("test").code(), "E001");
        assert_eq!(ClassworksError::validation("test").code(), "E006");
        assert_eq!(ClassworksError::not_found("test").code(), "E007");
        assert_eq!(ClassworksError::permission_denied("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassworksError::conflict("test").error_type(),
            "Resource Conflict"
        );
        assert_eq!(
            ClassworksError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ClassworksError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_business_error_classification() {
        assert!(ClassworksError::permission_denied("x").is_business_error());
        assert!(ClassworksError::conflict("x").is_business_error());
        assert!(!ClassworksError::database_operation("x").is_business_error());
        assert!(!ClassworksError::serialization("x").is_business_error());
    }

    #[test]
    fn test_format_simple() {
        let err = ClassworksError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
