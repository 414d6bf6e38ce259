use serde::Deserialize;

// 课程资源创建请求
//
// 文件字节已由外部对象存储收下；这里只登记其返回的元数据。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResourceRequest {
    pub course_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_type: String,
    pub file_size: i64,
}
