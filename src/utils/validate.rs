use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_full_name(name: &str) -> Result<(), &'static str> {
    // 姓名长度校验：1 <= x <= 128，且不能全为空白
    if name.trim().is_empty() {
        return Err("Full name must not be empty");
    }
    if name.len() > 128 {
        return Err("Full name must be at most 128 characters");
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), &'static str> {
    // URL 校验：外部协作方返回的持久地址，只接受 http/https
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err("URL must start with http:// or https://");
    }
    Ok(())
}
