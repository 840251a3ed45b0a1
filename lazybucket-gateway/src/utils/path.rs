//! 地址与前缀分解
//!
//! 纯函数：`bucket/path` 地址按第一个分隔符拆分、前缀补全分隔符、
//! 计算上级前缀与叶子名、生成 `gs://` 规范 URI。

/// 路径分隔符
pub const SEPARATOR: char = '/';

/// 规范 URI 的协议前缀
pub const URI_SCHEME: &str = "gs://";

/// 将 `bucket/path` 地址按第一个分隔符拆分为 `(bucket, path)`
///
/// ```
/// use lazybucket_gateway::parse_address;
///
/// assert_eq!(parse_address("alpha/logs/a.txt"), ("alpha", "logs/a.txt"));
/// assert_eq!(parse_address("alpha"), ("alpha", ""));
/// ```
pub fn parse_address(full_path: &str) -> (&str, &str) {
    match full_path.split_once(SEPARATOR) {
        Some((bucket, path)) => (bucket, path),
        None => (full_path, ""),
    }
}

/// 拼接 bucket 与 bucket 内路径
pub fn join_address(bucket: &str, path: &str) -> String {
    if path.is_empty() {
        bucket.to_string()
    } else {
        format!("{bucket}{SEPARATOR}{path}")
    }
}

/// 非空前缀确保以分隔符结尾，用于按层级分组
pub fn ensure_trailing_separator(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with(SEPARATOR) {
        prefix.to_string()
    } else {
        format!("{prefix}{SEPARATOR}")
    }
}

/// 上级前缀（带尾部分隔符；顶层返回空字符串）
pub fn parent_prefix(path: &str) -> String {
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(idx) => trimmed[..=idx].to_string(),
        None => String::new(),
    }
}

/// 叶子名（忽略尾部分隔符）
pub fn leaf_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// 由地址生成 `gs://bucket/object` 规范 URI
pub fn canonical_uri(full_path: &str) -> String {
    let (bucket, object) = parse_address(full_path);
    format!("{URI_SCHEME}{bucket}{SEPARATOR}{object}")
}
