//! 条目模型
//!
//! 与 GCS 原生类型无关的统一表示：bucket、目录（公共前缀）、对象，
//! 以及列表首位的 “..” 返回上级条目。

use chrono::{DateTime, Utc};

use crate::utils::path::{SEPARATOR, join_address, leaf_name, parent_prefix};

/// 返回上级条目的显示名称
pub const PARENT_ENTRY_NAME: &str = "..";

/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Bucket（账号根视图中的条目）
    Bucket,
    /// 目录（公共前缀）
    Folder,
    /// 对象
    Object,
    /// 返回上级的合成条目
    Parent,
}

/// 一个 bucket、目录或对象
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 显示名称（叶子名）
    pub name: String,
    /// bucket 内的路径；bucket 条目为 bucket 名本身，目录以 `/` 结尾
    pub logical_path: String,
    /// `bucket` 或 `bucket/path`，寻址键；账号根为空字符串
    pub full_path: String,
    /// 字节数，容器为 0
    pub size_bytes: u64,
    /// 最后修改时间，目录与 “..” 为 None
    pub last_modified: Option<DateTime<Utc>>,
    /// 条目类型
    pub kind: EntryKind,
    /// 返回上级时的目标路径
    pub parent_logical_path: String,
}

impl Entry {
    /// 创建 bucket 条目
    pub fn bucket(name: impl Into<String>, updated: Option<DateTime<Utc>>) -> Self {
        let name = name.into();
        Self {
            logical_path: name.clone(),
            full_path: name.clone(),
            name,
            size_bytes: 0,
            last_modified: updated,
            kind: EntryKind::Bucket,
            parent_logical_path: String::new(),
        }
    }

    /// 创建目录条目，`prefix` 为带尾部分隔符的完整前缀（如 `logs/2024/`）
    pub fn folder(bucket: &str, prefix: &str, parent: &str) -> Self {
        Self {
            name: leaf_name(prefix).to_string(),
            logical_path: prefix.to_string(),
            full_path: join_address(bucket, prefix),
            size_bytes: 0,
            last_modified: None,
            kind: EntryKind::Folder,
            parent_logical_path: parent.to_string(),
        }
    }

    /// 创建对象条目
    pub fn object(
        bucket: &str,
        object_path: &str,
        parent: &str,
        size_bytes: u64,
        updated: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            name: leaf_name(object_path).to_string(),
            logical_path: object_path.to_string(),
            full_path: join_address(bucket, object_path),
            size_bytes,
            last_modified: updated,
            kind: EntryKind::Object,
            parent_logical_path: parent.to_string(),
        }
    }

    /// 创建 “..” 条目
    ///
    /// `prefix` 为当前列出的前缀；为空时（bucket 根）指向账号根。
    pub fn parent_link(bucket: &str, prefix: &str) -> Self {
        let (logical_path, full_path) = if prefix.is_empty() {
            (String::new(), String::new())
        } else {
            let parent = parent_prefix(prefix);
            let full = join_address(bucket, &parent);
            (parent, full)
        };

        Self {
            name: PARENT_ENTRY_NAME.to_string(),
            parent_logical_path: logical_path.clone(),
            logical_path,
            full_path,
            size_bytes: 0,
            last_modified: None,
            kind: EntryKind::Parent,
        }
    }

    /// 是否可进入（bucket、目录、“..”）
    pub fn is_container(&self) -> bool {
        !matches!(self.kind, EntryKind::Object)
    }

    /// 是否为 bucket 条目
    pub fn is_bucket(&self) -> bool {
        self.kind == EntryKind::Bucket
    }

    /// 是否为 “..” 条目
    pub fn is_parent_link(&self) -> bool {
        self.kind == EntryKind::Parent
    }

    /// 目录条目的显示名称不含分隔符，这里给出带分隔符的形式
    pub fn display_path(&self) -> String {
        match self.kind {
            EntryKind::Folder => format!("{}{SEPARATOR}", self.name),
            _ => self.name.clone(),
        }
    }
}
