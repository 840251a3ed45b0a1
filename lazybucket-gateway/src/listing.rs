//! 单层目录列表
//!
//! 把一次带分隔符的对象列举结果（公共前缀 + 对象）整理为条目序列：
//! “..” 在最前，其次是下一层的目录，最后是恰好位于当前前缀下的对象。

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::types::Entry;
use crate::utils::path::{ensure_trailing_separator, parent_prefix};

/// 列举结果中的一个对象（与具体后端无关）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedObject {
    /// bucket 内的完整对象路径
    pub name: String,
    /// 字节数
    pub size: u64,
    /// 最后修改时间
    pub updated: Option<DateTime<Utc>>,
}

/// 由公共前缀与对象构建 `(bucket, prefix)` 的单层列表
///
/// - 始终在首位加入 “..”：bucket 根指向账号根，其余指向上级前缀
/// - 公共前缀只保留恰好比 `prefix` 深一层的，重复的只保留一次
/// - 对象只保留上级前缀与 `prefix` 完全相同的；
///   与 `prefix` 同名的零字节占位对象被丢弃
pub fn build_listing(
    bucket: &str,
    prefix: &str,
    prefixes: &[String],
    objects: &[ListedObject],
) -> Vec<Entry> {
    let prefix = ensure_trailing_separator(prefix);
    let mut entries = Vec::with_capacity(prefixes.len() + objects.len() + 1);
    entries.push(Entry::parent_link(bucket, &prefix));

    let mut seen = HashSet::new();
    for child in prefixes {
        let child = ensure_trailing_separator(child);
        if child == prefix || parent_prefix(&child) != prefix {
            log::debug!("Skipping prefix '{child}' outside of '{prefix}'");
            continue;
        }
        if seen.insert(child.clone()) {
            entries.push(Entry::folder(bucket, &child, &prefix));
        }
    }

    for object in objects {
        if object.name == prefix || object.name.is_empty() {
            continue;
        }
        if parent_prefix(&object.name) != prefix {
            log::debug!("Skipping nested object '{}'", object.name);
            continue;
        }
        entries.push(Entry::object(
            bucket,
            &object.name,
            &prefix,
            object.size,
            object.updated,
        ));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;

    fn object(name: &str, size: u64) -> ListedObject {
        ListedObject {
            name: name.to_string(),
            size,
            updated: None,
        }
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn bucket_root_listing() {
        let entries = build_listing(
            "alpha",
            "",
            &["logs/".to_string()],
            &[object("readme.txt", 120)],
        );

        assert_eq!(names(&entries), vec!["..", "logs", "readme.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Parent);
        assert_eq!(entries[0].full_path, "");
        assert_eq!(entries[1].kind, EntryKind::Folder);
        assert_eq!(entries[1].full_path, "alpha/logs/");
        assert_eq!(entries[2].kind, EntryKind::Object);
        assert_eq!(entries[2].size_bytes, 120);
        assert_eq!(entries[2].full_path, "alpha/readme.txt");
    }

    #[test]
    fn prefix_without_separator_is_normalized() {
        let entries = build_listing("alpha", "logs", &[], &[object("logs/a.log", 1)]);
        assert_eq!(names(&entries), vec!["..", "a.log"]);
        assert_eq!(entries[0].full_path, "alpha");
    }

    #[test]
    fn deeper_objects_are_excluded() {
        let entries = build_listing(
            "alpha",
            "logs/",
            &["logs/2024/".to_string()],
            &[
                object("logs/a.log", 1),
                object("logs/2024/b.log", 2),
                object("logs/2024/05/c.log", 3),
            ],
        );

        assert_eq!(names(&entries), vec!["..", "2024", "a.log"]);
        for entry in &entries[1..] {
            let rest = entry.logical_path.trim_start_matches("logs/");
            assert!(rest.trim_end_matches('/').split('/').count() == 1);
        }
    }

    #[test]
    fn placeholder_object_for_prefix_is_dropped() {
        let entries = build_listing("alpha", "logs/", &[], &[object("logs/", 0)]);
        assert_eq!(names(&entries), vec![".."]);
    }

    #[test]
    fn duplicate_prefixes_are_merged() {
        let entries = build_listing(
            "alpha",
            "",
            &["logs/".to_string(), "logs/".to_string(), "data/".to_string()],
            &[],
        );
        assert_eq!(names(&entries), vec!["..", "logs", "data"]);
    }

    #[test]
    fn folder_and_object_with_same_leaf_have_distinct_addresses() {
        let entries = build_listing("alpha", "", &["a/".to_string()], &[object("a", 4)]);
        assert_eq!(entries[1].full_path, "alpha/a/");
        assert_eq!(entries[2].full_path, "alpha/a");
    }

    #[test]
    fn parent_entry_is_unique_and_first() {
        let entries = build_listing(
            "alpha",
            "x/y/",
            &["x/y/z/".to_string()],
            &[object("x/y/f", 1)],
        );
        let parents: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_parent_link())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(parents, vec![0]);
        assert_eq!(entries[0].full_path, "alpha/x/");
    }
}
