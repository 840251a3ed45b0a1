//! 列表导航消息处理

use super::{request_listing, viewer};
use crate::message::{Command, NavigationMessage, ViewerMessage};
use crate::model::App;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Vec<Command> {
    // 预览中：移动类消息转为滚动，其余忽略
    if app.mode.is_viewing() {
        if let Some(viewer_msg) = as_viewer_message(msg) {
            viewer::update(app, viewer_msg);
        }
        return Vec::new();
    }

    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::PageUp => {
            let page = app.list_page_size();
            app.navigation.page_up(page);
        }
        NavigationMessage::PageDown => {
            let page = app.list_page_size();
            app.navigation.page_down(page);
        }
        NavigationMessage::Open => return open_selected(app),
        NavigationMessage::Back => return go_back(app),
        NavigationMessage::Refresh => return refresh(app),
    }
    Vec::new()
}

fn as_viewer_message(msg: NavigationMessage) -> Option<ViewerMessage> {
    match msg {
        NavigationMessage::SelectPrevious => Some(ViewerMessage::ScrollUp),
        NavigationMessage::SelectNext => Some(ViewerMessage::ScrollDown),
        NavigationMessage::SelectFirst => Some(ViewerMessage::Top),
        NavigationMessage::SelectLast => Some(ViewerMessage::Bottom),
        NavigationMessage::PageUp => Some(ViewerMessage::PageUp),
        NavigationMessage::PageDown => Some(ViewerMessage::PageDown),
        NavigationMessage::Back => Some(ViewerMessage::Close),
        NavigationMessage::Open | NavigationMessage::Refresh => None,
    }
}

/// 打开选中的容器；对象上为空操作
fn open_selected(app: &mut App) -> Vec<Command> {
    let Some(entry) = app.selected_entry() else {
        return Vec::new();
    };
    if !entry.is_container() {
        return Vec::new();
    }
    if entry.is_parent_link() {
        return go_up(app);
    }

    let target = entry.full_path.clone();
    let status = format!("Navigating to {}", entry.name);
    let mut history = app.navigation.path_history.clone();
    history.push(app.navigation.current_path.clone());

    request_listing(app, target, history, status)
}

/// 弹出历史；历史为空时回到账号根
fn go_up(app: &mut App) -> Vec<Command> {
    let mut history = app.navigation.path_history.clone();
    let target = history.pop().unwrap_or_default();
    let status = if target.is_empty() {
        "Navigating to bucket list".to_string()
    } else {
        format!("Navigating to {target}")
    };

    request_listing(app, target, history, status)
}

/// 与打开 “..” 相同，只是不看选中项
fn go_back(app: &mut App) -> Vec<Command> {
    if app.navigation.path_history.is_empty() {
        app.set_status("Already at root level");
        return Vec::new();
    }
    go_up(app)
}

fn refresh(app: &mut App) -> Vec<Command> {
    let target = app.navigation.current_path.clone();
    let history = app.navigation.path_history.clone();
    request_listing(app, target, history, "Refreshing...")
}

#[cfg(test)]
mod tests {
    use lazybucket_gateway::GatewayError;

    use super::super::fixtures::*;
    use super::super::update as app_update;
    use super::*;
    use crate::message::{AppMessage, TaskMessage};
    use crate::model::Mode;

    fn nav(app: &mut App, msg: NavigationMessage) -> Vec<Command> {
        app_update(app, AppMessage::Navigation(msg))
    }

    /// 打开选中项并让列表请求成功返回
    fn descend(app: &mut App, name: &str, entries: Vec<lazybucket_gateway::Entry>) {
        select(app, name);
        let (id, _) = listing_request(&nav(app, NavigationMessage::Open));
        app_update(app, loaded(id, entries));
    }

    #[test]
    fn open_bucket_lists_its_root() {
        let mut app = app_at_root();
        select(&mut app, "alpha");

        let commands = nav(&mut app, NavigationMessage::Open);
        let (id, path) = listing_request(&commands);
        assert_eq!(path, "alpha");
        assert_eq!(app.mode, Mode::Loading);
        assert_eq!(app.status_message.as_deref(), Some("Navigating to alpha"));
        // 结果返回前路径不变
        assert_eq!(app.navigation.current_path, "");

        app_update(&mut app, loaded(id, alpha_root()));
        assert_eq!(app.navigation.current_path, "alpha");
        assert_eq!(app.navigation.path_history, vec![String::new()]);
        assert_eq!(app.mode, Mode::Browsing);

        let names: Vec<&str> = app.navigation.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "logs", "readme.txt"]);
        assert!(app.navigation.entries[1].is_container());
        assert!(!app.navigation.entries[2].is_container());
        assert_eq!(app.navigation.entries[2].size_bytes, 120);
    }

    #[test]
    fn history_tracks_net_descents() {
        let mut app = app_at_root();
        descend(&mut app, "alpha", alpha_root());
        descend(&mut app, "logs", listing("alpha", "logs/", "2024", "a.log"));
        descend(&mut app, "2024", listing("alpha", "logs/2024/", "05", "b.log"));

        assert_eq!(app.navigation.current_path, "alpha/logs/2024/");
        assert_eq!(app.navigation.path_history.len(), 3);

        let (id, path) = listing_request(&nav(&mut app, NavigationMessage::Back));
        assert_eq!(path, "alpha/logs/");
        app_update(&mut app, loaded(id, listing("alpha", "logs/", "2024", "a.log")));
        assert_eq!(app.navigation.path_history.len(), 2);

        let (id, path) = listing_request(&nav(&mut app, NavigationMessage::Back));
        assert_eq!(path, "alpha");
        app_update(&mut app, loaded(id, alpha_root()));

        let (id, path) = listing_request(&nav(&mut app, NavigationMessage::Back));
        assert_eq!(path, "");
        app_update(&mut app, loaded(id, buckets()));
        assert!(app.navigation.is_at_root());
        assert!(app.navigation.path_history.is_empty());
    }

    #[test]
    fn parent_entry_pops_history() {
        let mut app = app_at_root();
        descend(&mut app, "alpha", alpha_root());
        descend(&mut app, "logs", listing("alpha", "logs/", "2024", "a.log"));

        select(&mut app, "..");
        let (_, path) = listing_request(&nav(&mut app, NavigationMessage::Open));
        assert_eq!(path, "alpha");
    }

    #[test]
    fn parent_entry_with_empty_history_targets_root() {
        let mut app = app_at_root();
        app.navigation.commit("alpha".to_string(), Vec::new(), alpha_root());
        select(&mut app, "..");

        let (id, path) = listing_request(&nav(&mut app, NavigationMessage::Open));
        assert_eq!(path, "");
        app_update(&mut app, loaded(id, buckets()));
        assert!(app.navigation.is_at_root());
    }

    #[test]
    fn back_at_root_only_sets_status() {
        let mut app = app_at_root();
        let before = app.navigation.clone();

        assert!(nav(&mut app, NavigationMessage::Back).is_empty());
        assert_eq!(app.navigation, before);
        assert_eq!(app.status_message.as_deref(), Some("Already at root level"));
        assert_eq!(app.mode, Mode::Browsing);
    }

    #[test]
    fn open_object_is_noop() {
        let mut app = app_at_root();
        descend(&mut app, "alpha", alpha_root());
        select(&mut app, "readme.txt");
        let before = app.navigation.clone();

        assert!(nav(&mut app, NavigationMessage::Open).is_empty());
        assert_eq!(app.navigation, before);
        assert_eq!(app.mode, Mode::Browsing);
    }

    #[test]
    fn open_with_no_entries_is_noop() {
        let mut app = App::default();
        assert!(nav(&mut app, NavigationMessage::Open).is_empty());
    }

    #[test]
    fn failed_listing_keeps_previous_state() {
        let mut app = app_at_root();
        select(&mut app, "beta");
        let before = app.navigation.clone();

        let (id, _) = listing_request(&nav(&mut app, NavigationMessage::Open));
        app_update(
            &mut app,
            AppMessage::Task(TaskMessage::EntriesLoaded {
                id,
                result: Err(GatewayError::PermissionDenied { raw_message: None }),
            }),
        );

        assert_eq!(app.navigation, before);
        assert_eq!(app.mode, Mode::Browsing);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Error: Permission denied: access forbidden")
        );
    }

    #[test]
    fn refresh_after_failure_replaces_entries_and_status() {
        let mut app = app_at_root();
        descend(&mut app, "alpha", alpha_root());

        let (id, path) = listing_request(&nav(&mut app, NavigationMessage::Refresh));
        assert_eq!(path, "alpha");
        assert_eq!(app.status_message.as_deref(), Some("Refreshing..."));
        app_update(
            &mut app,
            AppMessage::Task(TaskMessage::EntriesLoaded {
                id,
                result: Err(GatewayError::Network {
                    detail: "offline".to_string(),
                }),
            }),
        );

        let fresh = listing("alpha", "", "data", "new.txt");
        let (id, _) = listing_request(&nav(&mut app, NavigationMessage::Refresh));
        app_update(&mut app, loaded(id, fresh.clone()));

        assert_eq!(app.navigation.entries, fresh);
        assert_eq!(app.navigation.path_history, vec![String::new()]);
        assert_eq!(app.status_message.as_deref(), Some("Loaded 3 items"));
    }

    #[test]
    fn superseded_listing_is_dropped() {
        let mut app = app_at_root();

        select(&mut app, "alpha");
        let (first, _) = listing_request(&nav(&mut app, NavigationMessage::Open));
        select(&mut app, "beta");
        let (second, path) = listing_request(&nav(&mut app, NavigationMessage::Open));
        assert_eq!(path, "beta");

        // 先到的是过期结果
        app_update(&mut app, loaded(first, alpha_root()));
        assert!(app.navigation.is_at_root());
        assert_eq!(app.mode, Mode::Loading);

        app_update(&mut app, loaded(second, listing("beta", "", "x", "y")));
        assert_eq!(app.navigation.current_path, "beta");
        assert_eq!(app.navigation.path_history, vec![String::new()]);
    }

    #[test]
    fn selection_moves_and_pages() {
        let mut app = app_at_root();
        nav(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.navigation.selected, 1);
        nav(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.navigation.selected, 1);
        nav(&mut app, NavigationMessage::SelectFirst);
        assert_eq!(app.navigation.selected, 0);
        nav(&mut app, NavigationMessage::PageDown);
        assert_eq!(app.navigation.selected, 1);
        nav(&mut app, NavigationMessage::PageUp);
        assert_eq!(app.navigation.selected, 0);
        nav(&mut app, NavigationMessage::SelectLast);
        assert_eq!(app.navigation.selected, 1);
    }

    #[test]
    fn navigation_while_viewing_scrolls() {
        let mut app = app_at_root();
        app.viewer.open("alpha/a.txt", &"line\n".repeat(100));
        app.mode = Mode::ViewingFile;
        let before = app.navigation.clone();

        nav(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.viewer.scroll, 1);
        assert!(nav(&mut app, NavigationMessage::Open).is_empty());
        assert_eq!(app.navigation, before);

        nav(&mut app, NavigationMessage::Back);
        assert_eq!(app.mode, Mode::Browsing);
        assert_eq!(app.navigation, before);
    }
}
