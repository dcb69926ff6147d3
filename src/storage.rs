//! Thin wrapper over browser local storage. Values are stored as JSON;
//! reads fall back to a default on any failure and writes never raise,
//! so a full or disabled storage only costs persistence, not the session.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

pub const RECENT_VIDEOS_KEY: &str = "recent-videos";
pub const MAX_RECENT_VIDEOS: usize = 5;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get<T: DeserializeOwned>(key: &str, default: T) -> T {
    let Some(storage) = local_storage() else {
        return default;
    };
    match storage.get_item(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or(default),
        _ => default,
    }
}

pub fn set<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        log::warn!("local storage unavailable, '{key}' not persisted");
        return;
    };
    match serde_json::to_string(value) {
        Ok(raw) => {
            // Quota errors are swallowed; the in-memory state already moved on.
            if storage.set_item(key, &raw).is_err() {
                log::warn!("failed to persist '{key}'");
            }
        }
        Err(e) => log::warn!("failed to serialize '{key}': {e}"),
    }
}

pub fn recent_urls() -> Vec<String> {
    get(RECENT_VIDEOS_KEY, Vec::new())
}

/// Prepends `url` to the recent list unless it is already present,
/// keeping at most MAX_RECENT_VIDEOS entries. An existing entry stays
/// where it is.
pub fn push_recent(mut urls: Vec<String>, url: &str) -> Vec<String> {
    if urls.iter().any(|u| u == url) {
        return urls;
    }
    urls.truncate(MAX_RECENT_VIDEOS - 1);
    urls.insert(0, url.to_string());
    urls
}

pub fn remember_url(url: &str) -> Vec<String> {
    let urls = push_recent(recent_urls(), url);
    set(RECENT_VIDEOS_KEY, &urls);
    urls
}

pub fn clear_recent_urls() {
    set(RECENT_VIDEOS_KEY, &Vec::<String>::new());
}

fn saved_key(video_url: &str) -> String {
    format!("saved-{video_url}")
}

pub fn is_saved(video_url: &str) -> bool {
    get(&saved_key(video_url), false)
}

pub fn set_saved(video_url: &str, saved: bool) {
    set(&saved_key(video_url), &saved);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_push_recent_prepends_new_url() {
        let list = push_recent(urls(&["b", "c"]), "a");
        assert_eq!(list, urls(&["a", "b", "c"]));
    }

    #[test]
    fn test_push_recent_ignores_duplicate() {
        let before = urls(&["a", "b", "c"]);
        let after = push_recent(before.clone(), "b");
        // Present entries are neither re-added nor moved to the front.
        assert_eq!(after, before);
    }

    #[test]
    fn test_push_recent_caps_at_five() {
        let mut list = Vec::new();
        for url in ["u1", "u2", "u3", "u4", "u5", "u6"] {
            list = push_recent(list, url);
        }
        assert_eq!(list.len(), MAX_RECENT_VIDEOS);
        assert_eq!(list, urls(&["u6", "u5", "u4", "u3", "u2"]));
    }

    #[test]
    fn test_push_recent_same_url_twice_keeps_single_entry() {
        let list = push_recent(push_recent(Vec::new(), "u1"), "u1");
        assert_eq!(list, urls(&["u1"]));
    }
}
