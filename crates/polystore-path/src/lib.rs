//! Confinement-aware path joining.
//!
//! [`confine`] maps a caller-supplied virtual path onto a physical path
//! that is guaranteed to stay under a configured root directory, no matter
//! what the virtual path contains. Every filesystem-backed store applies it
//! before every filesystem call that takes a caller-supplied path.
//!
//! [`join_virtual`] is the string-level counterpart for the virtual
//! namespace itself: joining a parent path (or a routing prefix) with a
//! child segment.

use std::path::{Component, Path, PathBuf};

/// Join `user_path` under `root` so the result can never escape `root`.
///
/// The user path is normalized lexically before joining: root and prefix
/// components are dropped (absolute-looking input is treated as relative),
/// `.` components are dropped, and `..` pops at most back to the join
/// boundary. The returned path is always `root` itself or a descendant of
/// it.
///
/// Symlinks inside `root` are not resolved; confining symlink targets is
/// the deployment's responsibility.
pub fn confine(root: &Path, user_path: &str) -> PathBuf {
    let mut confined = PathBuf::new();
    for component in Path::new(user_path).components() {
        match component {
            Component::Normal(part) => confined.push(part),
            Component::ParentDir => {
                // Clamped at the join boundary: never above `root`.
                confined.pop();
            }
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
        }
    }
    root.join(confined)
}

/// Join two virtual path fragments with a single `/`.
///
/// Surrounding slashes are trimmed from both sides; an empty side yields
/// the other side unchanged. The empty-`rest` case is what lets a routing
/// prefix wrap a child store's own root (path `""`) as just the prefix.
pub fn join_virtual(base: &str, rest: &str) -> String {
    let base = base.trim_matches('/');
    let rest = rest.trim_matches('/');
    if base.is_empty() {
        rest.to_string()
    } else if rest.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{rest}")
    }
}
