//! Source path construction from ordered segments.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// Join `segments` in order into a single normalized path.
///
/// Segments are concatenated: a root on a later segment does not discard
/// what came before, so `["/a", "/b"]` joins to `/a/b`. Empty segments and
/// `.` components vanish, repeated separators collapse and `..` pops the
/// preceding component where there is one. A join that normalizes to
/// nothing yields `.`.
///
/// Purely lexical; the filesystem is never consulted.
pub fn join_segments<I, S>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut anchor = PathBuf::new();
    let mut parts: Vec<OsString> = Vec::new();
    let mut leading = true;

    for segment in segments {
        for component in segment.as_ref().components() {
            match component {
                Component::Prefix(_) => {
                    if leading {
                        anchor.push(component.as_os_str());
                    }
                }
                Component::RootDir => {
                    if leading {
                        anchor.push(component.as_os_str());
                    }
                    leading = false;
                }
                Component::CurDir => leading = false,
                Component::ParentDir => {
                    leading = false;
                    match parts.last() {
                        Some(last) if last.as_os_str() != OsStr::new("..") => {
                            parts.pop();
                        }
                        // `/..` is `/`
                        None if anchor.has_root() => {}
                        _ => parts.push(OsString::from("..")),
                    }
                }
                Component::Normal(name) => {
                    leading = false;
                    parts.push(name.to_os_string());
                }
            }
        }
    }

    let mut joined = anchor;
    for part in parts {
        joined.push(part);
    }
    if joined.as_os_str().is_empty() {
        joined.push(".");
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn joins_absolute_head_with_relative_tail() {
        assert_eq!(
            join_segments(["/a", "b", "config.yaml"]),
            PathBuf::from("/a/b/config.yaml")
        );
    }

    #[cfg(unix)]
    #[test]
    fn collapses_redundant_separators() {
        let joined = join_segments(["/a/", "//b//", "config.yaml"]);
        assert_eq!(joined, PathBuf::from("/a/b/config.yaml"));
        assert!(!joined.to_string_lossy().contains("//"));
    }

    #[cfg(unix)]
    #[test]
    fn later_absolute_segment_is_concatenated() {
        assert_eq!(join_segments(["/srv", "/conf/app.yaml"]), PathBuf::from("/srv/conf/app.yaml"));
    }

    #[test]
    fn parent_components_pop_previous_segment() {
        assert_eq!(join_segments(["conf", "..", "app.yaml"]), PathBuf::from("app.yaml"));
        assert_eq!(
            join_segments(["conf", "nested", "../../other.yaml"]),
            PathBuf::from("other.yaml")
        );
    }

    #[test]
    fn leading_parent_components_survive_on_relative_paths() {
        assert_eq!(
            join_segments(["..", "..", "app.yaml"]),
            PathBuf::from("../../app.yaml")
        );
    }

    #[cfg(unix)]
    #[test]
    fn parent_of_root_is_root() {
        assert_eq!(join_segments(["/..", "app.yaml"]), PathBuf::from("/app.yaml"));
    }

    #[test]
    fn empty_and_current_dir_segments_vanish() {
        assert_eq!(
            join_segments(["", "./conf", ".", "app.yaml"]),
            PathBuf::from("conf/app.yaml")
        );
    }

    #[test]
    fn nothing_left_yields_current_dir() {
        assert_eq!(join_segments(Vec::<&str>::new()), PathBuf::from("."));
        assert_eq!(join_segments(["a", ".."]), PathBuf::from("."));
    }
}
