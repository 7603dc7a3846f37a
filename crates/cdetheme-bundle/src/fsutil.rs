//! Filesystem helpers for bundle assembly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Copies a directory tree.
///
/// Symlinks inside `src` are recreated with the same target rather than
/// followed. Returns the number of regular files copied. `dst` must not
/// exist yet.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<u64> {
    fs::create_dir(dst)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let kind = entry.file_type()?;
        if kind.is_symlink() {
            copy_symlink(&from, &to)?;
        } else if kind.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(from)?, to)
}

#[cfg(windows)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    let target = fs::read_link(from)?;
    if fs::metadata(from).map(|meta| meta.is_dir()).unwrap_or(false) {
        std::os::windows::fs::symlink_dir(target, to)
    } else {
        std::os::windows::fs::symlink_file(target, to)
    }
}

/// Path of `target` as seen from the directory containing `link`.
pub fn relative_target(target: &Path, link: &Path) -> PathBuf {
    let base = link.parent().unwrap_or_else(|| Path::new(""));
    pathdiff::diff_paths(target, base).unwrap_or_else(|| target.to_path_buf())
}

/// Creates a symlink at `link` pointing at `target` by a relative path.
pub fn link_relative(target: &Path, link: &Path) -> io::Result<PathBuf> {
    let relative = relative_target(target, link);
    symlink_dir(&relative, link)?;
    Ok(relative)
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

/// Removes whatever is at `path` without following a symlink there.
///
/// Returns `false` if nothing existed.
pub fn remove_existing(path: &Path) -> io::Result<bool> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    if meta.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(true)
}

/// Total size in bytes of the regular files under `root`.
///
/// Symlinks are neither counted nor followed, so linked asset directories
/// do not count against the bundles that share them.
pub fn disk_usage(root: &Path) -> io::Result<u64> {
    let mut total = 0;
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let meta = fs::symlink_metadata(entry.path())?;
        if meta.is_dir() {
            total += disk_usage(&entry.path())?;
        } else if meta.is_file() {
            total += meta.len();
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_nested_trees() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("assets/deep")).unwrap();
        fs::write(src.join("gtk.css"), "a").unwrap();
        fs::write(src.join("assets/deep/x.png"), "bb").unwrap();

        let dst = tmp.path().join("dst");
        assert_eq!(copy_dir_recursive(&src, &dst).unwrap(), 2);
        assert_eq!(fs::read_to_string(dst.join("assets/deep/x.png")).unwrap(), "bb");
    }

    #[cfg(unix)]
    #[test]
    fn copy_recreates_symlinks_without_following() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("assets")).unwrap();
        fs::write(src.join("assets/a.png"), "png").unwrap();
        std::os::unix::fs::symlink(".", src.join("loop")).unwrap();
        std::os::unix::fs::symlink("assets/a.png", src.join("alias.png")).unwrap();

        let dst = tmp.path().join("dst");
        assert_eq!(copy_dir_recursive(&src, &dst).unwrap(), 1);
        assert_eq!(fs::read_link(dst.join("loop")).unwrap(), Path::new("."));
        assert_eq!(fs::read_link(dst.join("alias.png")).unwrap(), Path::new("assets/a.png"));
        assert_eq!(fs::read_to_string(dst.join("alias.png")).unwrap(), "png");
    }

    #[test]
    fn relative_target_between_siblings() {
        let target = Path::new(".themes/CDE-Theme/xfwm4");
        let link = Path::new(".themes/CDE-Alpine/xfwm4");
        assert_eq!(relative_target(target, link), Path::new("../CDE-Theme/xfwm4"));
    }

    #[cfg(unix)]
    #[test]
    fn link_resolves_to_target() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("Base/img");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("a.png"), "png").unwrap();
        fs::create_dir(tmp.path().join("Bundle")).unwrap();

        let link = tmp.path().join("Bundle/img");
        let relative = link_relative(&target, &link).unwrap();
        assert_eq!(relative, Path::new("../Base/img"));
        assert_eq!(fs::read_link(&link).unwrap(), Path::new("../Base/img"));
        assert_eq!(fs::read_to_string(link.join("a.png")).unwrap(), "png");
    }

    #[cfg(unix)]
    #[test]
    fn remove_existing_unlinks_without_following() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("keep");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("file"), "x").unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(remove_existing(&link).unwrap());
        assert!(target.join("file").exists());
        assert!(!remove_existing(&link).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn disk_usage_skips_symlinks() {
        let tmp = TempDir::new().unwrap();
        let shared = tmp.path().join("shared");
        fs::create_dir(&shared).unwrap();
        fs::write(shared.join("big"), vec![0u8; 1000]).unwrap();
        let bundle = tmp.path().join("bundle");
        fs::create_dir(&bundle).unwrap();
        fs::write(bundle.join("small"), vec![0u8; 10]).unwrap();
        std::os::unix::fs::symlink("../shared", bundle.join("shared")).unwrap();
        std::os::unix::fs::symlink("../shared/big", bundle.join("big")).unwrap();

        assert_eq!(disk_usage(&bundle).unwrap(), 10);
        assert_eq!(disk_usage(tmp.path()).unwrap(), 1010);
    }
}
