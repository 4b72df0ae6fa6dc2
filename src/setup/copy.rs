// SPDX-License-Identifier: MPL-2.0
//! Recursive directory copy.

use crate::error::{Result, SetupError};
use std::fs;
use std::io;
use std::path::Path;

/// What a copy produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
}

/// Replicates the tree under `src` into `dest`, creating `dest` and any
/// intermediate directories. Existing files are overwritten.
///
/// Fails on the first I/O error, naming the path involved.
pub fn copy_recursive(src: &Path, dest: &Path) -> Result<CopyStats> {
    if !src.exists() {
        return Err(SetupError::MissingThemeSource(src.display().to_string()).into());
    }
    if is_inside(dest, src) {
        return Err(SetupError::DestinationInsideSource(dest.display().to_string()).into());
    }

    let mut stats = CopyStats::default();
    copy_entry(src, dest, &mut stats)?;
    log::debug!(
        "copied {} files in {} directories to {}",
        stats.files,
        stats.dirs,
        dest.display()
    );
    Ok(stats)
}

fn copy_entry(src: &Path, dest: &Path, stats: &mut CopyStats) -> Result<()> {
    let metadata = fs::metadata(src).map_err(|err| copy_failed("read", src, &err))?;

    if metadata.is_dir() {
        fs::create_dir_all(dest).map_err(|err| copy_failed("create", dest, &err))?;
        stats.dirs += 1;

        let entries = fs::read_dir(src).map_err(|err| copy_failed("list", src, &err))?;
        for entry in entries {
            let entry = entry.map_err(|err| copy_failed("list", src, &err))?;
            copy_entry(&entry.path(), &dest.join(entry.file_name()), stats)?;
        }
    } else {
        fs::copy(src, dest).map_err(|err| copy_failed("copy", src, &err))?;
        stats.files += 1;
    }
    Ok(())
}

fn copy_failed(action: &str, path: &Path, err: &io::Error) -> SetupError {
    SetupError::CopyFailed(format!("failed to {action} {}: {err}", path.display()))
}

/// Whether `path` is `ancestor` or lies below it. Paths that do not exist yet
/// are compared through their nearest existing parent.
fn is_inside(path: &Path, ancestor: &Path) -> bool {
    let Ok(ancestor) = ancestor.canonicalize() else {
        return false;
    };

    let mut existing = path;
    let mut suffix = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                suffix.push(name.to_owned());
                existing = parent;
            }
            _ => return false,
        }
    }

    let Ok(mut resolved) = existing.canonicalize() else {
        return false;
    };
    resolved.extend(suffix.iter().rev());
    resolved.starts_with(&ancestor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        fs::write(path, content).expect("write file");
    }

    #[test]
    fn copies_nested_tree() {
        let temp = tempdir().expect("temp dir");
        let src = temp.path().join("theme");
        write(&src.join("all.css"), "@import 'colors.css';");
        write(&src.join("tokens/colors.css"), ":root { --accent: blue; }");

        let dest = temp.path().join("project/nuke-theme");
        let stats = copy_recursive(&src, &dest).expect("copy succeeds");

        assert_eq!(stats, CopyStats { files: 2, dirs: 2 });
        assert_eq!(
            fs::read_to_string(dest.join("tokens/colors.css")).expect("copied"),
            ":root { --accent: blue; }"
        );
    }

    #[test]
    fn overwrites_existing_files() {
        let temp = tempdir().expect("temp dir");
        let src = temp.path().join("theme");
        write(&src.join("all.css"), "new");
        let dest = temp.path().join("out");
        write(&dest.join("all.css"), "old");

        copy_recursive(&src, &dest).expect("copy succeeds");
        assert_eq!(fs::read_to_string(dest.join("all.css")).expect("read"), "new");
    }

    #[test]
    fn missing_source_is_reported() {
        let temp = tempdir().expect("temp dir");
        let result = copy_recursive(&temp.path().join("absent"), &temp.path().join("out"));
        assert!(matches!(
            result,
            Err(Error::Setup(SetupError::MissingThemeSource(_)))
        ));
    }

    #[test]
    fn destination_inside_source_is_rejected() {
        let temp = tempdir().expect("temp dir");
        let src = temp.path().join("theme");
        write(&src.join("all.css"), "x");

        let result = copy_recursive(&src, &src.join("nested/copy"));
        assert!(matches!(
            result,
            Err(Error::Setup(SetupError::DestinationInsideSource(_)))
        ));
    }

    #[test]
    fn sibling_with_common_prefix_is_not_inside() {
        let temp = tempdir().expect("temp dir");
        let src = temp.path().join("theme");
        write(&src.join("all.css"), "x");

        assert!(!is_inside(&temp.path().join("theme-copy"), &src));
        assert!(is_inside(&src.join("a/b"), &src));
    }

    #[test]
    fn single_file_source_is_copied() {
        let temp = tempdir().expect("temp dir");
        let src = temp.path().join("all.css");
        write(&src, "body {}");

        let stats = copy_recursive(&src, &temp.path().join("copy.css")).expect("copy");
        assert_eq!(stats.files, 1);
    }
}
