use crate::artifacts::compare::comparison_error::{CompareError, CompareResult};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// One of the two directory trees being compared.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lazily lists every non-directory entry below the root, siblings sorted
    /// by file name. The first walk error ends the listing.
    pub fn list_files(&self) -> impl Iterator<Item = CompareResult<PathBuf>> + '_ {
        WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_dir() => None,
                Ok(entry) => Some(Ok(entry.into_path())),
                Err(e) => Some(Err(CompareError::traversal(&self.path, e))),
            })
    }

    pub fn relative_path(&self, file_path: &Path) -> CompareResult<PathBuf> {
        file_path
            .strip_prefix(&self.path)
            .map(PathBuf::from)
            .map_err(|_| CompareError::RelativePath {
                path: file_path.to_path_buf(),
                root: self.path.to_path_buf(),
            })
    }

    /// Never fails: anything that cannot be stat'ed counts as absent.
    pub fn contains(&self, relative_path: &Path, regular_files_only: bool) -> bool {
        let path = self.path.join(relative_path);

        if regular_files_only {
            path.is_file()
        } else {
            path.exists()
        }
    }

    pub fn absolute_path(&self, relative_path: &Path) -> CompareResult<PathBuf> {
        let path = self.path.join(relative_path);

        clean_absolute(&path).map_err(|source| CompareError::AbsolutePath { path, source })
    }
}

/// Absolute form of `path` with `.` and `..` folded away lexically. Symlinks
/// are not resolved; `..` at the root stays at the root.
pub fn clean_absolute(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    Ok(absolute
        .components()
        .fold(PathBuf::new(), |mut cleaned, component| {
            match component {
                Component::ParentDir => {
                    cleaned.pop();
                }
                Component::CurDir => {}
                other => cleaned.push(other),
            }
            cleaned
        }))
}
