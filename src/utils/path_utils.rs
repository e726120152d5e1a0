use crate::error::LintError;
use std::path::{Path, PathBuf};

pub struct PathUtils;

impl PathUtils {
    /// Default package root: two directory levels above the running
    /// executable, matching the fixed script-to-root layout the validator
    /// is installed with.
    pub fn default_package_root() -> Result<PathBuf, LintError> {
        let exe = std::env::current_exe()
            .map_err(|e| LintError::RootResolution(e.to_string()))?;
        Self::grandparent(&exe).ok_or_else(|| {
            LintError::RootResolution(format!(
                "executable path {} has no grandparent directory",
                exe.display()
            ))
        })
    }

    fn grandparent(path: &Path) -> Option<PathBuf> {
        Some(path.parent()?.parent()?.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grandparent() {
        assert_eq!(
            PathUtils::grandparent(Path::new("/pkg/scripts/extlint")),
            Some(PathBuf::from("/pkg"))
        );
        assert_eq!(PathUtils::grandparent(Path::new("/extlint")), None);
    }
}
