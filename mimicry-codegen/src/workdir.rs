//! Scoped working-directory change.

use std::{
    env,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Guard that enters a directory and restores the previous one when dropped,
/// on every exit path. The working directory is global process state, so a
/// guard must be live for the whole external call it covers.
pub struct WorkingDir {
    original: PathBuf,
}

impl WorkingDir {
    pub fn change(dir: &Path) -> Result<Self> {
        let original = env::current_dir().wrap_err("failed to read the working directory")?;
        env::set_current_dir(dir)
            .wrap_err_with(|| format!("failed to enter '{}'", dir.display()))?;
        Ok(Self { original })
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        // Nothing sensible to do on failure during unwind.
        let _ = env::set_current_dir(&self.original);
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    // One test only: the working directory is process-global and tests run
    // in parallel.
    #[test]
    fn test_enters_restores_and_refuses_missing() {
        let dir = TempDir::new().unwrap();
        let before = env::current_dir().unwrap();
        {
            let _guard = WorkingDir::change(dir.path()).unwrap();
            assert_eq!(
                env::current_dir().unwrap(),
                dir.path().canonicalize().unwrap()
            );
        }
        assert_eq!(env::current_dir().unwrap(), before);

        assert!(WorkingDir::change(Path::new("/definitely/not/here")).is_err());
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
