use std::{
    env, fs,
    path::{Path, PathBuf},
};

use eyre::{Context as _, Result};

pub fn default_path() -> PathBuf {
    Path::new("result").join("result.svg")
}

/// Write the badge to `path`, creating missing parent directories and
/// replacing any previous content.
///
/// The write is not atomic. Two runs targeting the same file at the same
/// time may leave it interleaved.
pub fn write_badge(path: &Path, svg: &str) -> Result<()> {
    if let Ok(cwd) = env::current_dir() {
        info!("Current working directory: {}", cwd.display());
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory `{}`", dir.display()))?;
    }

    fs::write(path, svg).with_context(|| format!("failed to write `{}`", path.display()))?;
    debug!("Wrote {} bytes to {}", svg.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("result").join("result.svg");

        write_badge(&path, "<svg/>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn overwrites_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("result.svg");

        write_badge(&path, "<svg>first run with a longer body</svg>").unwrap();
        write_badge(&path, "<svg>second</svg>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg>second</svg>");
    }

    #[test]
    fn default_location() {
        assert_eq!(default_path(), Path::new("result/result.svg"));
    }
}
