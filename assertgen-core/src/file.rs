use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Header placed at the top of every generated source file.
pub const GENERATED_HEADER: &str = "// Generated by assertgen. Do not edit.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path under the given output directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file under `base`, returning the path that was written.
    ///
    /// Existing files are always overwritten.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Note {
        name: &'static str,
        body: &'static str,
    }

    impl GeneratedFile for Note {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("notes").join(self.name)
        }

        fn render(&self) -> String {
            format!("{}\n{}\n", GENERATED_HEADER, self.body)
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_reports_path_on_failure() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_file(&blocker.join("child.txt"), "x").unwrap_err();

        assert!(err.to_string().contains("blocker"));
    }

    #[test]
    fn test_generated_file_write_returns_path() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "hello.txt",
            body: "hello",
        };

        let written = note.write(temp.path()).unwrap();

        assert_eq!(written, temp.path().join("notes").join("hello.txt"));
        let content = fs::read_to_string(&written).unwrap();
        assert!(content.starts_with(GENERATED_HEADER));
        assert!(content.ends_with("hello\n"));
    }
}
