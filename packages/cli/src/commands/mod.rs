pub mod compile;
pub mod init;
pub mod outline;

pub use compile::{compile, CompileArgs};
pub use init::{init, InitArgs};
pub use outline::{outline, OutlineArgs};

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const PROJECT_EXTENSION: &str = ".project.json";

/// Project files to operate on: `path` itself when it names a project
/// file, otherwise every project file under `src_dir`.
pub fn find_project_files(path: &Path, src_dir: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(src_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| is_project_file(path))
        .collect();
    files.sort();

    Ok(files)
}

pub fn is_project_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(PROJECT_EXTENSION))
        .unwrap_or(false)
}

/// `home.project.json` -> `home`
pub fn project_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("project");
    name.strip_suffix(PROJECT_EXTENSION).unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_stem() {
        assert_eq!(project_stem(Path::new("src/home.project.json")), "home");
        assert_eq!(project_stem(Path::new("notes.json")), "notes.json");
    }

    #[test]
    fn test_find_project_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("screens");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("b.project.json"), "{}").unwrap();
        std::fs::write(nested.join("a.project.json"), "{}").unwrap();
        std::fs::write(dir.path().join("readme.md"), "").unwrap();

        let files = find_project_files(dir.path(), dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|file| is_project_file(file)));

        let single = dir.path().join("b.project.json");
        assert_eq!(find_project_files(&single, dir.path()).unwrap(), vec![single]);

        assert!(find_project_files(&dir.path().join("missing"), &dir.path().join("missing")).is_err());
    }
}
