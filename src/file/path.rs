//! パス解決
//!
//! コマンドライン引数からバッキングファイルのパスを組み立てる

use std::fs;
use std::path::PathBuf;

use crate::error::{FileError, Result, RigoError};

/// チルダ展開を行う
pub fn expand(input: &str) -> String {
    shellexpand::tilde(input).into_owned()
}

/// ファイル名とディレクトリからバッキングファイルのパスを解決する
///
/// `create_dir` が真の場合（ディレクトリが明示されたとき）は
/// ディレクトリを作成してからパスを返す。
/// 解決先が通常ファイルとして扱えない場合は失敗する
pub fn resolve_target(filename: &str, directory: &str, create_dir: bool) -> Result<PathBuf> {
    let directory = PathBuf::from(expand(directory));
    let filename = expand(filename);

    if create_dir {
        fs::create_dir_all(&directory).map_err(|err| {
            log::warn!("cannot create directory {}: {}", directory.display(), err);
            RigoError::File(FileError::Unavailable {
                path: directory.display().to_string(),
            })
        })?;
    }

    let target = directory.join(filename);
    if target.is_dir() {
        return Err(RigoError::File(FileError::InvalidPath {
            path: target.display().to_string(),
        }));
    }

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_joins_directory_and_filename() {
        let path = resolve_target("file.txt", ".", false).unwrap();
        assert_eq!(path, PathBuf::from("./file.txt"));
    }

    #[test]
    fn test_resolve_creates_requested_directory() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("workdir");
        let nested_str = nested.to_str().unwrap();

        let path = resolve_target("file.txt", nested_str, true).unwrap();

        assert!(nested.is_dir());
        assert_eq!(path, nested.join("file.txt"));
    }

    #[test]
    fn test_resolve_rejects_directory_target() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("notes")).unwrap();

        let result = resolve_target("notes", temp_dir.path().to_str().unwrap(), false);
        assert!(matches!(
            result,
            Err(RigoError::File(FileError::InvalidPath { .. }))
        ));
    }

    #[test]
    fn test_expand_passes_plain_paths_through() {
        assert_eq!(expand("plain/file.txt"), "plain/file.txt");
    }
}
