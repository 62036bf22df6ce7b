//! ストレージ入出力
//!
//! バッキングファイルの読み込みと保存
//!
//! 読み込みはUTF-8テキストを行に分割して返す。保存は各行に改行を付けて
//! 順に書き出す上書きのみ（追記や部分書き込みの回復はない）

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{FileError, Result, RigoError};

/// バッキングファイルを読み込む。存在しない場合は空ファイルを作成する
///
/// 開くことも作成することもできない場合のみ失敗する
/// （セッション開始時に呼ばれ、このときの失敗は致命的）
pub fn load_or_create(path: &Path) -> Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(split_lines(&content)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            fs::write(path, "").map_err(|e| unavailable(path, &e))?;
            log::debug!("created backing file: {}", path.display());
            Ok(Vec::new())
        }
        Err(err) => Err(unavailable(path, &err)),
    }
}

/// 行シーケンスをファイルへ書き出す
///
/// 一時ファイルに書いてからリネームする。途中で失敗しても元の
/// ファイルは壊れない
pub fn save_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, &content).map_err(|e| unavailable(path, &e))?;
    fs::rename(&temp_path, path).map_err(|e| unavailable(path, &e))?;
    Ok(())
}

/// 読み込んだ内容を行に分割する（末尾改行は行を生まない）
fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

fn unavailable(path: &Path, err: &std::io::Error) -> RigoError {
    log::warn!("storage unavailable: {}: {}", path.display(), err);
    RigoError::File(FileError::Unavailable {
        path: path.display().to_string(),
    })
}
