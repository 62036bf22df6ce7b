//! エラーハンドリングシステム
//!
//! rigo エディタ全体で使用される統一されたエラー型を定義
//! 編集系のエラーはすべて回復可能。致命的なのは起動時のストレージ失敗のみ

use std::fmt;
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum RigoError {
    /// バッファ編集エラー
    #[error("Edit operation failed")]
    Edit(#[from] EditError),

    /// ファイル操作エラー
    #[error("File operation failed")]
    File(#[from] FileError),

    /// 入力処理エラー
    #[error("Input processing failed")]
    Input(#[from] InputError),

    /// アプリケーション論理エラー
    #[error("Application error: {0}")]
    Application(String),
}

/// バッファ編集固有のエラー
///
/// 呼び出し側が戻り値で処理することを前提とした失敗種別
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// バッファが容量上限に達している
    #[error("Buffer is at capacity ({max} lines)")]
    CapacityExceeded { max: usize },

    /// 行番号・位置が有効範囲の外
    #[error("Index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// 対象の単語が指定行に存在しない
    #[error("Word not found: {word}")]
    WordNotFound { word: String },

    /// アンドゥ／リドゥ履歴が空
    #[error("No {action} history available")]
    HistoryEmpty { action: HistoryAction },
}

/// 履歴操作の向き
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Undo,
    Redo,
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryAction::Undo => write!(f, "undo"),
            HistoryAction::Redo => write!(f, "redo"),
        }
    }
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    /// バッキングファイルを開くことも作成することもできない
    #[error("Storage unavailable: {path}")]
    Unavailable { path: String },

    /// 通常ファイルとして扱えないパス
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// 入出力エラー
    #[error("IO error: {message}")]
    Io { message: String },
}

/// 入力処理固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// 未知のコマンド
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    /// 引数が不正
    #[error("Invalid argument: {arg}")]
    InvalidArgument { arg: String },

    /// 空の入力行
    #[error("Empty input")]
    Empty,
}

// std::io::Error から RigoError への変換
impl From<std::io::Error> for RigoError {
    fn from(error: std::io::Error) -> Self {
        RigoError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, RigoError>;

/// 各モジュール固有のResult型
pub mod edit {
    pub type Result<T> = std::result::Result<T, super::EditError>;
}

pub mod input {
    pub type Result<T> = std::result::Result<T, super::InputError>;
}
