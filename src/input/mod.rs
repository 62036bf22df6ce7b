//! 入力処理モジュール
//!
//! 対話ループで受け付けるテキストコマンドの定義と解析

pub mod commands;

pub use commands::{parse, Command};
