//! ロギングシステム
//!
//! セッション層が使う診断ログ出力を提供
//! コアの編集エンジンはログを出さない

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Warning,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
        }
    }
}

/// セッション診断ロガー
///
/// stderrへ出力する。ファイルへの追記出力も設定できる
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    output_stderr: bool,
    output_file: Option<PathBuf>,
}

impl Logger {
    /// 開発者向けロガー（すべてのレベルを出力）
    pub fn for_development() -> Self {
        Self {
            level: LogLevel::Info,
            output_stderr: true,
            output_file: None,
        }
    }

    /// ログレベルを変更
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// ファイル出力を設定
    pub fn with_file_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// 標準エラー出力を無効化（テスト向け）
    #[cfg(test)]
    pub fn without_stderr(mut self) -> Self {
        self.output_stderr = false;
        self
    }

    /// 情報ログ
    pub fn log_info(&self, message: impl AsRef<str>, context: Option<&str>) {
        self.emit(LogLevel::Info, context, message.as_ref());
    }

    /// 警告ログ
    pub fn log_warning(&self, message: impl AsRef<str>, context: Option<&str>) {
        self.emit(LogLevel::Warning, context, message.as_ref());
    }

    fn emit(&self, level: LogLevel, context: Option<&str>, message: &str) {
        if level < self.level {
            return;
        }
        let line = format!(
            "{}: {} in {}",
            level.tag(),
            message,
            context.unwrap_or("unknown")
        );

        if self.output_stderr {
            eprintln!("{}", line);
        }

        if let Some(path) = &self.output_file {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{}", line);
            }
        }
    }
}
