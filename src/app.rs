//! エディタセッション
//!
//! バッファエンジン・履歴・ストレージを束ね、対話コマンドループを実行する
//!
//! 1ベース（コマンド表記）と0ベース（エンジン内部）の行番号変換は
//! この層だけが行う。コアの失敗はここでユーザー向けメッセージに翻訳する

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::editor::LineEditor;
use crate::error::{InputError, Result};
use crate::file;
use crate::input::commands::{self, Command};
use crate::logging::Logger;

/// 対話セッションの起動時に表示するコマンド一覧
const COMMAND_HELP: &str = "Line Editor Commands:
display - Show buffer contents
insert <line_number> <text> - Insert line
search <word> - Search for word
update <old_word> <new_word> - Replace word
delete <line_number> - Delete line
undo - Undo last operation
redo - Redo last operation
save - Save changes
exit - Exit editor
";

/// エディタセッション
///
/// バッファと履歴を所有する明示的なセッション値。
/// プロセス全域のシングルトンは置かない
pub struct App {
    editor: LineEditor,
    file_path: PathBuf,
    logger: Logger,
    running: bool,
}

impl App {
    /// バッキングファイルを開いて（無ければ作成して）セッションを開始する
    ///
    /// ファイルを開くことも作成することもできない場合はエラーを返す。
    /// このときの失敗は起動の中止を意味する
    pub fn open(file_path: PathBuf) -> Result<Self> {
        let lines = file::load_or_create(&file_path)?;
        let line_count = lines.len();

        let mut editor = LineEditor::new();
        editor.load(lines);

        let logger = Logger::for_development();
        logger.log_info(
            format!("opened {} ({} lines)", file_path.display(), line_count),
            Some("app"),
        );

        Ok(Self {
            editor,
            file_path,
            logger,
            running: true,
        })
    }

    /// セッションが実行中かどうか
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// セッションを終了状態にする
    pub fn shutdown(&mut self) {
        self.running = false;
    }

    /// バッキングファイルのパス
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// 編集エンジンへの参照
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// 現在のバッファをファイルへ保存する
    pub fn save(&self) -> Result<()> {
        file::save_lines(&self.file_path, self.editor.lines())
    }

    /// 1コマンドを実行し、ユーザー向けの出力行を返す
    ///
    /// 成功した編集は元のエディタにならい黙って受け付ける。
    /// 失敗のみメッセージになる
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Display => self
                .editor
                .lines()
                .iter()
                .enumerate()
                .map(|(index, line)| format_line(index, line))
                .collect(),
            Command::Insert { line_number, text } => {
                match to_index(line_number).and_then(|position| {
                    self.editor.insert_line(position, text).ok()
                }) {
                    Some(()) => Vec::new(),
                    None => vec!["Failed to insert line".to_string()],
                }
            }
            Command::Search { word } => match self.editor.search(&word) {
                Some(cursor) => vec![format!(
                    "Found at line {}, position {}",
                    cursor.line + 1,
                    cursor.column
                )],
                None => vec!["Word not found".to_string()],
            },
            Command::Update { old_word, new_word } => {
                // カーソルは使い回さず、毎回新しい検索で導出する。
                // 置換対象は常にバッファ全体で最初の出現
                match self.editor.search(&old_word) {
                    Some(cursor) => {
                        match self.editor.update_word(cursor, &old_word, &new_word) {
                            Ok(()) => Vec::new(),
                            Err(_) => vec!["Failed to update word".to_string()],
                        }
                    }
                    None => vec!["Word not found".to_string()],
                }
            }
            Command::Delete { line_number } => {
                match to_index(line_number).and_then(|index| self.editor.delete_line(index).ok())
                {
                    Some(()) => Vec::new(),
                    None => vec!["Failed to delete line".to_string()],
                }
            }
            Command::Undo => match self.editor.undo() {
                Ok(()) => Vec::new(),
                Err(_) => vec!["Nothing to undo".to_string()],
            },
            Command::Redo => match self.editor.redo() {
                Ok(()) => Vec::new(),
                Err(_) => vec!["Nothing to redo".to_string()],
            },
            Command::Save => match self.save() {
                Ok(()) => vec!["Changes saved".to_string()],
                Err(err) => {
                    // 保存失敗は回復可能。セッションは続行する
                    self.logger
                        .log_warning(format!("save failed: {}", err), Some("app"));
                    vec!["Failed to save changes".to_string()]
                }
            },
            Command::Exit => {
                self.shutdown();
                Vec::new()
            }
        }
    }

    /// メインコマンドループを実行する
    pub fn run(&mut self) -> Result<()> {
        println!("{}", COMMAND_HELP);

        let stdin = io::stdin();
        let mut input = String::new();

        while self.running {
            print!("Enter command: ");
            io::stdout().flush()?;

            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                // EOFは終了扱い
                break;
            }
            let line = input.trim_end_matches(['\r', '\n']);

            match commands::parse(line) {
                Ok(command) => {
                    for message in self.execute(command) {
                        println!("{}", message);
                    }
                }
                Err(InputError::Empty) => {}
                Err(InputError::UnknownCommand { .. }) => println!("Unknown command"),
                Err(err) => println!("{}", err),
            }
        }

        Ok(())
    }
}

/// 1ベース行番号を0ベースの内部インデックスに変換する
fn to_index(line_number: usize) -> Option<usize> {
    line_number.checked_sub(1)
}

/// 表示用の行フォーマット（行番号は1ベース）
fn format_line(index: usize, line: &str) -> String {
    format!("[Line No{}:] \"{}\"", index + 1, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_is_one_based() {
        assert_eq!(format_line(0, "hello"), "[Line No1:] \"hello\"");
        assert_eq!(format_line(9, ""), "[Line No10:] \"\"");
    }

    #[test]
    fn test_to_index_rejects_zero() {
        assert_eq!(to_index(0), None);
        assert_eq!(to_index(1), Some(0));
        assert_eq!(to_index(25), Some(24));
    }
}
