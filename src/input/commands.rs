//! コマンド処理システム
//!
//! テキストコマンドの解析。行番号はここでは1ベースのまま保持し、
//! 0ベースへの変換はセッション層が行う

use crate::error::{input, InputError};

/// エディタが受け付けるコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// バッファ全体を表示
    Display,
    /// 指定行番号（1ベース）に行を挿入
    Insert { line_number: usize, text: String },
    /// 単語を検索
    Search { word: String },
    /// 最初に見つかった単語を置換
    Update { old_word: String, new_word: String },
    /// 指定行番号（1ベース）の行を削除
    Delete { line_number: usize },
    /// 直前の変更を取り消す
    Undo,
    /// 取り消した変更をやり直す
    Redo,
    /// バッファをファイルへ保存
    Save,
    /// エディタを終了
    Exit,
}

/// 入力1行をコマンドに解析する
pub fn parse(line: &str) -> input::Result<Command> {
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (trimmed, ""),
    };

    match name {
        "display" => no_arguments(Command::Display, rest),
        "undo" => no_arguments(Command::Undo, rest),
        "redo" => no_arguments(Command::Redo, rest),
        "save" => no_arguments(Command::Save, rest),
        "exit" => no_arguments(Command::Exit, rest),
        "insert" => parse_insert(rest),
        "search" => {
            let word = single_word(rest)?;
            Ok(Command::Search { word })
        }
        "update" => parse_update(rest),
        "delete" => {
            let line_number = parse_line_number(rest.trim())?;
            Ok(Command::Delete { line_number })
        }
        _ => Err(InputError::UnknownCommand {
            command: name.to_string(),
        }),
    }
}

fn no_arguments(command: Command, rest: &str) -> input::Result<Command> {
    if rest.trim().is_empty() {
        Ok(command)
    } else {
        Err(InputError::InvalidArgument {
            arg: rest.trim().to_string(),
        })
    }
}

/// `insert <行番号> <テキスト>` — テキストは行番号の後の残り全部
fn parse_insert(rest: &str) -> input::Result<Command> {
    let rest = rest.trim_start();
    let (number_token, text) = match rest.split_once(' ') {
        Some((number_token, text)) => (number_token, text),
        None => (rest, ""),
    };
    let line_number = parse_line_number(number_token)?;
    Ok(Command::Insert {
        line_number,
        text: text.to_string(),
    })
}

/// `update <旧単語> <新単語>` — 単語はどちらも空白を含まない
fn parse_update(rest: &str) -> input::Result<Command> {
    let mut words = rest.split_whitespace();
    let old_word = words.next();
    let new_word = words.next();
    match (old_word, new_word, words.next()) {
        (Some(old_word), Some(new_word), None) => Ok(Command::Update {
            old_word: old_word.to_string(),
            new_word: new_word.to_string(),
        }),
        _ => Err(InputError::InvalidArgument {
            arg: rest.trim().to_string(),
        }),
    }
}

fn single_word(rest: &str) -> input::Result<String> {
    let mut words = rest.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => Ok(word.to_string()),
        _ => Err(InputError::InvalidArgument {
            arg: rest.trim().to_string(),
        }),
    }
}

/// 1ベース行番号の解析。0は無効（内部0ベースへの変換で負になる位置）
fn parse_line_number(token: &str) -> input::Result<usize> {
    match token.parse::<usize>() {
        Ok(0) | Err(_) => Err(InputError::InvalidArgument {
            arg: token.to_string(),
        }),
        Ok(number) => Ok(number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse("display"), Ok(Command::Display));
        assert_eq!(parse("undo"), Ok(Command::Undo));
        assert_eq!(parse("redo"), Ok(Command::Redo));
        assert_eq!(parse("save"), Ok(Command::Save));
        assert_eq!(parse("exit"), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_insert_keeps_rest_of_line() {
        assert_eq!(
            parse("insert 2 hello world"),
            Ok(Command::Insert {
                line_number: 2,
                text: "hello world".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_insert_allows_empty_text() {
        assert_eq!(
            parse("insert 1"),
            Ok(Command::Insert {
                line_number: 1,
                text: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_insert_preserves_inner_spacing() {
        assert_eq!(
            parse("insert 3   indented"),
            Ok(Command::Insert {
                line_number: 3,
                text: "  indented".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_line_number_zero() {
        assert_eq!(
            parse("insert 0 text"),
            Err(InputError::InvalidArgument {
                arg: "0".to_string()
            })
        );
        assert_eq!(
            parse("delete 0"),
            Err(InputError::InvalidArgument {
                arg: "0".to_string()
            })
        );
    }

    #[test]
    fn test_parse_search_and_update() {
        assert_eq!(
            parse("search foo"),
            Ok(Command::Search {
                word: "foo".to_string()
            })
        );
        assert_eq!(
            parse("update foo bar"),
            Ok(Command::Update {
                old_word: "foo".to_string(),
                new_word: "bar".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_update_requires_two_words() {
        assert!(parse("update onlyone").is_err());
        assert!(parse("update one two three").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse("frobnicate"),
            Err(InputError::UnknownCommand {
                command: "frobnicate".to_string()
            })
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), Err(InputError::Empty));
        assert_eq!(parse("   "), Err(InputError::Empty));
    }
}
