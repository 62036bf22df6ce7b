//! 行バッファ
//!
//! 固定容量の順序付き行シーケンスと、その上の検証付き編集プリミティブ
//!
//! 不変条件: `0 <= len() <= MAX_LINES`
//! 容量を超える挿入は拒否し、容量を超える読み込みは切り捨てる

use crate::buffer::cursor::Cursor;
use crate::error::{edit, EditError};

/// バッファが保持できる最大行数
pub const MAX_LINES: usize = 25;

/// 固定容量の行バッファ
///
/// 行番号は内部的に0ベース。順序が意味を持つ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// 空のバッファを作成
    pub fn new() -> Self {
        Self {
            lines: Vec::with_capacity(MAX_LINES),
        }
    }

    /// 外部ソースから読み込んだ行で内容を置き換える
    ///
    /// MAX_LINES を超える行は黙って切り捨てる（有界取り込みポリシー）
    pub fn load<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.lines.clear();
        self.lines.extend(lines.into_iter().take(MAX_LINES));
    }

    /// スナップショットから行シーケンスを丸ごと復元する
    pub fn restore(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    /// 現在の行数
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// バッファが空かどうか
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 容量上限に達しているかどうか
    pub fn is_full(&self) -> bool {
        self.lines.len() >= MAX_LINES
    }

    /// 全行への参照
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 指定行への参照
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// position に行を挿入する（以降の行はひとつ後ろへずれる）
    ///
    /// `position == len()` は末尾追加として許可する
    pub fn insert(&mut self, position: usize, text: String) -> edit::Result<()> {
        if self.is_full() {
            return Err(EditError::CapacityExceeded { max: MAX_LINES });
        }
        if position > self.lines.len() {
            return Err(EditError::IndexOutOfRange {
                index: position,
                len: self.lines.len(),
            });
        }
        self.lines.insert(position, text);
        Ok(())
    }

    /// index の行を削除する（以降の行はひとつ前へずれる）
    pub fn remove(&mut self, index: usize) -> edit::Result<String> {
        if index >= self.lines.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    /// 先頭行から順に走査し、word を部分文字列として含む最初の位置を返す
    pub fn find(&self, word: &str) -> Option<Cursor> {
        self.lines.iter().enumerate().find_map(|(index, line)| {
            line.find(word).map(|column| Cursor::at(index, column))
        })
    }

    /// カーソル位置に word を挿入する
    ///
    /// 桁オフセットが行長を超える場合は行末への追加として扱う
    pub fn insert_word(&mut self, cursor: Cursor, word: &str) -> edit::Result<()> {
        let len = self.lines.len();
        let Some(line) = self.lines.get_mut(cursor.line) else {
            return Err(EditError::IndexOutOfRange {
                index: cursor.line,
                len,
            });
        };
        let at = clamp_column(line, cursor.column);
        line.insert_str(at, word);
        Ok(())
    }

    /// カーソル位置以降で最初に見つかった old_word を new_word に置き換える
    ///
    /// 検索はカーソルの行内に限る。後続の行へは進まない
    pub fn replace_word(&mut self, cursor: Cursor, old_word: &str, new_word: &str) -> edit::Result<()> {
        let len = self.lines.len();
        let Some(line) = self.lines.get_mut(cursor.line) else {
            return Err(EditError::IndexOutOfRange {
                index: cursor.line,
                len,
            });
        };
        let Some(found) = find_from(line, old_word, cursor.column) else {
            return Err(EditError::WordNotFound {
                word: old_word.to_string(),
            });
        };
        line.replace_range(found..found + old_word.len(), new_word);
        Ok(())
    }

    /// カーソル位置以降で最初に見つかった word を取り除く
    pub fn remove_word(&mut self, cursor: Cursor, word: &str) -> edit::Result<()> {
        let len = self.lines.len();
        let Some(line) = self.lines.get_mut(cursor.line) else {
            return Err(EditError::IndexOutOfRange {
                index: cursor.line,
                len,
            });
        };
        let Some(found) = find_from(line, word, cursor.column) else {
            return Err(EditError::WordNotFound {
                word: word.to_string(),
            });
        };
        line.replace_range(found..found + word.len(), "");
        Ok(())
    }
}

/// 桁オフセットを行内の有効なバイト位置に丸める
///
/// 行長超過は行末に、文字境界でない位置は直前の境界に丸める
fn clamp_column(line: &str, column: usize) -> usize {
    let mut at = column.min(line.len());
    while !line.is_char_boundary(at) {
        at -= 1;
    }
    at
}

/// 行内の指定オフセット以降から word を探す
fn find_from(line: &str, word: &str, column: usize) -> Option<usize> {
    let start = clamp_column(line, column);
    line[start..].find(word).map(|offset| start + offset)
}
