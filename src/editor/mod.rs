//! 編集エンジン
//!
//! 行バッファへの検証付き操作とスナップショット履歴の統合
//!
//! 変更系の操作はすべて同じ手順を踏む: 検証 → 変更前スナップショットの
//! 記録 → 変更。検証に失敗した場合はバッファも履歴も変化しない

pub mod history;

pub use history::{HistoryStack, Snapshot, MAX_UNDO};

use crate::buffer::{Cursor, LineBuffer};
use crate::error::{edit, EditError, HistoryAction};

/// 行編集エンジン
///
/// ライブバッファと履歴を排他的に所有する。エディタセッションごとに
/// 明示的に生成して受け渡す（プロセス全域の共有状態は持たない）
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: LineBuffer,
    history: HistoryStack,
}

impl LineEditor {
    /// 空のバッファを持つエンジンを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 外部ソースの行でバッファを置き換える
    ///
    /// 容量を超える行は切り捨てる。履歴には触れない
    pub fn load<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.buffer.load(lines);
    }

    /// 全行への参照
    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    /// 現在の行数
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// バッファが空かどうか
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// word を含む最初の行を探す（純粋な読み取り）
    pub fn search(&self, word: &str) -> Option<Cursor> {
        self.buffer.find(word)
    }

    /// position に新しい行を挿入する
    pub fn insert_line(&mut self, position: usize, text: String) -> edit::Result<()> {
        let before = Snapshot::capture(self.buffer.lines());
        self.buffer.insert(position, text)?;
        self.history.record(before);
        Ok(())
    }

    /// カーソル位置に word を挿入する
    pub fn insert_word(&mut self, cursor: Cursor, word: &str) -> edit::Result<()> {
        let before = Snapshot::capture(self.buffer.lines());
        self.buffer.insert_word(cursor, word)?;
        self.history.record(before);
        Ok(())
    }

    /// カーソル位置以降の old_word を new_word に置き換える
    pub fn update_word(
        &mut self,
        cursor: Cursor,
        old_word: &str,
        new_word: &str,
    ) -> edit::Result<()> {
        let before = Snapshot::capture(self.buffer.lines());
        self.buffer.replace_word(cursor, old_word, new_word)?;
        self.history.record(before);
        Ok(())
    }

    /// index の行を削除する
    pub fn delete_line(&mut self, index: usize) -> edit::Result<()> {
        let before = Snapshot::capture(self.buffer.lines());
        self.buffer.remove(index)?;
        self.history.record(before);
        Ok(())
    }

    /// カーソル位置以降の word を取り除く
    pub fn delete_word(&mut self, cursor: Cursor, word: &str) -> edit::Result<()> {
        let before = Snapshot::capture(self.buffer.lines());
        self.buffer.remove_word(cursor, word)?;
        self.history.record(before);
        Ok(())
    }

    /// 直前の変更を取り消す
    ///
    /// 置き換えられるライブ状態はリドゥ側へ退避する
    pub fn undo(&mut self) -> edit::Result<()> {
        let Some(snapshot) = self.history.take_for_undo() else {
            return Err(EditError::HistoryEmpty {
                action: HistoryAction::Undo,
            });
        };
        self.history
            .push_redo(Snapshot::capture(self.buffer.lines()));
        self.buffer.restore(snapshot.into_lines());
        Ok(())
    }

    /// 取り消した変更をやり直す
    pub fn redo(&mut self) -> edit::Result<()> {
        let Some(snapshot) = self.history.take_for_redo() else {
            return Err(EditError::HistoryEmpty {
                action: HistoryAction::Redo,
            });
        };
        self.history
            .push_undo(Snapshot::capture(self.buffer.lines()));
        self.buffer.restore(snapshot.into_lines());
        Ok(())
    }

    /// アンドゥ可能な変更があるか
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// リドゥ可能な変更があるか
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
