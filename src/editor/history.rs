//! スナップショット履歴
//!
//! アンドゥ／リドゥのための有界深さのバッファ複製スタック
//!
//! 両スタックとも MAX_UNDO 深さで有界。あふれた場合は最古のエントリから
//! 追い出す。履歴の都合で編集そのものを拒否することはない

use std::collections::VecDeque;

/// 片側の履歴が保持できる最大スナップショット数
pub const MAX_UNDO: usize = 3;

/// ある時点のバッファ全行の不変コピー
///
/// ライブバッファの記憶領域を共有しない（以後の編集から独立）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    lines: Vec<String>,
}

impl Snapshot {
    /// 現在の行シーケンスを複製してスナップショットを作成
    pub fn capture(lines: &[String]) -> Self {
        Self {
            lines: lines.to_vec(),
        }
    }

    /// 保持している行シーケンスを取り出す
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// 保持している行シーケンスへの参照
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// 編集履歴スタック
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    undo: VecDeque<Snapshot>,
    redo: VecDeque<Snapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// 変更前の状態を記録する（通常の編集操作用）
    ///
    /// 新しい編集はリドゥ側の履歴を無効化する
    pub fn record(&mut self, state: Snapshot) {
        self.push_undo(state);
        self.redo.clear();
    }

    /// アンドゥスタックへ積む（リドゥ履歴は消さない）
    ///
    /// リドゥ実行時に置き換えられる状態の退避にも使う
    pub fn push_undo(&mut self, state: Snapshot) {
        while self.undo.len() >= MAX_UNDO {
            self.undo.pop_front();
        }
        self.undo.push_back(state);
    }

    /// リドゥスタックへ積む（アンドゥ実行時の状態退避用）
    pub fn push_redo(&mut self, state: Snapshot) {
        while self.redo.len() >= MAX_UNDO {
            self.redo.pop_front();
        }
        self.redo.push_back(state);
    }

    /// 直近のアンドゥスナップショットを取り出す
    pub fn take_for_undo(&mut self) -> Option<Snapshot> {
        self.undo.pop_back()
    }

    /// 直近のリドゥスナップショットを取り出す
    pub fn take_for_redo(&mut self) -> Option<Snapshot> {
        self.redo.pop_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_of(text: &str) -> Snapshot {
        Snapshot::capture(&[text.to_string()])
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = HistoryStack::new();
        history.push_redo(snapshot_of("redoable"));
        assert!(history.can_redo());

        history.record(snapshot_of("edit"));
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn test_push_undo_keeps_redo() {
        let mut history = HistoryStack::new();
        history.push_redo(snapshot_of("redoable"));
        history.push_undo(snapshot_of("undoable"));

        assert!(history.can_redo());
        assert!(history.can_undo());
    }

    #[test]
    fn test_overflow_evicts_oldest_first() {
        let mut history = HistoryStack::new();
        for i in 0..MAX_UNDO + 2 {
            history.record(snapshot_of(&format!("state {}", i)));
        }

        assert_eq!(history.undo_depth(), MAX_UNDO);

        // 取り出しは新しい順。最古の state 0 / state 1 は追い出されている
        assert_eq!(
            history.take_for_undo().unwrap().lines(),
            &["state 4".to_string()]
        );
        assert_eq!(
            history.take_for_undo().unwrap().lines(),
            &["state 3".to_string()]
        );
        assert_eq!(
            history.take_for_undo().unwrap().lines(),
            &["state 2".to_string()]
        );
        assert!(history.take_for_undo().is_none());
    }

    #[test]
    fn test_redo_overflow_is_bounded() {
        let mut history = HistoryStack::new();
        for i in 0..MAX_UNDO + 1 {
            history.push_redo(snapshot_of(&format!("state {}", i)));
        }

        assert_eq!(history.redo_depth(), MAX_UNDO);
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let mut lines = vec!["original".to_string()];
        let snapshot = Snapshot::capture(&lines);

        lines[0].push_str(" mutated");
        assert_eq!(snapshot.lines(), &["original".to_string()]);
    }
}
