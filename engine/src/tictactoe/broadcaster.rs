use tokio::sync::mpsc::UnboundedSender;

use super::types::{Difficulty, GameMode, GameStatus, Mark, Score};

/// Everything a front end needs to redraw itself. The engine never formats
/// text for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CellUpdated { index: usize, mark: Mark },
    BoardCleared,
    TurnChanged(Mark),
    StatusChanged(GameStatus),
    ScoreChanged(Score),
    ModeChanged(GameMode),
    DifficultyChanged(Difficulty),
    DifficultyVisibilityChanged(bool),
    ComputerThinkingStarted,
    ComputerThinkingEnded,
}

pub trait GameBroadcaster {
    fn broadcast(&mut self, event: GameEvent);
}

impl GameBroadcaster for Vec<GameEvent> {
    fn broadcast(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl GameBroadcaster for () {
    fn broadcast(&mut self, _event: GameEvent) {}
}

/// A closed receiver means the front end is gone; events are dropped.
impl GameBroadcaster for UnboundedSender<GameEvent> {
    fn broadcast(&mut self, event: GameEvent) {
        let _ = self.send(event);
    }
}
