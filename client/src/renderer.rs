use tictactoe_engine::tictactoe::{
    CELL_COUNT, Difficulty, GameEvent, GameMode, GameStatus, Mark, Score,
};

/// Terminal view model, fed only by engine events.
pub struct ConsoleRenderer {
    cells: [Option<Mark>; CELL_COUNT],
    current_mark: Mark,
    status: GameStatus,
    score: Score,
    mode: GameMode,
    difficulty: Difficulty,
    difficulty_visible: bool,
    computer_thinking: bool,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            score: Score::default(),
            mode: GameMode::HumanVsHuman,
            difficulty: Difficulty::Medium,
            difficulty_visible: false,
            computer_thinking: false,
        }
    }

    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::CellUpdated { index, mark } => {
                if let Some(cell) = self.cells.get_mut(index) {
                    *cell = Some(mark);
                }
            }
            GameEvent::BoardCleared => self.cells = [None; CELL_COUNT],
            GameEvent::TurnChanged(mark) => self.current_mark = mark,
            GameEvent::StatusChanged(status) => self.status = status,
            GameEvent::ScoreChanged(score) => self.score = score,
            GameEvent::ModeChanged(mode) => self.mode = mode,
            GameEvent::DifficultyChanged(difficulty) => self.difficulty = difficulty,
            GameEvent::DifficultyVisibilityChanged(visible) => self.difficulty_visible = visible,
            GameEvent::ComputerThinkingStarted => self.computer_thinking = true,
            GameEvent::ComputerThinkingEnded => self.computer_thinking = false,
        }
    }

    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::Won(line) => format!("Player {} wins!", line.mark),
            GameStatus::Drawn => "It's a draw!".to_string(),
            GameStatus::InProgress if self.computer_thinking => {
                "Computer is thinking...".to_string()
            }
            GameStatus::InProgress => "Game in progress...".to_string(),
        }
    }

    fn cell_text(&self, index: usize) -> String {
        let highlighted = matches!(self.status, GameStatus::Won(line) if line.contains(index));
        match (self.cells[index], highlighted) {
            (Some(mark), true) => format!("[{}]", mark),
            (Some(mark), false) => format!(" {} ", mark),
            (None, _) => format!(" {} ", index + 1),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            if row > 0 {
                out.push_str("---+---+---\n");
            }
            let cells: Vec<String> = (0..3).map(|col| self.cell_text(row * 3 + col)).collect();
            out.push_str(&cells.join("|"));
            out.push('\n');
        }

        let mode = match self.mode {
            GameMode::HumanVsHuman => "Player vs Player",
            GameMode::HumanVsComputer => "Player vs Computer",
        };
        if self.difficulty_visible {
            out.push_str(&format!("Mode: {} | Difficulty: {}\n", mode, self.difficulty));
        } else {
            out.push_str(&format!("Mode: {}\n", mode));
        }
        out.push_str(&format!("Current player: {}\n", self.current_mark));
        out.push_str(&self.status_text());
        out.push('\n');
        out.push_str(&format!(
            "Score  X: {}  O: {}  Draws: {}\n",
            self.score.x_wins, self.score.o_wins, self.score.draws
        ));
        out
    }
}
