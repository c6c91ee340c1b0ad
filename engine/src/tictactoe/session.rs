use crate::{RoundId, SessionRng, log};
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::broadcaster::{GameBroadcaster, GameEvent};
use super::error::{InvalidMoveReason, MoveError};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{Difficulty, GameMode, GameStatus, Mark, MoveOrigin, Score};

/// Issued when the computer starts thinking. Redeemed later through
/// [`TicTacToeSession::play_computer_turn`]; a ticket from a round that has
/// since been restarted is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMoveTicket {
    pub round: RoundId,
    pub mark: Mark,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    NextTurn { mark: Mark, computer_to_move: bool },
    Finished(GameStatus),
}

/// Owns every round played between two sides and the running score.
pub struct TicTacToeSession<B: GameBroadcaster> {
    state: TicTacToeGameState,
    score: Score,
    mode: GameMode,
    difficulty: Difficulty,
    computer_mark: Mark,
    round_id: RoundId,
    computer_thinking: bool,
    rng: SessionRng,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng, broadcaster: B) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            score: Score::default(),
            mode: settings.mode,
            difficulty: settings.difficulty,
            computer_mark: settings.computer_mark,
            round_id: RoundId::new(0),
            computer_thinking: false,
            rng,
            broadcaster,
        }
    }

    /// Publishes the full current state, for a front end that just attached.
    pub fn announce(&mut self) {
        self.broadcaster.broadcast(GameEvent::ModeChanged(self.mode));
        self.broadcaster.broadcast(GameEvent::DifficultyChanged(self.difficulty));
        self.broadcaster
            .broadcast(GameEvent::DifficultyVisibilityChanged(self.mode.shows_difficulty()));
        self.broadcaster.broadcast(GameEvent::BoardCleared);
        for index in 0..self.state.board.cells().len() {
            if let Some(mark) = self.state.board.get(index).mark() {
                self.broadcaster.broadcast(GameEvent::CellUpdated { index, mark });
            }
        }
        self.broadcaster.broadcast(GameEvent::TurnChanged(self.state.current_mark));
        self.broadcaster.broadcast(GameEvent::StatusChanged(self.state.status));
        self.broadcaster.broadcast(GameEvent::ScoreChanged(self.score));
    }

    /// A human move. Refused while the computer is the side to move.
    pub fn request_move(&mut self, index: usize, mark: Mark) -> Result<MoveOutcome, MoveError> {
        self.apply_move(index, mark, MoveOrigin::Human)
    }

    /// A human move for whichever side is currently to move.
    pub fn cell_selected(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let mark = self.state.current_mark;
        self.request_move(index, mark)
    }

    pub fn begin_computer_turn(&mut self) -> Option<ComputerMoveTicket> {
        if !self.is_computer_turn() || self.computer_thinking {
            return None;
        }

        self.computer_thinking = true;
        self.broadcaster.broadcast(GameEvent::ComputerThinkingStarted);

        Some(ComputerMoveTicket {
            round: self.round_id,
            mark: self.computer_mark,
            difficulty: self.difficulty,
        })
    }

    /// Picks a move with the ticket's difficulty and applies it.
    pub fn play_computer_turn(
        &mut self,
        ticket: ComputerMoveTicket,
    ) -> Result<MoveOutcome, MoveError> {
        self.check_ticket(&ticket)?;

        let input = BotInput::from_game_state(&self.state);
        let index = calculate_move(ticket.difficulty, input, &mut self.rng)?;
        self.supply_computer_move(ticket, index)
    }

    pub fn supply_computer_move(
        &mut self,
        ticket: ComputerMoveTicket,
        index: usize,
    ) -> Result<MoveOutcome, MoveError> {
        self.check_ticket(&ticket)?;

        let outcome = self.apply_move(index, ticket.mark, MoveOrigin::Computer)?;
        self.end_computer_thinking();
        Ok(outcome)
    }

    fn check_ticket(&self, ticket: &ComputerMoveTicket) -> Result<(), MoveError> {
        if ticket.round != self.round_id {
            log!(
                "Dropping computer move for round {} (current round {})",
                ticket.round,
                self.round_id
            );
            return Err(MoveError::StaleRound {
                ticket: ticket.round,
                current: self.round_id,
            });
        }
        Ok(())
    }

    fn apply_move(
        &mut self,
        index: usize,
        mark: Mark,
        origin: MoveOrigin,
    ) -> Result<MoveOutcome, MoveError> {
        if self.state.status.is_over() {
            return Err(self.reject(index, mark, MoveError::invalid(InvalidMoveReason::GameOver)));
        }

        if origin == MoveOrigin::Human && self.is_computer_turn() {
            let error = MoveError::NotYourTurn { current: self.state.current_mark };
            return Err(self.reject(index, mark, error));
        }

        let status = match self.state.place_mark(mark, index) {
            Ok(status) => status,
            Err(e) => return Err(self.reject(index, mark, e)),
        };

        self.broadcaster.broadcast(GameEvent::CellUpdated { index, mark });

        if status.is_over() {
            self.score.record(&status);
            log!("Round {} finished: {:?}", self.round_id, status);
            self.broadcaster.broadcast(GameEvent::StatusChanged(status));
            self.broadcaster.broadcast(GameEvent::ScoreChanged(self.score));
            return Ok(MoveOutcome::Finished(status));
        }

        let next = self.state.current_mark;
        self.broadcaster.broadcast(GameEvent::TurnChanged(next));
        Ok(MoveOutcome::NextTurn {
            mark: next,
            computer_to_move: self.is_computer_turn(),
        })
    }

    fn reject(&self, index: usize, mark: Mark, error: MoveError) -> MoveError {
        log!("Rejected {} at cell {}: {}", mark, index, error);
        error
    }

    fn end_computer_thinking(&mut self) {
        if self.computer_thinking {
            self.computer_thinking = false;
            self.broadcaster.broadcast(GameEvent::ComputerThinkingEnded);
        }
    }

    /// Clears the board for another round. The score is kept and any
    /// computer move still pending is invalidated.
    pub fn reset_round(&mut self) {
        self.state = TicTacToeGameState::new();
        self.round_id = self.round_id.next();
        self.end_computer_thinking();

        log!("Starting round {}", self.round_id);
        self.broadcaster.broadcast(GameEvent::BoardCleared);
        self.broadcaster.broadcast(GameEvent::TurnChanged(self.state.current_mark));
        self.broadcaster.broadcast(GameEvent::StatusChanged(self.state.status));
    }

    pub fn new_game(&mut self) {
        self.reset_round();
        self.score = Score::default();
        self.broadcaster.broadcast(GameEvent::ScoreChanged(self.score));
    }

    /// Changing mode always restarts the round.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.broadcaster.broadcast(GameEvent::ModeChanged(mode));
        self.broadcaster
            .broadcast(GameEvent::DifficultyVisibilityChanged(mode.shows_difficulty()));
        self.reset_round();
    }

    /// Applies from the next computer turn on; an issued ticket keeps the
    /// difficulty it was created with.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.broadcaster.broadcast(GameEvent::DifficultyChanged(difficulty));
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && self.state.status == GameStatus::InProgress
            && self.state.current_mark == self.computer_mark
    }

    pub fn is_computer_thinking(&self) -> bool {
        self.computer_thinking
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn current_mark(&self) -> Mark {
        self.state.current_mark
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn move_count(&self) -> usize {
        self.state.move_count
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }
}
