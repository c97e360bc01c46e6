use crate::ai::{create_strategy, Difficulty};
use crate::board::{Board, PlayerId};
use crate::errors::EngineError;
use crate::player::{Player, Role};
use crate::rules::{game_is_draw, game_is_won, winning_line};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Who sits in the second seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Player 2 is the computer
    #[default]
    Singleplayer,
    /// Both players are human
    Multiplayer,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Singleplayer => "single",
            GameMode::Multiplayer => "multi",
        }
    }
}

/// Configuration supplied by the presentation layer at game start.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub mode: GameMode,
    /// Opaque avatar reference for player 1
    pub player1_avatar: String,
    /// Opaque avatar reference for player 2
    pub player2_avatar: String,
    /// Computer strength, ignored in multiplayer games
    pub difficulty: Difficulty,
    /// RNG seed for the computer's tie-breaks; random when `None`
    pub seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::Singleplayer,
            player1_avatar: "1".into(),
            player2_avatar: "2".into(),
            difficulty: Difficulty::Medium,
            seed: None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Draw,
}

/// One accepted move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub cell: usize,
}

/// Result of a single move attempt.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The move was applied to the board
    pub accepted: bool,
    /// The move ended the game
    pub game_over: bool,
    /// Winner when the game ended with a completed line, `None` on a draw
    pub winner: Option<PlayerId>,
}

impl TurnOutcome {
    pub fn rejected() -> Self {
        Self {
            accepted: false,
            game_over: false,
            winner: None,
        }
    }

    pub fn continued() -> Self {
        Self {
            accepted: true,
            game_over: false,
            winner: None,
        }
    }

    pub fn won(player: PlayerId) -> Self {
        Self {
            accepted: true,
            game_over: true,
            winner: Some(player),
        }
    }

    pub fn draw() -> Self {
        Self {
            accepted: true,
            game_over: true,
            winner: None,
        }
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }
}

/// Board, players and turn order for exactly one game.
///
/// Starting another game means building another `Engine`.
///
/// # Examples
///
/// ```
/// use tictactoe_engine::engine::{Engine, EngineSettings, GameMode};
/// use tictactoe_engine::board::PlayerId;
///
/// let mut engine = Engine::new(EngineSettings {
///     mode: GameMode::Multiplayer,
///     ..EngineSettings::default()
/// });
///
/// let outcome = engine.apply_move(4).expect("a player holds the turn");
/// assert!(outcome.accepted);
/// assert!(!outcome.game_over);
/// assert_eq!(engine.current_player().unwrap().id(), PlayerId::Two);
///
/// // Occupied cells are rejected without changing anything
/// let outcome = engine.apply_move(4).unwrap();
/// assert!(!outcome.accepted);
/// ```
#[derive(Debug)]
pub struct Engine {
    board: Board,
    /// Player 1 at index 0, player 2 at index 1
    players: [Player; 2],
    mode: GameMode,
    difficulty: Difficulty,
    seed: u64,
    rng: ChaCha20Rng,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl Engine {
    pub fn new(settings: EngineSettings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut players = [
            Player::new(PlayerId::One, Role::Human, true, settings.player1_avatar),
            Player::new(PlayerId::Two, Role::Human, false, settings.player2_avatar),
        ];
        if settings.mode == GameMode::Singleplayer {
            players[1].set_role(Role::Computer);
        }
        Self {
            board: Board::new(),
            players,
            mode: settings.mode,
            difficulty: settings.difficulty,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            status: GameStatus::InProgress,
            history: Vec::with_capacity(9),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }
    pub fn mode(&self) -> GameMode {
        self.mode
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The completed line when the game has been won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.status {
            GameStatus::Won(player) => winning_line(&self.board, player),
            _ => None,
        }
    }

    /// The unique player whose turn flag is set.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoCurrentPlayer`] if no player holds the turn, which
    /// means the engine's own invariant has been broken.
    pub fn current_player(&self) -> Result<&Player, EngineError> {
        self.players
            .iter()
            .find(|p| p.is_current_turn())
            .ok_or(EngineError::NoCurrentPlayer)
    }

    /// Places the current player's mark on `cell`.
    ///
    /// Out-of-range indices, occupied cells and moves after the game has
    /// ended come back as `accepted == false` and leave the state untouched.
    pub fn apply_move(&mut self, cell: usize) -> Result<TurnOutcome, EngineError> {
        let mover = self.current_player()?.id();
        Ok(self.do_turn(mover, cell))
    }

    /// Lets the computer strategy for the configured difficulty pick a cell
    /// and applies it like [`Engine::apply_move`].
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoCurrentPlayer`] if no player holds the turn
    /// - [`EngineError::NotComputerTurn`] if the current player is human
    /// - [`EngineError::NoMoveAvailable`] if the strategy finds no empty cell
    ///   on a board that is still in progress
    pub fn apply_computer_move(&mut self) -> Result<TurnOutcome, EngineError> {
        let current = self.current_player()?;
        let mover = current.id();
        if !current.is_computer() {
            return Err(EngineError::NotComputerTurn { player: mover });
        }
        if self.is_game_over() {
            return Ok(TurnOutcome::rejected());
        }

        let strategy = create_strategy(self.difficulty);
        let cell = strategy
            .select_cell(&self.board, mover, &mut self.rng)
            .ok_or(EngineError::NoMoveAvailable)?;
        debug!(player = %mover, cell, strategy = strategy.name(), "computer selected cell");
        Ok(self.do_turn(mover, cell))
    }

    fn do_turn(&mut self, mover: PlayerId, cell: usize) -> TurnOutcome {
        if self.is_game_over() {
            debug!(player = %mover, cell, "move rejected: game is over");
            return TurnOutcome::rejected();
        }
        if !self.board.claim(cell, mover) {
            debug!(player = %mover, cell, "move rejected: cell unavailable");
            return TurnOutcome::rejected();
        }
        self.players[mover.index()].record_move();
        self.history.push(MoveRecord { player: mover, cell });
        debug!(player = %mover, cell, "move accepted");

        if game_is_won(&self.board, mover) {
            self.status = GameStatus::Won(mover);
            info!(winner = %mover, moves = self.history.len(), "game won");
            return TurnOutcome::won(mover);
        }
        if game_is_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!(moves = self.history.len(), "game drawn");
            return TurnOutcome::draw();
        }

        self.players[mover.index()].set_current_turn(false);
        self.players[mover.other().index()].set_current_turn(true);
        TurnOutcome::continued()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiplayer() -> Engine {
        Engine::new(EngineSettings {
            mode: GameMode::Multiplayer,
            seed: Some(1),
            ..EngineSettings::default()
        })
    }

    #[test]
    fn lost_turn_flag_is_fatal_not_a_rejection() {
        let mut eng = multiplayer();
        eng.players[0].set_current_turn(false);
        assert_eq!(eng.current_player().unwrap_err(), EngineError::NoCurrentPlayer);
        assert_eq!(eng.apply_move(0), Err(EngineError::NoCurrentPlayer));
        assert_eq!(eng.board(), &Board::new());
    }

    #[test]
    fn moves_after_game_over_are_rejected() {
        let mut eng = multiplayer();
        for cell in [0, 3, 1, 4, 2] {
            eng.apply_move(cell).unwrap();
        }
        assert_eq!(eng.status(), GameStatus::Won(PlayerId::One));
        let before = eng.board().clone();
        let outcome = eng.apply_move(8).unwrap();
        assert!(!outcome.accepted);
        assert_eq!(eng.board(), &before);
        assert_eq!(eng.history().len(), 5);
    }

    #[test]
    fn computer_turn_after_its_own_win_is_rejected() {
        let mut eng = Engine::new(EngineSettings {
            difficulty: Difficulty::Hard,
            seed: Some(9),
            ..EngineSettings::default()
        });
        // Hard takes the center, blocks 0-1-2 at 2, then completes 2-4-6.
        for (human, computer) in [(0, 4), (1, 2)] {
            assert!(eng.apply_move(human).unwrap().accepted);
            eng.apply_computer_move().unwrap();
            assert_eq!(eng.history().last().unwrap().cell, computer);
        }
        assert!(eng.apply_move(3).unwrap().accepted);
        let outcome = eng.apply_computer_move().unwrap();
        assert_eq!(outcome, TurnOutcome::won(PlayerId::Two));
        assert_eq!(eng.winning_line(), Some([2, 4, 6]));

        let again = eng.apply_computer_move().unwrap();
        assert!(!again.accepted);
        assert_eq!(eng.history().len(), 6);
    }
}
