use crate::board::PlayerId;
use serde::{Deserialize, Serialize};

/// Who supplies a player's moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// Moves come from the caller through `Engine::apply_move`
    Human,
    /// Moves are chosen by the engine's strategy through `Engine::apply_computer_move`
    Computer,
}

/// One seat of the game with its turn flag and move counter.
/// The avatar reference is opaque and passed through unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    role: Role,
    is_current_turn: bool,
    moves_taken: u32,
    avatar: String,
}

impl Player {
    pub fn new(id: PlayerId, role: Role, is_current_turn: bool, avatar: impl Into<String>) -> Self {
        Self {
            id,
            role,
            is_current_turn,
            moves_taken: 0,
            avatar: avatar.into(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn is_current_turn(&self) -> bool {
        self.is_current_turn
    }
    pub fn moves_taken(&self) -> u32 {
        self.moves_taken
    }
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn is_computer(&self) -> bool {
        self.role == Role::Computer
    }

    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub(crate) fn set_current_turn(&mut self, flag: bool) {
        self.is_current_turn = flag;
    }

    pub(crate) fn record_move(&mut self) {
        self.moves_taken += 1;
    }
}
