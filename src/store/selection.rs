use crate::model::{Fighter, Move};

/// Who attacks, who defends, and which attacking move is being inspected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub attacker: Option<Fighter>,
    pub defender: Option<Fighter>,
    pub focused_move: Option<Move>,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    state: Selection,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    pub fn attacker(&self) -> Option<&Fighter> {
        self.state.attacker.as_ref()
    }

    pub fn defender(&self) -> Option<&Fighter> {
        self.state.defender.as_ref()
    }

    pub fn focused_move(&self) -> Option<&Move> {
        self.state.focused_move.as_ref()
    }

    /// A focused move belongs to the previous attacker's moveset, so it is
    /// dropped along with them.
    pub fn set_attacker(&mut self, attacker: Option<Fighter>) {
        self.state.attacker = attacker;
        self.state.focused_move = None;
    }

    pub fn set_defender(&mut self, defender: Option<Fighter>) {
        self.state.defender = defender;
    }

    pub fn set_focused_move(&mut self, focused: Option<Move>) {
        self.state.focused_move = focused;
    }

    pub fn reset(&mut self) {
        self.state = Selection::default();
    }
}
