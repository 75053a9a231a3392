//! Logical actions the simulation reads.  Key mapping belongs to the driver.

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
    Confirm,
}

/// Set of actions held during the current frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    held: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(actions: &[Action]) -> Self {
        InputState {
            held: actions.iter().copied().collect(),
        }
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// −1, 0 or +1 from the two movement actions.
    pub fn horizontal(&self) -> f32 {
        let mut dx = 0.0;
        if self.held(Action::MoveLeft) {
            dx -= 1.0;
        }
        if self.held(Action::MoveRight) {
            dx += 1.0;
        }
        dx
    }
}
