//! Difficulty and skill selectors
//!
//! Both are driven by a dropdown index. Indices outside `0..=2` have no
//! mapping, so callers leave the current parameters untouched for them.

use crate::types::{DIFFICULTY_NODE_COUNTS, SKILL_MOVE_BUDGETS};

/// Target power-node count selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of power nodes placed on the board
    pub fn node_count(self) -> u32 {
        DIFFICULTY_NODE_COUNTS[self.index()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Player skill selector: move budget and preview length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Skill {
    #[default]
    Novice,
    Intermediate,
    Expert,
}

impl Skill {
    pub const ALL: [Skill; 3] = [Skill::Novice, Skill::Intermediate, Skill::Expert];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn move_budget(self) -> i32 {
        SKILL_MOVE_BUDGETS[self.index()]
    }

    /// Preview queue length after applying this skill to a queue of `len` slots.
    ///
    /// Never below one.
    pub fn preview_len(self, len: usize) -> usize {
        match self {
            Skill::Novice => len,
            Skill::Intermediate => len.saturating_sub(1).max(1),
            Skill::Expert => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Skill::Novice => "Novice",
            Skill::Intermediate => "Intermediate",
            Skill::Expert => "Expert",
        }
    }
}

/// Next dropdown value, wrapping after the last option.
pub fn cycle_index(index: usize, options: usize) -> usize {
    if options == 0 {
        return 0;
    }
    (index + 1) % options
}
