use super::outcome::ToggleOutcome;
use crate::error::Result;
use crate::rules::LotteryRules;
use std::collections::BTreeSet;

/// Marked numbers of every game on one board.
///
/// `SelectionPool` is responsible for:
/// - Toggling numbers in a game's selection, bounded by the rules' capacity
/// - Answering which numbers are used by any game
/// - Answering which numbers remain available for an inverse draw
///
/// Selections of different games may overlap. A pool belongs to a single
/// session; it is never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPool {
    rules: LotteryRules,
    selections: Vec<BTreeSet<u8>>,
}

impl Default for SelectionPool {
    fn default() -> Self {
        Self::new(LotteryRules::default())
    }
}

impl SelectionPool {
    /// Creates a pool with every game's selection empty.
    pub fn new(rules: LotteryRules) -> Self {
        Self {
            rules,
            selections: vec![BTreeSet::new(); rules.games],
        }
    }

    pub fn rules(&self) -> &LotteryRules {
        &self.rules
    }

    /// Number of games on the board.
    pub fn games(&self) -> usize {
        self.selections.len()
    }

    /// Marks `number` in the given game, or unmarks it if already marked.
    ///
    /// Adding to a full selection leaves it unchanged and reports
    /// [`ToggleOutcome::CapacityReached`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the game index or number is out of range.
    /// State is not modified in that case.
    pub fn toggle(&mut self, game_index: usize, number: u8) -> Result<ToggleOutcome> {
        self.rules.check_game(game_index)?;
        self.rules.check_number(number)?;

        let capacity = self.rules.capacity;
        let selection = &mut self.selections[game_index];

        if selection.remove(&number) {
            return Ok(ToggleOutcome::Removed);
        }

        if selection.len() >= capacity {
            tracing::warn!(
                game_index,
                number,
                capacity,
                "Selection is full, toggle ignored"
            );
            return Ok(ToggleOutcome::CapacityReached { capacity });
        }

        selection.insert(number);
        Ok(ToggleOutcome::Added)
    }

    /// Returns the marked numbers of one game.
    pub fn selection_of(&self, game_index: usize) -> Result<&BTreeSet<u8>> {
        self.rules.check_game(game_index)?;
        Ok(&self.selections[game_index])
    }

    /// Returns true if `number` is marked in the given game.
    pub fn is_selected(&self, game_index: usize, number: u8) -> Result<bool> {
        Ok(self.selection_of(game_index)?.contains(&number))
    }

    /// Union of all games' selections.
    pub fn used_numbers(&self) -> BTreeSet<u8> {
        self.selections.iter().flatten().copied().collect()
    }

    /// Universe minus [`used_numbers`](Self::used_numbers).
    pub fn remaining_pool(&self) -> BTreeSet<u8> {
        let used = self.used_numbers();
        self.rules
            .universe()
            .into_iter()
            .filter(|n| !used.contains(n))
            .collect()
    }

    /// Clears every game's selection.
    pub fn reset(&mut self) {
        for selection in &mut self.selections {
            selection.clear();
        }
    }
}
