use super::report::DrawReport;
use invert_core::{
    InverseDrawer, LotteryRules, Result, SelectionPool, ToggleOutcome, game_label,
};
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

/// One user's board: marked selections plus the drawer used to invert them.
///
/// Every operation is synchronous and completes immediately. The caller owns
/// the session; nothing here is global or shared.
#[derive(Debug)]
pub struct InvertSession<R = StdRng> {
    id: String,
    pool: SelectionPool,
    drawer: InverseDrawer<R>,
    draw_count: usize,
}

impl<R: Rng> InvertSession<R> {
    /// Creates a session with an empty board.
    ///
    /// # Arguments
    ///
    /// * `rules` - Board shape (universe, games, pick size)
    /// * `drawer` - Drawer with its random source
    /// * `draw_count` - Recommendations produced per [`generate`](Self::generate)
    pub fn new(rules: LotteryRules, drawer: InverseDrawer<R>, draw_count: usize) -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(session_id = %id, ?rules, draw_count, "Session created");
        Self {
            id,
            pool: SelectionPool::new(rules),
            drawer,
            draw_count,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rules(&self) -> &LotteryRules {
        self.pool.rules()
    }

    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Marks or unmarks `number` in a game.
    ///
    /// A full selection yields [`ToggleOutcome::CapacityReached`], which the
    /// presentation layer shows as a notice.
    pub fn toggle(&mut self, game_index: usize, number: u8) -> Result<ToggleOutcome> {
        let outcome = self.pool.toggle(game_index, number)?;
        tracing::debug!(
            session_id = %self.id,
            game = %game_label(game_index),
            number,
            ?outcome,
            "Toggled number"
        );
        Ok(outcome)
    }

    pub fn selection_of(&self, game_index: usize) -> Result<&BTreeSet<u8>> {
        self.pool.selection_of(game_index)
    }

    pub fn used_numbers(&self) -> BTreeSet<u8> {
        self.pool.used_numbers()
    }

    pub fn remaining_pool(&self) -> BTreeSet<u8> {
        self.pool.remaining_pool()
    }

    /// Clears every game on the board.
    pub fn reset(&mut self) {
        self.pool.reset();
        tracing::info!(session_id = %self.id, "Board reset");
    }

    /// Draws recommendations from the numbers no game has marked.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientPool` when fewer numbers remain than one pick
    /// needs. The board is left unchanged either way.
    pub fn generate(&mut self) -> Result<DrawReport> {
        let remaining = self.pool.remaining_pool();
        let pick_size = self.pool.rules().capacity;

        let recommendations = match self.drawer.draw(&remaining, pick_size, self.draw_count) {
            Ok(recommendations) => recommendations,
            Err(e) => {
                tracing::warn!(session_id = %self.id, error = %e, "Inverse draw rejected");
                return Err(e);
            }
        };

        tracing::info!(
            session_id = %self.id,
            remaining = remaining.len(),
            count = recommendations.len(),
            "Generated recommendations"
        );

        Ok(DrawReport {
            remaining: remaining.len(),
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> InvertSession {
        InvertSession::new(LotteryRules::default(), InverseDrawer::seeded(seed), 5)
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = session(1);
        let b = session(1);

        a.toggle(0, 10).unwrap();

        assert_ne!(a.id(), b.id());
        assert!(b.used_numbers().is_empty());
    }

    #[test]
    fn test_generate_reports_remaining() {
        let mut s = session(3);
        for n in [1, 2, 3] {
            s.toggle(1, n).unwrap();
        }
        s.toggle(2, 3).unwrap();

        let report = s.generate().unwrap();

        assert_eq!(report.remaining, 42);
        assert_eq!(report.recommendations.len(), 5);
    }

    #[test]
    fn test_generate_leaves_board_unchanged() {
        let mut s = session(4);
        s.toggle(0, 44).unwrap();
        let used = s.used_numbers();

        s.generate().unwrap();
        s.generate().unwrap();

        assert_eq!(s.used_numbers(), used);
    }
}
