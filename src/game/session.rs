use rand::Rng;

use crate::game::rewards::{self, RewardDefinition};

/// One activation of the mini-game, from draw to dismissal. A single tagged
/// value so that illegal combinations (revealed with no selection, a
/// selection outside the draw) cannot be represented.
#[derive(Clone, PartialEq, Debug)]
enum Phase {
    Idle,
    Drawn {
        drawn: Vec<&'static RewardDefinition>,
    },
    Revealed {
        drawn: Vec<&'static RewardDefinition>,
        selected_id: &'static str,
    },
}

/// The reward-reveal state machine. Pure logic: no rendering, no effects,
/// no timers. The presentation layer reads snapshots and requests
/// transitions; it never mutates state directly.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealSession {
    phase: Phase,
}

impl RevealSession {
    pub fn idle() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Draws a fresh hand. Legal from any state: from `Drawn` it simply
    /// redraws, from `Revealed` it discards the old result.
    pub fn start<R: Rng>(&mut self, rng: &mut R) {
        self.phase = Phase::Drawn {
            drawn: rewards::draw_three(rng),
        };
    }

    /// Locks in the user's pick. Succeeds only while `Drawn` and only for an
    /// id inside the current draw, returning the picked definition so the
    /// caller can fire the celebratory effect. Everything else is a silent
    /// no-op: the first pick is final, and an unknown id changes nothing.
    pub fn select(&mut self, id: &str) -> Option<&'static RewardDefinition> {
        let Phase::Drawn { drawn } = &self.phase else {
            return None;
        };
        let picked = drawn.iter().copied().find(|d| d.id == id)?;
        let drawn = drawn.clone();
        self.phase = Phase::Revealed {
            drawn,
            selected_id: picked.id,
        };
        Some(picked)
    }

    /// Back to `Idle`, dropping the draw and the pick. Safe from any state.
    pub fn dismiss(&mut self) {
        self.phase = Phase::Idle;
    }

    /// The current draw, in the order it was dealt. Empty while `Idle`. The
    /// order never changes for the lifetime of the session.
    pub fn drawn(&self) -> &[&'static RewardDefinition] {
        match &self.phase {
            Phase::Idle => &[],
            Phase::Drawn { drawn } | Phase::Revealed { drawn, .. } => drawn,
        }
    }

    pub fn selected_id(&self) -> Option<&'static str> {
        match &self.phase {
            Phase::Revealed { selected_id, .. } => Some(selected_id),
            _ => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, Phase::Revealed { .. })
    }

    /// Whether the overlay should be shown at all.
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rewards::{CATALOG, DRAW_SIZE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn started(seed: u64) -> RevealSession {
        let mut session = RevealSession::idle();
        session.start(&mut StdRng::seed_from_u64(seed));
        session
    }

    #[test]
    fn idle_session_is_empty() {
        let session = RevealSession::idle();
        assert!(!session.is_active());
        assert!(!session.is_revealed());
        assert!(session.drawn().is_empty());
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn start_deals_three_distinct_cards() {
        let session = started(1);
        assert!(session.is_active());
        assert!(!session.is_revealed());
        assert_eq!(session.drawn().len(), DRAW_SIZE);
        let ids: HashSet<&str> = session.drawn().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DRAW_SIZE);
    }

    #[test]
    fn select_drawn_card_reveals_it() {
        let mut session = started(2);
        let target = session.drawn()[1].id;
        let picked = session.select(target).expect("pick should succeed");
        assert_eq!(picked.id, target);
        assert!(session.is_revealed());
        assert_eq!(session.selected_id(), Some(target));
    }

    #[test]
    fn first_pick_is_final() {
        let mut session = started(3);
        let first = session.drawn()[0].id;
        let other = session.drawn()[2].id;
        assert!(session.select(first).is_some());

        // Same or different id, a second pick changes nothing.
        assert!(session.select(other).is_none());
        assert!(session.select(first).is_none());
        assert_eq!(session.selected_id(), Some(first));
        assert!(session.is_revealed());
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut session = started(4);
        let before = session.clone();
        assert!(session.select("nonexistent-id").is_none());
        assert_eq!(session, before);
        assert!(!session.is_revealed());
    }

    #[test]
    fn select_while_idle_is_ignored() {
        let mut session = RevealSession::idle();
        assert!(session.select(CATALOG[0].id).is_none());
        assert!(!session.is_active());
    }

    #[test]
    fn draw_order_is_stable_across_reveal() {
        let mut session = started(5);
        let order: Vec<&str> = session.drawn().iter().map(|d| d.id).collect();
        session.select(order[2]).expect("pick should succeed");
        let after: Vec<&str> = session.drawn().iter().map(|d| d.id).collect();
        assert_eq!(order, after);
    }

    #[test]
    fn dismiss_resets_from_any_state() {
        let mut session = RevealSession::idle();
        session.dismiss();
        assert!(!session.is_active());

        session = started(6);
        session.dismiss();
        assert!(!session.is_active());
        assert!(session.drawn().is_empty());

        session = started(7);
        let id = session.drawn()[0].id;
        session.select(id).expect("pick should succeed");
        session.dismiss();
        assert!(!session.is_active());
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn start_redraws_and_clears_previous_pick() {
        let mut session = started(8);
        let id = session.drawn()[0].id;
        session.select(id).expect("pick should succeed");

        session.start(&mut StdRng::seed_from_u64(9));
        assert!(session.is_active());
        assert!(!session.is_revealed());
        assert_eq!(session.selected_id(), None);
        assert_eq!(session.drawn().len(), DRAW_SIZE);

        // Re-entrant from Drawn: just another independent draw.
        session.start(&mut StdRng::seed_from_u64(10));
        assert!(!session.is_revealed());
        assert_eq!(session.drawn().len(), DRAW_SIZE);
    }

    #[test]
    fn full_cycle_scenario() {
        // start -> permutation of the pool, select(B), redundant select(A),
        // dismiss, ready again.
        let mut session = started(11);
        let drawn_ids: HashSet<&str> = session.drawn().iter().map(|d| d.id).collect();
        let pool_ids: HashSet<&str> = CATALOG.iter().map(|d| d.id).collect();
        assert_eq!(drawn_ids, pool_ids);

        let b = session.drawn()[1].id;
        let a = session.drawn()[0].id;
        session.select(b).expect("pick should succeed");
        assert!(session.is_revealed());
        assert_eq!(session.selected_id(), Some(b));

        assert!(session.select(a).is_none());
        assert_eq!(session.selected_id(), Some(b));

        session.dismiss();
        assert!(!session.is_active());

        session.start(&mut StdRng::seed_from_u64(12));
        assert!(session.is_active());
        assert!(!session.is_revealed());
    }
}
