//! The flip/match state machine for one play-through.
//!
//! ## Transitions
//!
//! ```text
//! AwaitingFirstFlip --tap--> AwaitingSecondFlip --tap--> match ----> AwaitingFirstFlip
//!                                                  |                  (or Won)
//!                                                  +--> mismatch --> Resolving
//! Resolving --resolve_mismatch--> AwaitingFirstFlip
//! ```
//!
//! The session never waits on a clock. A mismatch locks the board and
//! stays locked until the caller, after its own display delay, calls
//! [`GameSession::resolve_mismatch`].

use tracing::{debug, info};

use super::outcome::{GamePhase, IgnoreReason, ResolveOutcome, TapOutcome};
use crate::cards::{generate_deck, CardView, DeckEntry, IdentityCatalog};
use crate::core::{GameError, GameResult, GameRng, SessionId};

/// Face-up selection state.
///
/// Encoding the selection this way keeps `first_selection` and `locked`
/// consistent: the board is locked exactly when two tiles are face up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Selection {
    None,
    One(usize),
    Mismatch(usize, usize),
}

/// Mutable state for one play-through.
#[derive(Clone, Debug)]
pub struct GameSession {
    id: SessionId,
    tile_count: usize,
    deck: Vec<DeckEntry>,
    moves: u32,
    matched_pairs: usize,
    selection: Selection,
}

impl GameSession {
    /// Start a session on an already-dealt deck.
    ///
    /// Panics if the deck is empty or has an odd number of tiles.
    #[must_use]
    pub fn new(id: SessionId, deck: Vec<DeckEntry>) -> Self {
        assert!(!deck.is_empty(), "Deck must not be empty");
        assert!(deck.len() % 2 == 0, "Deck must have an even number of tiles");

        Self {
            id,
            tile_count: deck.len(),
            deck,
            moves: 0,
            matched_pairs: 0,
            selection: Selection::None,
        }
    }

    /// Deal a fresh deck from the catalog and start a session on it.
    #[must_use]
    pub fn deal(id: SessionId, tile_count: usize, catalog: &IdentityCatalog, rng: &mut GameRng) -> Self {
        Self::new(id, generate_deck(tile_count, catalog.identities(), rng))
    }

    // === Queries ===

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tile_count / 2
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// The face-up tile waiting for a partner, if any.
    #[must_use]
    pub fn first_selection(&self) -> Option<usize> {
        match self.selection {
            Selection::None => None,
            Selection::One(i) | Selection::Mismatch(i, _) => Some(i),
        }
    }

    /// The face-up mismatched pair, while locked.
    #[must_use]
    pub fn mismatched_pair(&self) -> Option<(usize, usize)> {
        match self.selection {
            Selection::Mismatch(a, b) => Some((a, b)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self.selection, Selection::Mismatch(..))
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.matched_pairs == self.pair_count()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.is_won() {
            return GamePhase::Won;
        }
        match self.selection {
            Selection::None => GamePhase::AwaitingFirstFlip,
            Selection::One(_) => GamePhase::AwaitingSecondFlip,
            Selection::Mismatch(..) => GamePhase::Resolving,
        }
    }

    /// The deck in board order.
    #[must_use]
    pub fn deck(&self) -> &[DeckEntry] {
        &self.deck
    }

    /// Rendering views of every tile in board order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CardView<'_>> {
        self.deck.iter().map(DeckEntry::view).collect()
    }

    /// Index of the other tile carrying the same identity as `index`.
    #[must_use]
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        let identity = &self.deck.get(index)?.identity;
        self.deck
            .iter()
            .enumerate()
            .find(|&(i, e)| i != index && e.identity.pairs_with(identity))
            .map(|(i, _)| i)
    }

    // === Transitions ===

    /// Handle a tap on the tile at `index`.
    ///
    /// Errors only when `index` is off the board.
    pub fn card_tapped(&mut self, index: usize) -> GameResult<TapOutcome> {
        if index >= self.deck.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.deck.len(),
            });
        }

        let selection = self.selection;
        let first = match selection {
            Selection::Mismatch(..) => return Ok(self.ignore(index, IgnoreReason::Locked)),
            Selection::One(first) if first == index => {
                return Ok(self.ignore(index, IgnoreReason::AlreadySelected));
            }
            _ if self.deck[index].matched => {
                return Ok(self.ignore(index, IgnoreReason::AlreadyMatched));
            }
            Selection::None => {
                self.selection = Selection::One(index);
                debug!(session = %self.id, index, "first flip");
                return Ok(TapOutcome::FirstFlipAccepted { index });
            }
            Selection::One(first) => first,
        };

        self.moves += 1;
        let second = index;

        if self.deck[first].identity.pairs_with(&self.deck[second].identity) {
            self.deck[first].matched = true;
            self.deck[second].matched = true;
            self.matched_pairs += 1;
            self.selection = Selection::None;
            debug!(session = %self.id, first, second, moves = self.moves, "match");

            if self.is_won() {
                info!(session = %self.id, moves = self.moves, "all pairs found");
                return Ok(TapOutcome::GameWon {
                    first,
                    second,
                    moves: self.moves,
                });
            }
            Ok(TapOutcome::MatchFound { first, second })
        } else {
            self.selection = Selection::Mismatch(first, second);
            debug!(session = %self.id, first, second, moves = self.moves, "mismatch");
            Ok(TapOutcome::MismatchDetected { first, second })
        }
    }

    /// Hide a shown mismatch and unlock the board.
    ///
    /// Errors with `NotLocked` if no mismatch is pending.
    pub fn resolve_mismatch(&mut self) -> GameResult<ResolveOutcome> {
        match self.selection {
            Selection::Mismatch(first, second) => {
                self.selection = Selection::None;
                debug!(session = %self.id, first, second, "mismatch resolved");
                Ok(ResolveOutcome::Ready)
            }
            _ => Err(GameError::NotLocked),
        }
    }

    fn ignore(&self, index: usize, reason: IgnoreReason) -> TapOutcome {
        debug!(session = %self.id, index, ?reason, "tap ignored");
        TapOutcome::Ignored(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardIdentity;

    /// Deck laid out as a b a b ... so tile `i` pairs with `i + n/2`.
    fn fixed_session(pairs: usize) -> GameSession {
        let deck = (0..pairs * 2)
            .map(|i| {
                let n = i % pairs;
                DeckEntry::new(CardIdentity::new(format!("img{n}"), format!("img/img{n}.jpg")), i)
            })
            .collect();
        GameSession::new(SessionId::FIRST, deck)
    }

    #[test]
    fn test_new_session() {
        let session = fixed_session(5);

        assert_eq!(session.tile_count(), 10);
        assert_eq!(session.pair_count(), 5);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.matched_pairs(), 0);
        assert_eq!(session.first_selection(), None);
        assert!(!session.is_locked());
        assert_eq!(session.phase(), GamePhase::AwaitingFirstFlip);
    }

    #[test]
    fn test_first_flip() {
        let mut session = fixed_session(5);

        assert_eq!(session.card_tapped(3), Ok(TapOutcome::FirstFlipAccepted { index: 3 }));
        assert_eq!(session.first_selection(), Some(3));
        assert_eq!(session.moves(), 0);
        assert_eq!(session.phase(), GamePhase::AwaitingSecondFlip);
    }

    #[test]
    fn test_same_tile_twice_ignored() {
        let mut session = fixed_session(5);
        session.card_tapped(2).unwrap();

        assert_eq!(
            session.card_tapped(2),
            Ok(TapOutcome::Ignored(IgnoreReason::AlreadySelected))
        );
        assert_eq!(session.moves(), 0);
        assert_eq!(session.first_selection(), Some(2));
    }

    #[test]
    fn test_match() {
        let mut session = fixed_session(5);
        session.card_tapped(0).unwrap();

        assert_eq!(session.card_tapped(5), Ok(TapOutcome::MatchFound { first: 0, second: 5 }));
        assert_eq!(session.moves(), 1);
        assert_eq!(session.matched_pairs(), 1);
        assert!(session.deck()[0].matched && session.deck()[5].matched);
        assert_eq!(session.first_selection(), None);
    }

    #[test]
    fn test_matched_tile_ignored() {
        let mut session = fixed_session(5);
        session.card_tapped(0).unwrap();
        session.card_tapped(5).unwrap();

        assert_eq!(session.card_tapped(5), Ok(TapOutcome::Ignored(IgnoreReason::AlreadyMatched)));

        // Also as a would-be second flip
        session.card_tapped(1).unwrap();
        assert_eq!(session.card_tapped(0), Ok(TapOutcome::Ignored(IgnoreReason::AlreadyMatched)));
        assert_eq!(session.moves(), 1);
        assert_eq!(session.first_selection(), Some(1));
    }

    #[test]
    fn test_mismatch_locks_until_resolved() {
        let mut session = fixed_session(5);
        session.card_tapped(0).unwrap();

        assert_eq!(
            session.card_tapped(1),
            Ok(TapOutcome::MismatchDetected { first: 0, second: 1 })
        );
        assert!(session.is_locked());
        assert_eq!(session.phase(), GamePhase::Resolving);
        assert_eq!(session.mismatched_pair(), Some((0, 1)));

        assert_eq!(session.card_tapped(2), Ok(TapOutcome::Ignored(IgnoreReason::Locked)));
        assert_eq!(session.moves(), 1);

        assert_eq!(session.resolve_mismatch(), Ok(ResolveOutcome::Ready));
        assert!(!session.is_locked());
        assert_eq!(session.first_selection(), None);
        assert_eq!(session.card_tapped(2), Ok(TapOutcome::FirstFlipAccepted { index: 2 }));
    }

    #[test]
    fn test_resolve_when_not_locked() {
        let mut session = fixed_session(5);
        assert_eq!(session.resolve_mismatch(), Err(GameError::NotLocked));

        session.card_tapped(0).unwrap();
        assert_eq!(session.resolve_mismatch(), Err(GameError::NotLocked));
    }

    #[test]
    fn test_out_of_range() {
        let mut session = fixed_session(5);
        assert_eq!(
            session.card_tapped(10),
            Err(GameError::IndexOutOfRange { index: 10, len: 10 })
        );
    }

    #[test]
    fn test_perfect_game() {
        let mut session = fixed_session(5);

        for i in 0..4 {
            session.card_tapped(i).unwrap();
            assert!(matches!(session.card_tapped(i + 5), Ok(TapOutcome::MatchFound { .. })));
        }
        session.card_tapped(4).unwrap();

        assert_eq!(
            session.card_tapped(9),
            Ok(TapOutcome::GameWon { first: 4, second: 9, moves: 5 })
        );
        assert!(session.is_won());
        assert_eq!(session.phase(), GamePhase::Won);

        // Everything is matched now
        assert_eq!(session.card_tapped(0), Ok(TapOutcome::Ignored(IgnoreReason::AlreadyMatched)));
    }

    #[test]
    fn test_partner_of() {
        let session = fixed_session(5);

        assert_eq!(session.partner_of(0), Some(5));
        assert_eq!(session.partner_of(7), Some(2));
        assert_eq!(session.partner_of(10), None);
    }

    #[test]
    fn test_deal_and_snapshot() {
        let catalog = IdentityCatalog::standard();
        let mut rng = GameRng::new(42);
        let session = GameSession::deal(SessionId::FIRST, 20, &catalog, &mut rng);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.len(), 20);
        assert!(snapshot.iter().all(|v| !v.matched));
        assert_eq!(snapshot[3].name, session.deck()[3].identity.name);
    }

    #[test]
    #[should_panic(expected = "even number")]
    fn test_odd_deck_panics() {
        let deck = vec![DeckEntry::new(CardIdentity::new("a", "a"), 0)];
        let _ = GameSession::new(SessionId::FIRST, deck);
    }
}
