use crate::model::Flashcard;

use super::SessionError;

//
// ─── POSITION ──────────────────────────────────────────────────────────────────
//

/// 1-based card number within the loaded deck, for "Card N of M" labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPosition {
    pub number: usize,
    pub total: usize,
}

//
// ─── ACTIVE DECK ───────────────────────────────────────────────────────────────
//

/// A loaded deck with its cursor.
///
/// Invariant: `cursor < deck.len()` and `deck` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDeck {
    deck: Vec<Flashcard>,
    cursor: usize,
    face_up: bool,
}

impl ActiveDeck {
    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.deck
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn current(&self) -> &Flashcard {
        &self.deck[self.cursor]
    }

    fn last_index(&self) -> usize {
        self.deck.len() - 1
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Flashcard viewer state: either nothing loaded, or a deck with a cursor.
///
/// Navigation clamps at both ends of the deck; it never wraps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlashcardSession {
    #[default]
    Empty,
    Active(ActiveDeck),
}

impl FlashcardSession {
    #[must_use]
    pub fn new() -> Self {
        Self::Empty
    }

    /// Replace the current deck (if any) and show the first card face down.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for an empty deck; the session is left untouched.
    pub fn load(&mut self, deck: Vec<Flashcard>) -> Result<(), SessionError> {
        if deck.is_empty() {
            return Err(SessionError::Empty);
        }
        *self = Self::Active(ActiveDeck {
            deck,
            cursor: 0,
            face_up: false,
        });
        Ok(())
    }

    /// Toggle which side of the current card is showing. No-op without a deck.
    pub fn flip(&mut self) {
        if let Self::Active(active) = self {
            active.face_up = !active.face_up;
        }
    }

    /// Move to the next card. Returns `false` (and changes nothing) at the last card.
    pub fn next(&mut self) -> bool {
        let Self::Active(active) = self else {
            return false;
        };
        if active.cursor >= active.last_index() {
            return false;
        }
        active.cursor += 1;
        active.face_up = false;
        true
    }

    /// Move to the previous card. Returns `false` (and changes nothing) at the first card.
    pub fn previous(&mut self) -> bool {
        let Self::Active(active) = self else {
            return false;
        };
        if active.cursor == 0 {
            return false;
        }
        active.cursor -= 1;
        active.face_up = false;
        true
    }

    /// Discard the deck.
    pub fn reset(&mut self) {
        *self = Self::Empty;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveDeck> {
        match self {
            Self::Active(active) => Some(active),
            Self::Empty => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active().map_or(0, |active| active.deck.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.active().map_or(0, ActiveDeck::cursor)
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.active().is_some_and(ActiveDeck::is_face_up)
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.active().map(ActiveDeck::current)
    }

    /// The text on the side currently facing the learner.
    #[must_use]
    pub fn visible_text(&self) -> Option<&str> {
        self.active().map(|active| {
            let card = active.current();
            if active.face_up {
                card.back()
            } else {
                card.front()
            }
        })
    }

    #[must_use]
    pub fn position(&self) -> Option<CardPosition> {
        self.active().map(|active| CardPosition {
            number: active.cursor + 1,
            total: active.deck.len(),
        })
    }

    /// Fraction of the deck reached, `(cursor + 1) / len`. `0.0` when nothing is loaded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        match self.position() {
            Some(pos) => pos.number as f64 / pos.total as f64,
            None => 0.0,
        }
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.active()
            .is_some_and(|active| active.cursor < active.last_index())
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.active().is_some_and(|active| active.cursor > 0)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
