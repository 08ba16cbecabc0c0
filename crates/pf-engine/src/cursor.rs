//! Line enumeration.
//!
//! The engine walks its line elements with a stateful cursor: `first()` and
//! `next()` return a positive ordinal while a line is active and `0` once the
//! list is exhausted. [`Lines`] wraps that protocol in an iterator.

use core::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

/// One line element as read through the active-element accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineElement {
    pub name: String,
    /// Number of phases (conductors per terminal).
    pub phases: usize,
    /// Current magnitude/angle pairs, interleaved: `[|I1|, ∠I1, |I2|, ∠I2, ...]`.
    ///
    /// The first `2 * phases` entries describe terminal 1; anything after that
    /// belongs to the other terminals.
    #[serde(default)]
    pub currents_mag_ang: Vec<f64>,
}

/// First/next cursor over the circuit's line elements.
pub trait LineCursor {
    /// Move to the first line. Returns its ordinal, or `0` when there are no lines.
    fn first(&mut self) -> EngineResult<i32>;

    /// Move to the following line. Returns its ordinal, or `0` once exhausted.
    fn next(&mut self) -> EngineResult<i32>;

    /// Read the line the cursor currently points at.
    fn active_line(&self) -> EngineResult<LineElement>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Fresh,
    Active,
    Exhausted,
}

/// Single-pass iterator over the line elements of a cursor.
///
/// Not restartable: create a new `Lines` to sweep again. A cursor error is
/// yielded once and ends the sweep.
pub struct Lines<'a, C: LineCursor + ?Sized> {
    cursor: &'a mut C,
    state: CursorState,
}

impl<'a, C: LineCursor + ?Sized> Lines<'a, C> {
    pub fn new(cursor: &'a mut C) -> Self {
        Self {
            cursor,
            state: CursorState::Fresh,
        }
    }
}

impl<C: LineCursor + ?Sized> Iterator for Lines<'_, C> {
    type Item = EngineResult<LineElement>;

    fn next(&mut self) -> Option<Self::Item> {
        let ordinal = match self.state {
            CursorState::Fresh => self.cursor.first(),
            CursorState::Active => LineCursor::next(&mut *self.cursor),
            CursorState::Exhausted => return None,
        };

        match ordinal {
            Ok(n) if n > 0 => {
                tracing::trace!(ordinal = n, "line cursor advanced");
                self.state = CursorState::Active;
                let line = self.cursor.active_line();
                if line.is_err() {
                    self.state = CursorState::Exhausted;
                }
                Some(line)
            }
            Ok(_) => {
                self.state = CursorState::Exhausted;
                None
            }
            Err(err) => {
                self.state = CursorState::Exhausted;
                Some(Err(err))
            }
        }
    }
}

impl<C: LineCursor + ?Sized> FusedIterator for Lines<'_, C> {}
