use crate::result::TurnOutcome;

use super::{Game, HideToken, PendingHide};

impl Game {
    /// Selects the card at a board position.
    ///
    /// This drives the whole turn state machine: the first selection of a
    /// turn reveals a card, the second resolves the pair. Selections that
    /// cannot advance the game are no-ops answering
    /// [`TurnOutcome::Ignored`], so rapid or stray taps never corrupt the
    /// session. Ignored picks are: an out-of-range position, a removed or
    /// already face-up card, any pick while a mismatch is still
    /// resolving, and any pick after the game is won.
    pub fn select(&mut self, position: usize) -> TurnOutcome {
        if self.is_won() || self.pending.is_some() {
            return TurnOutcome::Ignored;
        }
        if position >= self.board.len()
            || self.removed[position]
            || self.selected.contains(&position)
        {
            return TurnOutcome::Ignored;
        }

        self.selected.push(position);
        if self.selected.len() < 2 {
            return TurnOutcome::Revealed;
        }

        let first = self.selected[0];
        let second = self.selected[1];

        if self.board[first] == self.board[second] {
            self.removed[first] = true;
            self.removed[second] = true;
            self.pairs_found += 1;
            self.selected.clear();

            if self.is_won() {
                TurnOutcome::Won { score: self.score }
            } else {
                TurnOutcome::Matched {
                    pairs_remaining: self.total_pairs() - self.pairs_found,
                }
            }
        } else {
            self.score += 1;
            let hide = PendingHide {
                positions: [first, second],
                delay: self.options.hide_delay,
                token: HideToken(self.next_token),
            };
            self.next_token += 1;
            self.pending = Some(hide);

            TurnOutcome::Mismatched {
                score: self.score,
                hide,
            }
        }
    }

    /// Fires the pending hide: flips the mismatched pair back face down
    /// and opens the board for the next turn.
    ///
    /// Returns `true` if the token matched the pending hide. A stale
    /// token, whether from an earlier mismatch, a repeated timer
    /// callback, or a session with nothing pending, is a no-op returning
    /// `false`.
    pub fn conceal_mismatch(&mut self, token: HideToken) -> bool {
        let Some(hide) = self.pending else {
            return false;
        };
        if hide.token != token {
            return false;
        }

        self.selected.clear();
        self.pending = None;
        true
    }
}
