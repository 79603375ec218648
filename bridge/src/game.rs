use crate::{map, Bridge, Lane, LaneSource};

/// The state machine for one game session.
///
/// Owns the hidden bridge, the move history of the current attempt, and the
/// attempt counter. The position on the bridge is not stored separately: it
/// is the length of the move history by definition.
///
/// Success and failure are never cached. They are derived on demand by
/// comparing the move history against the bridge lane-by-lane, so there is
/// exactly one source of truth.
///
/// User input validation happens before anything reaches this type (see
/// [`crate::validation`]); calling a method outside its legal state is a
/// programming error and panics.
pub struct BridgeGame {
    bridge: Bridge,
    moves: Vec<Lane>,
    attempts: u32,
}

impl BridgeGame {
    /// Starts a session by generating a hidden bridge of `len` tiles.
    ///
    /// `len` must already be validated (see
    /// [`parse_bridge_size`](crate::parse_bridge_size)).
    pub fn new(len: usize, source: &mut impl LaneSource) -> Self {
        Self::from_bridge(Bridge::generate(len, source))
    }

    /// Starts a session on a known bridge.
    pub fn from_bridge(bridge: Bridge) -> Self {
        Self {
            bridge,
            moves: Vec::new(),
            attempts: 1,
        }
    }

    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    /// The index of the next tile to be attempted. Equals the number of
    /// moves recorded since the last reset.
    pub fn position(&self) -> usize {
        self.moves.len()
    }

    pub fn moves(&self) -> &[Lane] {
        &self.moves
    }

    /// How many crossings have been started, including the current one.
    /// Starts at 1 and only ever grows within a session.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Records the player's guess for the current tile and advances the
    /// position by one. The guess is not checked against the bridge here;
    /// correctness is derived when the map or the outcome is requested.
    ///
    /// Panics if the crossing is already decided.
    pub fn record_move(&mut self, guess: Lane) {
        assert!(
            !self.is_over(),
            "record_move called after the crossing was decided"
        );
        self.moves.push(guess);
    }

    /// Index of the first wrong guess of this attempt, if any.
    fn first_mistake(&self) -> Option<usize> {
        self.moves
            .iter()
            .enumerate()
            .find(|&(i, &guess)| guess != self.bridge.lane(i))
            .map(|(i, _)| i)
    }

    /// Whether the player has crossed the whole bridge without a wrong
    /// guess. Derived from the bridge and the move history on every call.
    pub fn is_success(&self) -> bool {
        self.position() == self.bridge.len() && self.first_mistake().is_none()
    }

    /// Whether the current crossing is decided, by success or by a wrong
    /// guess.
    pub fn is_over(&self) -> bool {
        self.first_mistake().is_some() || self.is_success()
    }

    /// Restarts the crossing from tile 0: clears the move history and bumps
    /// the attempt counter. The bridge is kept.
    ///
    /// Panics unless the current crossing is over and was not a success.
    pub fn reset_for_replay(&mut self) {
        assert!(
            self.is_over() && !self.is_success(),
            "reset_for_replay is only legal after a failed crossing"
        );
        self.moves.clear();
        self.attempts += 1;
    }

    /// The map of the current attempt, as of the current position.
    pub fn current_map(&self) -> String {
        map::render_map(&self.bridge, &self.moves)
    }

    /// The final human-readable result block: header, map, success/fail
    /// phrase and attempt count, one per line.
    pub fn format_result(&self) -> String {
        let verdict = if self.is_success() {
            "SUCCESS"
        } else {
            "FAILURE"
        };
        format!(
            "Final game result\n{}\nGame success: {}\nAttempt count: {}",
            self.current_map(),
            verdict,
            self.attempts
        )
    }
}
