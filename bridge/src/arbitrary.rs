use crate::{Lane, LaneSource, MAX_BRIDGE_LEN, MIN_BRIDGE_LEN};

/// A [`LaneSource`] that replays a fixed script of draws.
pub struct ScriptedLaneSource {
    lanes: Vec<Lane>,
    next: usize,
}

impl ScriptedLaneSource {
    pub fn new(lanes: Vec<Lane>) -> Self {
        Self { lanes, next: 0 }
    }
}

impl LaneSource for ScriptedLaneSource {
    fn draw_lane(&mut self) -> Lane {
        let lane = self.lanes[self.next];
        self.next += 1;
        lane
    }
}

impl quickcheck::Arbitrary for Lane {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Lane::Upper, Lane::Lower]).unwrap()
    }
}

/// A bridge of legal length together with a full-length guess sequence.
#[derive(Clone, Debug)]
pub struct CrossingInput {
    pub lanes: Vec<Lane>,
    pub guesses: Vec<Lane>,
}

impl quickcheck::Arbitrary for CrossingInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = MIN_BRIDGE_LEN
            + usize::arbitrary(g) % (MAX_BRIDGE_LEN - MIN_BRIDGE_LEN + 1);
        let lanes = (0..len).map(|_| Lane::arbitrary(g)).collect();
        let guesses = (0..len).map(|_| Lane::arbitrary(g)).collect();
        CrossingInput { lanes, guesses }
    }
}
