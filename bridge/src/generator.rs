use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Lane;

/// Supplies the lane for each tile while a bridge is being built.
///
/// This is the only nondeterministic primitive in the engine. It is a trait
/// so that tests can script the draws and get a known bridge.
pub trait LaneSource {
    fn draw_lane(&mut self) -> Lane;
}

/// A [`LaneSource`] that flips a fair coin per tile.
pub struct RandomLaneSource<R> {
    rng: R,
}

impl<R: Rng> RandomLaneSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> LaneSource for RandomLaneSource<R> {
    fn draw_lane(&mut self) -> Lane {
        if self.rng.gen::<bool>() {
            Lane::Upper
        } else {
            Lane::Lower
        }
    }
}

/// The hidden sequence of lane assignments the player has to guess.
///
/// Fixed once generated; it survives replays and is only dropped with the
/// game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge(Vec<Lane>);

impl Bridge {
    /// Builds a bridge of `len` tiles by drawing one lane per tile, in tile
    /// order, with no correlation between tiles.
    ///
    /// `len` must already have been validated by the caller (see
    /// [`parse_bridge_size`](crate::parse_bridge_size)); it is not re-checked
    /// here.
    pub fn generate(len: usize, source: &mut impl LaneSource) -> Self {
        Bridge((0..len).map(|_| source.draw_lane()).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The true lane at tile `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn lane(&self, index: usize) -> Lane {
        self.0[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = Lane> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Lane>> for Bridge {
    fn from(lanes: Vec<Lane>) -> Self {
        Bridge(lanes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::ScriptedLaneSource;

    #[test]
    fn generate_draws_one_lane_per_tile() {
        let mut source = ScriptedLaneSource::new(vec![
            Lane::Upper,
            Lane::Upper,
            Lane::Lower,
            Lane::Upper,
            Lane::Lower,
        ]);
        let bridge = Bridge::generate(5, &mut source);
        assert_eq!(bridge.len(), 5);
        assert_eq!(
            bridge,
            Bridge::from(vec![
                Lane::Upper,
                Lane::Upper,
                Lane::Lower,
                Lane::Upper,
                Lane::Lower,
            ])
        );
    }

    #[test]
    fn generate_is_deterministic_for_identical_draws() {
        let script = vec![Lane::Lower, Lane::Upper, Lane::Lower, Lane::Lower, Lane::Upper];
        let first = Bridge::generate(5, &mut ScriptedLaneSource::new(script.clone()));
        let second = Bridge::generate(5, &mut ScriptedLaneSource::new(script));
        assert_eq!(first, second);
    }

    #[test]
    fn random_source_reproduces_with_the_same_seed() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let first = Bridge::generate(20, &mut RandomLaneSource::new(StdRng::seed_from_u64(7)));
        let second = Bridge::generate(20, &mut RandomLaneSource::new(StdRng::seed_from_u64(7)));
        assert_eq!(first, second);
    }
}
