pub use game::*;
pub use generator::*;
pub use lane::*;
pub use map::*;
pub use validation::*;

#[cfg(test)]
mod arbitrary;
mod game;
mod generator;
mod lane;
mod map;
mod validation;
