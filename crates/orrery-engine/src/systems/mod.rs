pub mod orbit;
pub mod planets;
pub mod rng;
pub mod universe;
