pub mod generate;

pub use generate::{Odometer, binary_sequence, random_sequence, random_walk};
