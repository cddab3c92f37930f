pub mod labeled_input;

pub use labeled_input::labeled_input;
