pub mod chars;
pub mod line_ending;
pub mod text;
