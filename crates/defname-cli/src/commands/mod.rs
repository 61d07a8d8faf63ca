pub mod name;
pub mod parse;
pub mod register;
