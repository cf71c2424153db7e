pub mod json;
pub mod limit;
pub mod parse;
pub mod path;
