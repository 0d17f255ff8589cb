pub mod error;
pub mod logger;
pub mod model;
pub mod output;
pub mod reader;
pub mod simulate;
pub mod switch;
