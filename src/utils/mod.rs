pub mod colors;
pub mod formatting;
pub mod palette;
pub mod path;
pub mod table;
pub mod time;
