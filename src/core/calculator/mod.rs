pub mod gaps;
pub mod ideal;
pub mod pace;
pub mod ranking;
