pub mod gap;
pub mod ideal_lap;
pub mod lap;
pub mod pace;
pub mod ranking;
