pub mod errors;
pub mod intake;
pub mod models;
pub mod providers;
