pub mod constants;
pub mod input;
pub mod simulation;
pub mod world_data;
