pub mod roster;
pub mod team_builder;
