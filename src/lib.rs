#![warn(missing_docs)]
//! Procedural grid maps with a guaranteed start-to-goal connection, and A* over them
//!
//! A generation cycle ([`map::generate_map`]) builds a fresh [`grid::Grid`], walks a biased
//! random path from start to goal ([`path_gen`]), scatters walls everywhere off that path
//! ([`walls`]) and then searches the result for a shortest path ([`pathing`]).

pub mod constants;
pub mod error;
pub mod grid;
pub mod map;
pub mod path_gen;
pub mod pathing;
pub mod settings;
pub mod walls;
