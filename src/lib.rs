//! Earthwatch - rotating planet with orbiting satellites
//!
//! A library crate providing the scene simulation components
//! for testing and integration purposes.

pub mod camera;
pub mod config;
pub mod frame;
pub mod input;
pub mod kinematics;
pub mod proximity;
pub mod render;
pub mod satellites;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;
