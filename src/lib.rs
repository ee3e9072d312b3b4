//! Library exports for the laneview road visualizer.
//!
//! Exposes the road model, the lane layout and divider rules, scene
//! composition, the car simulation and configuration so the binary and the
//! integration tests share one implementation.

pub mod app;
pub mod config;
pub mod draw;
pub mod road;
pub mod scenario;
pub mod scene;
pub mod sim;
pub mod util;

pub use config::Config;
