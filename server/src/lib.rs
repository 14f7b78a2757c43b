//! Sohosai Delivery Core
//!
//! Status derivation and viewer scoping for notices and forms of the Sohosai
//! festival management system.

pub mod authorization;
pub mod config;
pub mod delivery;
pub mod directory;
pub mod viewers;
