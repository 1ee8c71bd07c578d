//! API Routes
//!
//! Route handlers organized by functionality.

pub mod exploits;
pub mod games;
pub mod pages;
pub mod status;
pub mod track;
