//! launchpad: a deterministic go/no-go pipeline for orbital missions.
//!
//! A mission description goes in. It is screened for safety, planned,
//! optionally executed, and validated against feasibility limits. A
//! structured result comes out, saying whether the mission is approved
//! and why.
//!
//! The `risk` module offers a separate, coarser path that scores a
//! mission from its orbit class alone.

pub mod execute;
pub mod model;
pub mod observer;
pub mod pipeline;
pub mod planner;
pub mod risk;
pub mod safety;
pub mod validator;
