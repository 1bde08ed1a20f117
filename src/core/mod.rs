//! Core library components.
//!
//! This module contains the resolution pipeline, its provider seams, the AWS
//! implementations of those seams, and the sinks that consume the result.

pub mod aws;
pub mod config;
pub mod constants;
pub mod identity;
pub mod pipeline;
pub mod secrets;
pub mod sink;
pub mod tags;
pub mod types;
