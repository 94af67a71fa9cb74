//! Tests for the Weerwolven game engine.

#![cfg(test)]

pub mod integration;
pub mod night_resolution;
