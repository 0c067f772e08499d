//! Capability Diagnosis - AI capability self-assessment engine
//!
//! Scores a 45-question self-assessment across six capability categories,
//! classifies maturity, compares against industry benchmarks, synthesizes
//! SWOT/TOWS strategies and assembles a narrative report. An optional
//! generative enrichment call is bounded in time and always falls back to
//! local synthesis.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
