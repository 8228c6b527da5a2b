//! SEO Criteria - Evaluation and scoring engine for authored content
//!
//! This crate maps the fields of a piece of content (title, meta tags, URL slug,
//! body HTML, link lists, ...) onto a weighted registry of named SEO criteria,
//! computes a pass/warn/fail status per criterion, aggregates an overall score,
//! and proposes automatic improvements for optimizable criteria.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
