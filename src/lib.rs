//! Duosite - bilingual static-site validator
//!
//! Duosite is a CLI tool and library for validating bilingual (English/
//! Spanish) static sites before deployment. It checks translation parity
//! between the two language directories and validates `.env` configuration
//! against per-tier required-variable lists.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `envfile`: `.env` parsing and tier-based validation
//! - `pages`: Page discovery and parity comparison
//! - `site`: Runtime site configuration (defaults/env/meta merge)
//! - `switcher`: Language-switcher widget logic, display-free

pub mod cli;
pub mod envfile;
pub mod pages;
pub mod site;
pub mod switcher;
