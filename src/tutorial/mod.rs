//! This is a documentation-only module with several sub-modules describing how to use
//! this crate.
//!
//! Table of contents:
//!  - [Parsing formulas](./p01_parsing_formulas/index.html)
//!  - [Building truth tables](./p02_building_truth_tables/index.html)
//!

pub mod p01_parsing_formulas;
pub mod p02_building_truth_tables;
