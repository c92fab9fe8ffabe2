//! Benchmark crate for the gridplan policy solver.
//!
//! No library code; see `benches/` for the criterion targets.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
