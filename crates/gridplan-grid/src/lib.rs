//! Static grid traversability index for the gridplan policy solver.
//!
//! [`GridIndex`] partitions the grid bounding rectangle into wall and
//! open cells once at setup, from the static obstacle geometry reported
//! by the environment. It is immutable thereafter; the per-cycle reward,
//! value, and policy maps are all keyed by its open-cell set.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;

pub use error::GridError;
pub use index::GridIndex;
