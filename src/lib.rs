//! # caselabel - sentinel-code labeling
//!
//! `caselabel` maps signed 32-bit sentinel codes to short fixed labels.
//! Three codes at the top of the `i32` range are recognized; every other
//! input maps to the empty label. The mapping is total, pure, and stateless,
//! so it can be read from any number of threads without coordination.
//!
//! ## Usage
//!
//! ```
//! use caselabel::{select_label, Label, CASE_1};
//!
//! assert_eq!(select_label(CASE_1), "CASE_1");
//! assert_eq!(select_label(0), "");
//!
//! let label: Label = "CASE_2".parse()?;
//! assert_eq!(label.code(), i32::MAX - 1);
//! # Ok::<(), caselabel::LabelError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod label;
pub mod selector;

// Re-export primary types at crate root for convenience
pub use error::LabelError;
pub use label::Label;
pub use selector::{probe, select, select_label, CASE_1, CASE_2, CASE_3};
