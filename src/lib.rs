//! Longest previous factor (LPF) and longest successor factor (LSF) arrays.
//!
//! For every position `i` of a text, the LPF array holds the length of the
//! longest factor starting at `i` that also starts at some position `< i`,
//! together with the leftmost such position; the LSF array is the mirror
//! image with positions `> i` and the rightmost witness.
//!
//! ```
//! use lspf::{Lspf, Mode};
//!
//! let lspf = Lspf::new(b"ananas").unwrap();
//! let lpf = lspf.factors(Mode::Prev);
//! assert_eq!(lpf.len[2], 3);
//! assert_eq!(lpf.src[2], Some(0));
//! ```

pub mod error;
pub mod lspf;
pub mod naive;
pub mod range;
pub mod rmq;
pub mod sa;
pub mod sweep;
pub mod verify;
pub mod words;

pub use crate::error::{Error, Result};
pub use crate::lspf::{Factors, Lspf, Mode};
