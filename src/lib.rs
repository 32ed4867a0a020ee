//! # bytestack
//!
//! A growable byte-object accumulator: append variable-length byte objects
//! one at a time, then materialize them on demand into a single contiguous,
//! NUL-terminated buffer. Aggregate size and object count are tracked
//! throughout and always reflect what has actually been stored.
//!
//! ```
//! use bytestack::ByteStack;
//!
//! let mut stack = ByteStack::new();
//! stack.grow_str("AB")?;
//! stack.grow_fmt(format_args!("{}", "CDE"))?;
//! stack.grow(b"FGH")?;
//!
//! assert_eq!(stack.finish(), b"ABCDEFGH\0");
//! assert_eq!(stack.size(), 8);
//! assert_eq!(stack.len(), 3);
//! # Ok::<(), bytestack::BytestackError>(())
//! ```
//!
//! Appending stays cheap: each object becomes one owned record in an
//! insertion-ordered [`store::RecordStore`]; the concatenation cost is paid
//! only when [`ByteStack::finish`] runs. Finishing again after further
//! appends rebuilds the buffer; [`ByteStack::final_data`] is the lazy
//! cache-read variant (see its docs for the staleness caveat).
//!
//! The stack is single-threaded by design: all mutators take `&mut self`,
//! and callers wanting cross-thread use must provide their own exclusion.

pub mod error;
pub mod scratch;
pub mod stack;
pub mod store;

pub use error::{BytestackError, Result};
pub use stack::ByteStack;
pub use store::{Record, RecordStore};
