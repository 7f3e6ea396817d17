//! Lazy, pull-based map/filter/reduce pipelines.
//!
//! Build a chain from a source producer, stack `map`/`filter` stages on it,
//! and drain it once with a terminal algorithm:
//!
//! ```ignore
//! use pullseq::Producer;
//!
//! let odd_strings = pullseq::unit_sequence(0, 999)?
//!     .filter(|v| v % 2 != 0)
//!     .map(|v| v.to_string())
//!     .to_vec()
//!     .into_result()?;
//! assert_eq!(odd_strings.len(), 500);
//! ```

pub mod algorithm;
pub mod config;
pub mod numeric;
pub mod producer;
pub mod stage;
pub mod util;

pub use algorithm::{Drained, for_each, reduce, to_vec};
pub use config::StepRange;
pub use numeric::Step;
pub use producer::{
    Cursor, Fallible, Generator, IterProducer, Producer, SliceProducer, Values, arithmetic,
    from_iter, from_results, from_reverse_slice, from_slice, generate, step_sequence,
    unit_sequence,
};
pub use stage::{Filter, Map, filter, map};
pub use util::{Code, Result, Status};
