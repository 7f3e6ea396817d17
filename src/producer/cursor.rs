use crate::{producer::Producer, util::Result};

/// Split form of the pull contract: `advance` moves, `current` reads
///
/// ```ignore
/// let mut cursor = pullseq::from_slice(vec![1, 2, 3]).cursor();
/// while cursor.advance() {
///     println!("{:?}", cursor.current());
/// }
/// cursor.status()?;
/// ```
///
/// `current()` returns None before the first `advance` and after `advance`
/// has returned false. Between a successful `advance` and the next one it
/// returns the element that `advance` moved onto.
#[derive(Debug)]
pub struct Cursor<P: Producer> {
    producer: P,
    current: Option<P::Item>,
}

impl<P: Producer> Cursor<P> {
    pub fn new(producer: P) -> Self {
        Cursor {
            producer,
            current: None,
        }
    }

    /// Move to the next element
    ///
    /// Returns true if positioned on an element, false once exhausted
    pub fn advance(&mut self) -> bool {
        self.current = self.producer.next_value();
        self.current.is_some()
    }

    /// Element the cursor is positioned on
    pub fn current(&self) -> Option<&P::Item> {
        self.current.as_ref()
    }

    /// Take the current element, leaving the cursor unpositioned
    pub fn take_current(&mut self) -> Option<P::Item> {
        self.current.take()
    }

    pub fn status(&self) -> Result<()> {
        self.producer.status()
    }

    pub fn into_inner(self) -> P {
        self.producer
    }
}
