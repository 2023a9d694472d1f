//! Output sinks for copy-like algorithms.
//!
//! Algorithms that produce elements push them one at a time into an
//! [`OutputSink`]. Growable containers never fail; [`SliceWriter`] fills
//! pre-sized storage and reports [`AlgorithmError::OutputExhausted`] once
//! it is full.

use std::collections::VecDeque;

use crate::{AlgorithmError, Result};

/// Destination for elements produced by an algorithm.
pub trait OutputSink<T> {
    /// Append one element.
    fn put(&mut self, value: T) -> Result<()>;

    /// Remaining capacity, or `None` when the sink grows on demand.
    fn remaining(&self) -> Option<usize> {
        None
    }
}

impl<T> OutputSink<T> for Vec<T> {
    #[inline]
    fn put(&mut self, value: T) -> Result<()> {
        self.push(value);
        Ok(())
    }
}

impl<T> OutputSink<T> for VecDeque<T> {
    #[inline]
    fn put(&mut self, value: T) -> Result<()> {
        self.push_back(value);
        Ok(())
    }
}

impl OutputSink<char> for String {
    #[inline]
    fn put(&mut self, value: char) -> Result<()> {
        self.push(value);
        Ok(())
    }
}

impl<T, S> OutputSink<T> for &mut S
where
    S: OutputSink<T> + ?Sized,
{
    #[inline]
    fn put(&mut self, value: T) -> Result<()> {
        (**self).put(value)
    }

    fn remaining(&self) -> Option<usize> {
        (**self).remaining()
    }
}

/// Sink that overwrites a mutable slice from the front.
#[derive(Debug)]
pub struct SliceWriter<'a, T> {
    slots: &'a mut [T],
    written: usize,
}

impl<'a, T> SliceWriter<'a, T> {
    /// Create a writer positioned at the start of `slots`.
    pub fn new(slots: &'a mut [T]) -> Self {
        Self { slots, written: 0 }
    }

    /// Number of elements written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Consume the writer, returning the filled prefix.
    pub fn into_written(self) -> &'a mut [T] {
        let written = self.written;
        &mut self.slots[..written]
    }
}

impl<T> OutputSink<T> for SliceWriter<'_, T> {
    fn put(&mut self, value: T) -> Result<()> {
        match self.slots.get_mut(self.written) {
            Some(slot) => {
                *slot = value;
                self.written += 1;
                Ok(())
            }
            None => {
                tracing::debug!(capacity = self.slots.len(), "slice writer exhausted");
                Err(AlgorithmError::OutputExhausted {
                    capacity: self.slots.len(),
                })
            }
        }
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.slots.len() - self.written)
    }
}

/// Sink that drops every element and counts them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discard {
    /// Number of elements received.
    pub count: usize,
}

impl<T> OutputSink<T> for Discard {
    #[inline]
    fn put(&mut self, _value: T) -> Result<()> {
        self.count += 1;
        Ok(())
    }
}

/// Push every item of `iter` into `out`, returning how many were written.
pub(crate) fn drain_into<T, I, O>(iter: I, out: &mut O) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    O: OutputSink<T> + ?Sized,
{
    let mut written = 0;
    for item in iter {
        out.put(item)?;
        written += 1;
    }
    Ok(written)
}
