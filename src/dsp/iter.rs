//! Sample iteration strategies
//!
//! A wave's samples can be walked front-to-back or back-to-front. The order
//! is a plain value (parsed from config or picked in code) and each call to
//! [`SampleIter::new`] starts a fresh, independent pass.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Sample, WaveError};

/// Order in which samples are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IterationOrder {
    #[default]
    Sequential,
    Reverse,
}

impl FromStr for IterationOrder {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "reverse" => Ok(Self::Reverse),
            other => Err(WaveError::Config(format!("unknown iteration order '{other}'"))),
        }
    }
}

/// Lazy, finite pass over a sample slice
#[derive(Debug, Clone)]
pub struct SampleIter<'a> {
    inner: std::slice::Iter<'a, Sample>,
    order: IterationOrder,
}

impl<'a> SampleIter<'a> {
    pub fn new(samples: &'a [Sample], order: IterationOrder) -> Self {
        Self {
            inner: samples.iter(),
            order,
        }
    }

    pub fn order(&self) -> IterationOrder {
        self.order
    }
}

impl Iterator for SampleIter<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        match self.order {
            IterationOrder::Sequential => self.inner.next().copied(),
            IterationOrder::Reverse => self.inner.next_back().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for SampleIter<'_> {
    fn next_back(&mut self) -> Option<Sample> {
        match self.order {
            IterationOrder::Sequential => self.inner.next_back().copied(),
            IterationOrder::Reverse => self.inner.next().copied(),
        }
    }
}

impl ExactSizeIterator for SampleIter<'_> {}
