//! Block partition of the label set.
//!
//! A [`Partition`] is an ordered list of block lengths summing to `N`. It is
//! fixed for the whole run and tells the canonicalizer where each block lives
//! inside a state.

use std::fmt::{self, Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

use crate::config::ConfigError;

/// How block boundaries are encoded in a state.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Layout {
    /// A separator symbol is stored between consecutive blocks.
    #[default]
    Separated,
    /// Blocks are fixed-length runs with no separator.
    Implicit,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Partition {
    blocks: Vec<usize>,
    layout: Layout,
}

impl Partition {
    /// Creates a separator-delimited partition with the given block lengths.
    pub fn new(blocks: impl IntoIterator<Item = usize>) -> Result<Self, ConfigError> {
        let blocks: Vec<usize> = blocks.into_iter().collect();
        if blocks.iter().sum::<usize>() == 0 {
            return Err(ConfigError::NoLabels);
        }
        Ok(Self::new_unchecked(blocks))
    }

    pub(crate) fn new_unchecked(blocks: Vec<usize>) -> Self {
        debug_assert!(blocks.iter().sum::<usize>() > 0);
        Self {
            blocks,
            layout: Layout::Separated,
        }
    }

    /// The degenerate partition: one block holding all `n` labels.
    pub fn single(n: usize) -> Result<Self, ConfigError> {
        Self::new([n])
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn blocks(&self) -> &[usize] {
        &self.blocks
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Number of labels `N`.
    pub fn num_labels(&self) -> usize {
        self.blocks.iter().sum()
    }

    /// Number of slots `M` in a state.
    pub fn width(&self) -> usize {
        match self.layout {
            Layout::Separated => self.num_labels() + self.blocks.len() - 1,
            Layout::Implicit => self.num_labels(),
        }
    }

    /// Slot ranges of the blocks, in partition order.
    pub fn spans(&self) -> Spans<'_> {
        Spans {
            blocks: self.blocks.iter(),
            position: 0,
            gap: match self.layout {
                Layout::Separated => 1,
                Layout::Implicit => 0,
            },
        }
    }

    /// Positions where a separator must appear.
    pub fn separator_positions(&self) -> Vec<usize> {
        match self.layout {
            Layout::Implicit => Vec::new(),
            Layout::Separated => {
                let spans: Vec<Range<usize>> = self.spans().collect();
                spans.iter().take(spans.len() - 1).map(|span| span.end).collect()
            }
        }
    }
}

/// Iterator over the slot ranges of a partition's blocks.
pub struct Spans<'a> {
    blocks: std::slice::Iter<'a, usize>,
    position: usize,
    gap: usize,
}

impl Iterator for Spans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let &len = self.blocks.next()?;
        let span = self.position..self.position + len;
        self.position = span.end + self.gap;
        Some(span)
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let blocks: Vec<String> = self.blocks.iter().map(|b| b.to_string()).collect();
        write!(f, "[{}]", blocks.join(", "))?;
        if self.layout == Layout::Implicit {
            write!(f, " (implicit)")?;
        }
        Ok(())
    }
}

/// Parses a comma-separated list of block lengths, e.g. `"3,2,1"`.
impl FromStr for Partition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let blocks = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<usize>()
                    .map_err(|_| ConfigError::BadBlockLength(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Partition::new(blocks)
    }
}
