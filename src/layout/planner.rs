//! Page layout planning
//!
//! Decides which cards land on which physical page. The plan borrows cards from
//! the batch and knows nothing about how they will be drawn.

use crate::core::{Card, CardBatch};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How cards are distributed over pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One card per page (paged export)
    #[default]
    Document,
    /// Two cards per page (print view)
    Compact,
}

impl OutputMode {
    #[must_use]
    pub const fn cards_per_page(self) -> usize {
        match self {
            Self::Document => 1,
            Self::Compact => 2,
        }
    }

    /// Number of pages a batch of `card_count` cards needs
    #[must_use]
    pub const fn page_count(self, card_count: usize) -> usize {
        card_count.div_ceil(self.cards_per_page())
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Compact => "compact",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    /// Supported names: "document", "single", "compact", "print"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "document" | "single" => Ok(Self::Document),
            "compact" | "print" => Ok(Self::Compact),
            other => Err(format!(
                "unknown layout '{other}' (expected 'document' or 'compact')"
            )),
        }
    }
}

/// A card placed on a page, with its 1-based label from the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot<'a> {
    pub card: &'a Card,
    pub label: usize,
}

/// One physical page and the cards on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor<'a> {
    pub page_index: usize,
    pub slots: Vec<CardSlot<'a>>,
}

impl PageDescriptor<'_> {
    /// Whether this is the last page of the plan it came from
    #[must_use]
    pub const fn is_last(&self, page_count: usize) -> bool {
        self.page_index + 1 == page_count
    }
}

/// Arrange `batch` into pages according to `mode`
///
/// Consecutive cards share a page in compact mode; an odd final card sits alone.
///
/// # Examples
/// ```
/// use bingo_builder::core::{Card, CardBatch};
/// use bingo_builder::layout::{OutputMode, plan_pages};
///
/// let batch = CardBatch::new((0..5).map(|_| Card::new(vec!["x".into()])).collect());
/// assert_eq!(plan_pages(&batch, OutputMode::Document).len(), 5);
///
/// let compact = plan_pages(&batch, OutputMode::Compact);
/// assert_eq!(compact.len(), 3);
/// assert_eq!(compact[2].slots[0].label, 5);
/// ```
#[must_use]
pub fn plan_pages(batch: &CardBatch, mode: OutputMode) -> Vec<PageDescriptor<'_>> {
    let pages: Vec<PageDescriptor<'_>> = batch
        .cards()
        .chunks(mode.cards_per_page())
        .enumerate()
        .map(|(page_index, chunk)| {
            let first_label = page_index * mode.cards_per_page() + 1;
            PageDescriptor {
                page_index,
                slots: chunk
                    .iter()
                    .enumerate()
                    .map(|(offset, card)| CardSlot {
                        card,
                        label: first_label + offset,
                    })
                    .collect(),
            }
        })
        .collect();

    debug!(mode = %mode, cards = batch.len(), pages = pages.len(), "planned pages");
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_of(n: usize) -> CardBatch {
        CardBatch::new(
            (0..n)
                .map(|i| Card::new(vec![format!("card-{i}")]))
                .collect(),
        )
    }

    #[test]
    fn document_mode_one_card_per_page() {
        for n in [1, 2, 7, 100] {
            let batch = batch_of(n);
            let pages = plan_pages(&batch, OutputMode::Document);
            assert_eq!(pages.len(), n);
            assert!(pages.iter().all(|p| p.slots.len() == 1));
            assert_eq!(OutputMode::Document.page_count(n), n);
        }
    }

    #[test]
    fn compact_mode_pairs_cards() {
        for n in [1, 2, 3, 10, 99] {
            let batch = batch_of(n);
            let pages = plan_pages(&batch, OutputMode::Compact);
            assert_eq!(pages.len(), n.div_ceil(2));
            assert_eq!(OutputMode::Compact.page_count(n), pages.len());
        }
    }

    #[test]
    fn compact_odd_tail_sits_alone() {
        let batch = batch_of(5);
        let pages = plan_pages(&batch, OutputMode::Compact);

        assert_eq!(pages[0].slots.len(), 2);
        assert_eq!(pages[1].slots.len(), 2);
        assert_eq!(pages[2].slots.len(), 1);
        assert_eq!(&pages[2].slots[0].card[0], "card-4");
    }

    #[test]
    fn single_card_compact_layout() {
        let batch = batch_of(1);
        let pages = plan_pages(&batch, OutputMode::Compact);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].slots.len(), 1);
        assert_eq!(pages[0].slots[0].label, 1);
    }

    #[test]
    fn labels_follow_batch_order() {
        let batch = batch_of(6);
        let labels: Vec<usize> = plan_pages(&batch, OutputMode::Compact)
            .iter()
            .flat_map(|p| p.slots.iter().map(|s| s.label))
            .collect();
        assert_eq!(labels, vec![1, 2, 3, 4, 5, 6]);

        for page in plan_pages(&batch, OutputMode::Compact) {
            for slot in &page.slots {
                assert!(std::ptr::eq(slot.card, batch.by_label(slot.label).unwrap()));
            }
        }
    }

    #[test]
    fn page_indices_and_last_page() {
        let batch = batch_of(3);
        let pages = plan_pages(&batch, OutputMode::Document);
        let indices: Vec<usize> = pages.iter().map(|p| p.page_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(!pages[1].is_last(pages.len()));
        assert!(pages[2].is_last(pages.len()));
    }

    #[test]
    fn empty_batch_has_no_pages() {
        let batch = CardBatch::new(Vec::new());
        assert!(plan_pages(&batch, OutputMode::Compact).is_empty());
    }

    #[test]
    fn mode_from_name() {
        assert_eq!("document".parse::<OutputMode>(), Ok(OutputMode::Document));
        assert_eq!("Print".parse::<OutputMode>(), Ok(OutputMode::Compact));
        assert_eq!("compact".parse::<OutputMode>(), Ok(OutputMode::Compact));
        assert!("booklet".parse::<OutputMode>().is_err());
    }
}
