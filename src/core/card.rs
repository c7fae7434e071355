//! Generated cards and batches

use std::ops::Index;

/// One shuffled arrangement of a word list, in row-major cell order
///
/// A card is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    cells: Box<[String]>,
}

impl Card {
    #[must_use]
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells: cells.into_boxed_slice(),
        }
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell text at `row`, `col` for a grid `cols` wide
    #[must_use]
    pub fn cell(&self, row: usize, col: usize, cols: usize) -> Option<&str> {
        self.cells.get(row * cols + col).map(String::as_str)
    }

    /// Iterate the cells one row at a time
    ///
    /// # Panics
    /// Panics if `cols` is zero.
    pub fn rows(&self, cols: usize) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(cols)
    }
}

impl Index<usize> for Card {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

/// All cards produced by one generate request, in generation order
///
/// Display labels are 1-based positions in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBatch {
    cards: Vec<Card>,
}

impl CardBatch {
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card by its 1-based display label
    #[must_use]
    pub fn by_label(&self, label: usize) -> Option<&Card> {
        label.checked_sub(1).and_then(|index| self.cards.get(index))
    }

    /// Cards paired with their 1-based labels
    pub fn labeled(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.cards.iter().enumerate().map(|(i, card)| (i + 1, card))
    }
}

impl<'a> IntoIterator for &'a CardBatch {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(words: &[&str]) -> Card {
        Card::new(words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn card_cell_lookup() {
        let c = card(&["a", "b", "c", "d", "e", "f"]);
        assert_eq!(c.cell(0, 0, 3), Some("a"));
        assert_eq!(c.cell(1, 2, 3), Some("f"));
        assert_eq!(c.cell(2, 0, 3), None);
        assert_eq!(&c[4], "e");
    }

    #[test]
    fn card_rows() {
        let c = card(&["a", "b", "c", "d"]);
        let rows: Vec<_> = c.rows(2).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ["c", "d"]);
    }

    #[test]
    fn batch_labels_are_one_based() {
        let batch = CardBatch::new(vec![card(&["x"]), card(&["y"])]);
        let labels: Vec<usize> = batch.labeled().map(|(label, _)| label).collect();
        assert_eq!(labels, vec![1, 2]);
        assert_eq!(batch.by_label(2).map(|c| &c[0]), Some("y"));
        assert!(batch.by_label(0).is_none());
        assert!(batch.by_label(3).is_none());
    }
}
