//! Step wizard state machine
//!
//! `Intro → GridSelection → WordEntry → Generation`. Each step is its own
//! struct holding exactly what that step needs; moving forward or back is a
//! method that consumes (or borrows) the current step and builds the next one.
//! Going back from word entry keeps the typed words as a draft, so picking the
//! same grid again restores them.

use crate::core::{
    BingoError, CardBatch, GRID_PRESETS, GridPreset, GridRank, WordCountStatus, WordList,
};
use crate::generator::{MAX_CARDS, MIN_CARDS, clamp_card_count, generate_cards, generate_for_rank};
use crate::wordlists::Preset;
use tracing::debug;

/// Number of sample cards shown when entering the generation step
pub const PREVIEW_CARDS: usize = 2;

/// Current wizard step and its data
#[derive(Debug, Clone, Default)]
pub enum Wizard {
    #[default]
    Intro,
    Grid(GridSelection),
    Words(WordEntry),
    Generate(Generation),
}

/// Step identifiers, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    GridSelection,
    WordEntry,
    Generation,
}

impl Step {
    pub const ALL: [Self; 4] = [
        Self::Intro,
        Self::GridSelection,
        Self::WordEntry,
        Self::Generation,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Intro => "Welcome",
            Self::GridSelection => "Grid Size",
            Self::WordEntry => "Words",
            Self::Generation => "Generate",
        }
    }

    /// Position of the step, starting at 0
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Intro => 0,
            Self::GridSelection => 1,
            Self::WordEntry => 2,
            Self::Generation => 3,
        }
    }
}

impl Wizard {
    #[must_use]
    pub const fn step(&self) -> Step {
        match self {
            Self::Intro => Step::Intro,
            Self::Grid(_) => Step::GridSelection,
            Self::Words(_) => Step::WordEntry,
            Self::Generate(_) => Step::Generation,
        }
    }

    /// Leave the intro for grid selection; any other step is returned unchanged
    #[must_use]
    pub fn start(self) -> Self {
        match self {
            Self::Intro => Self::Grid(GridSelection::default()),
            other => other,
        }
    }

    /// Go one step back; the intro stays where it is
    #[must_use]
    pub fn back(self) -> Self {
        match self {
            Self::Intro | Self::Grid(_) => Self::Intro,
            Self::Words(entry) => Self::Grid(entry.back()),
            Self::Generate(generation) => Self::Words(generation.back()),
        }
    }
}

/// Picking one of the square grid presets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSelection {
    selected: usize,
    draft: Option<Draft>,
}

/// Words typed for a rank before navigating back
#[derive(Debug, Clone, PartialEq, Eq)]
struct Draft {
    rank: GridRank,
    text: String,
}

impl Default for GridSelection {
    /// Starts on the middle preset (4x4)
    fn default() -> Self {
        Self {
            selected: 1,
            draft: None,
        }
    }
}

impl GridSelection {
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn preset(&self) -> GridPreset {
        GRID_PRESETS[self.selected]
    }

    #[must_use]
    pub const fn rank(&self) -> GridRank {
        self.preset().rank()
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(GRID_PRESETS.len() - 1);
    }

    pub fn select_next(&mut self) {
        self.select(self.selected + 1);
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Continue to word entry for the selected grid
    ///
    /// The draft is restored only if it was typed for the same grid.
    #[must_use]
    pub fn confirm(self) -> WordEntry {
        let rank = self.rank();
        let text = self
            .draft
            .filter(|draft| draft.rank == rank)
            .map(|draft| draft.text)
            .unwrap_or_default();
        debug!(%rank, restored = !text.is_empty(), "grid selected");
        WordEntry { rank, text }
    }
}

/// Typing or loading the word list for a chosen rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    rank: GridRank,
    text: String,
}

impl WordEntry {
    #[must_use]
    pub fn new(rank: GridRank) -> Self {
        Self {
            rank,
            text: String::new(),
        }
    }

    #[must_use]
    pub const fn rank(&self) -> GridRank {
        self.rank
    }

    /// Raw text as typed, one word or phrase per line
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn newline(&mut self) {
        self.text.push('\n');
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the text with the preset that fills this rank, if there is one
    pub fn load_preset(&mut self) -> Option<Preset> {
        let preset = Preset::for_rank(self.rank)?;
        self.text = preset.words.join("\n");
        Some(preset)
    }

    #[must_use]
    pub fn words(&self) -> WordList {
        WordList::parse(&self.text)
    }

    #[must_use]
    pub fn status(&self) -> WordCountStatus {
        self.words().status_for(self.rank)
    }

    /// Continue to generation once the word count is exact
    ///
    /// # Errors
    /// Returns `BingoError::InvalidWordCount` and leaves the step untouched when
    /// the words don't fill the grid.
    pub fn confirm(&self, count: usize) -> Result<Generation, BingoError> {
        let words = self.words();
        words.validate_for(self.rank)?;
        Generation::new(self.rank, words, self.text.clone(), count)
    }

    /// Back to grid selection, keeping the typed words as a draft
    #[must_use]
    pub fn back(self) -> GridSelection {
        let selected = GRID_PRESETS
            .iter()
            .position(|preset| preset.rank() == self.rank)
            .unwrap_or(1);
        let draft = (!self.text.trim().is_empty()).then_some(Draft {
            rank: self.rank,
            text: self.text,
        });
        GridSelection { selected, draft }
    }
}

/// Choosing a card count and producing the batch
#[derive(Debug, Clone)]
pub struct Generation {
    rank: GridRank,
    words: WordList,
    text: String,
    count: usize,
    preview: CardBatch,
    show_preview: bool,
    batch: Option<CardBatch>,
}

impl Generation {
    /// Enter the generation step, drawing a fresh preview (hidden until toggled)
    ///
    /// # Errors
    /// Returns the generator's error if `words` doesn't fill `rank`.
    pub fn new(
        rank: GridRank,
        words: WordList,
        text: String,
        count: usize,
    ) -> Result<Self, BingoError> {
        let preview = generate_for_rank(rank, &words, PREVIEW_CARDS)?;
        Ok(Self {
            rank,
            words,
            text,
            count: clamp_card_count(count),
            preview,
            show_preview: false,
            batch: None,
        })
    }

    #[must_use]
    pub const fn rank(&self) -> GridRank {
        self.rank
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Set the requested count, clamped into the supported range
    pub fn set_count(&mut self, count: usize) {
        self.count = clamp_card_count(count);
    }

    pub fn increment(&mut self, step: usize) {
        self.set_count(self.count.saturating_add(step));
    }

    pub fn decrement(&mut self, step: usize) {
        self.set_count(self.count.saturating_sub(step).max(MIN_CARDS));
    }

    #[must_use]
    pub const fn is_at_limit(&self) -> bool {
        self.count == MAX_CARDS
    }

    #[must_use]
    pub const fn preview(&self) -> &CardBatch {
        &self.preview
    }

    #[must_use]
    pub const fn show_preview(&self) -> bool {
        self.show_preview
    }

    pub fn toggle_preview(&mut self) {
        self.show_preview = !self.show_preview;
    }

    /// The most recently generated batch
    #[must_use]
    pub const fn batch(&self) -> Option<&CardBatch> {
        self.batch.as_ref()
    }

    /// Generate a fresh batch of `count` cards, discarding the previous one
    ///
    /// # Errors
    /// Returns the generator's error; the previous batch is kept in that case.
    pub fn generate(&mut self) -> Result<&CardBatch, BingoError> {
        let batch = generate_cards(self.words.as_slice(), self.count)?;
        Ok(&*self.batch.insert(batch))
    }

    /// Back to word entry with the words as they were typed
    #[must_use]
    pub fn back(self) -> WordEntry {
        WordEntry {
            rank: self.rank,
            text: self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::OFFICE;

    fn office_entry() -> WordEntry {
        let mut grid = GridSelection::default();
        grid.select(0);
        let mut entry = grid.confirm();
        entry.set_text(OFFICE.join("\n"));
        entry
    }

    #[test]
    fn walks_forward_through_every_step() {
        let wizard = Wizard::default();
        assert_eq!(wizard.step(), Step::Intro);

        let Wizard::Grid(mut grid) = wizard.start() else {
            panic!("expected grid selection");
        };
        grid.select(0);
        assert_eq!(grid.rank(), GridRank::square(3).unwrap());

        let mut entry = grid.confirm();
        assert!(entry.load_preset().is_some());
        assert!(entry.status().is_exact());

        let mut generation = entry.confirm(10).unwrap();
        let batch = generation.generate().unwrap();
        assert_eq!(batch.len(), 10);
        assert!(batch.cards().iter().all(|card| card.len() == 9));
    }

    #[test]
    fn grid_selection_starts_at_four_by_four_and_clamps() {
        let mut grid = GridSelection::default();
        assert_eq!(grid.preset().size, 4);

        grid.select_next();
        grid.select_next();
        assert_eq!(grid.preset().size, 5);

        grid.select_previous();
        grid.select_previous();
        grid.select_previous();
        assert_eq!(grid.preset().size, 3);
    }

    #[test]
    fn wrong_word_count_stays_on_word_entry() {
        let mut entry = WordEntry::new(GridRank::square(4).unwrap());
        entry.set_text((0..15).map(|i| format!("w{i}")).collect::<Vec<_>>().join("\n"));

        assert_eq!(entry.status(), WordCountStatus::Missing(1));
        assert_eq!(
            entry.confirm(10).unwrap_err(),
            BingoError::InvalidWordCount {
                expected: 16,
                actual: 15
            }
        );
        // Still editable
        entry.newline();
        entry.push_char('x');
        assert!(entry.confirm(10).is_ok());
    }

    #[test]
    fn empty_entry_cannot_continue() {
        let entry = WordEntry::new(GridRank::square(3).unwrap());
        assert!(entry.confirm(5).is_err());
    }

    #[test]
    fn going_back_keeps_draft_for_same_grid() {
        let entry = office_entry();
        let text = entry.text().to_string();

        let grid = entry.back();
        assert_eq!(grid.selected_index(), 0);
        assert_eq!(grid.clone().confirm().text(), text);

        // A different grid starts empty
        let mut other = grid;
        other.select(2);
        assert!(other.confirm().text().is_empty());
    }

    #[test]
    fn wizard_back_navigation() {
        let wizard = Wizard::Words(office_entry());
        let wizard = wizard.back();
        assert_eq!(wizard.step(), Step::GridSelection);
        assert_eq!(wizard.back().step(), Step::Intro);
        assert_eq!(Wizard::Intro.back().step(), Step::Intro);
    }

    #[test]
    fn generation_back_restores_words() {
        let entry = office_entry();
        let text = entry.text().to_string();
        let generation = entry.confirm(3).unwrap();

        let wizard = Wizard::Generate(generation).back();
        let Wizard::Words(entry) = wizard else {
            panic!("expected word entry");
        };
        assert_eq!(entry.text(), text);
    }

    #[test]
    fn generation_has_hidden_two_card_preview() {
        let generation = office_entry().confirm(10).unwrap();
        assert_eq!(generation.preview().len(), PREVIEW_CARDS);
        assert!(!generation.show_preview());
        assert!(generation.batch().is_none());
    }

    #[test]
    fn count_is_clamped() {
        let mut generation = office_entry().confirm(500).unwrap();
        assert_eq!(generation.count(), MAX_CARDS);
        assert!(generation.is_at_limit());

        generation.set_count(0);
        assert_eq!(generation.count(), MIN_CARDS);

        generation.decrement(5);
        assert_eq!(generation.count(), MIN_CARDS);
        generation.increment(9);
        assert_eq!(generation.count(), 10);
        generation.increment(1000);
        assert_eq!(generation.count(), MAX_CARDS);
    }

    #[test]
    fn regenerate_replaces_batch() {
        let mut generation = office_entry().confirm(1).unwrap();
        generation.generate().unwrap();
        generation.set_count(4);
        let batch = generation.generate().unwrap();
        assert_eq!(batch.len(), 4);
        assert_eq!(generation.batch().map(CardBatch::len), Some(4));
    }

    #[test]
    fn toggle_preview() {
        let mut generation = office_entry().confirm(1).unwrap();
        generation.toggle_preview();
        assert!(generation.show_preview());
        generation.toggle_preview();
        assert!(!generation.show_preview());
    }

    #[test]
    fn step_order() {
        let indices: Vec<usize> = Step::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(Step::WordEntry.title(), "Words");
    }
}
