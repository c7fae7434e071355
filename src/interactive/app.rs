//! TUI application state and logic

use crate::config::Settings;
use crate::render::{CardSink, PdfSink, PrintSink, export};
use crate::wizard::{Generation, Wizard};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Cards added or removed by PageUp/PageDown
const COUNT_STEP_LARGE: usize = 10;

/// Application state
pub struct App {
    pub wizard: Wizard,
    pub settings: Settings,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Which output an export key asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Pdf,
    Print,
}

impl App {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            wizard: Wizard::default(),
            settings,
            messages: vec![Message {
                text: "Welcome! Press Enter to start building your Bingo cards.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press to the current step
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match &mut self.wizard {
            Wizard::Intro => match key.code {
                KeyCode::Enter => self.advance(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Wizard::Grid(grid) => match key.code {
                KeyCode::Left | KeyCode::Up => grid.select_previous(),
                KeyCode::Right | KeyCode::Down => grid.select_next(),
                KeyCode::Char(c @ '1'..='3') => grid.select(c as usize - '1' as usize),
                KeyCode::Enter => self.advance(),
                KeyCode::Esc => self.go_back(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Wizard::Words(entry) => match key.code {
                KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.load_preset();
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    entry.clear();
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    entry.push_char(c);
                }
                KeyCode::Backspace => entry.pop_char(),
                KeyCode::Enter => entry.newline(),
                KeyCode::Tab => self.advance(),
                KeyCode::Esc => self.go_back(),
                _ => {}
            },
            Wizard::Generate(generation) => match key.code {
                KeyCode::Up | KeyCode::Char('+' | '=') => generation.increment(1),
                KeyCode::Down | KeyCode::Char('-') => generation.decrement(1),
                KeyCode::PageUp => generation.increment(COUNT_STEP_LARGE),
                KeyCode::PageDown => generation.decrement(COUNT_STEP_LARGE),
                KeyCode::Char('p') => generation.toggle_preview(),
                KeyCode::Enter | KeyCode::Char('g' | 'r') => self.generate(),
                KeyCode::Char('e') => self.export(ExportKind::Pdf),
                KeyCode::Char('h') => self.export(ExportKind::Print),
                KeyCode::Esc => self.go_back(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    /// Move to the next step if the current one is complete
    pub fn advance(&mut self) {
        match std::mem::take(&mut self.wizard) {
            Wizard::Intro => {
                self.wizard = Wizard::Intro.start();
                self.add_message(
                    "Choose a grid size with ←/→ and press Enter.",
                    MessageStyle::Info,
                );
            }
            Wizard::Grid(grid) => {
                let entry = grid.confirm();
                let rank = entry.rank();
                self.wizard = Wizard::Words(entry);
                self.add_message(
                    &format!(
                        "Enter {} words, one per line. Ctrl+L loads sample words.",
                        rank.cell_count()
                    ),
                    MessageStyle::Info,
                );
            }
            Wizard::Words(entry) => match entry.confirm(self.settings.default_count) {
                Ok(generation) => {
                    let duplicates = generation.words().duplicates().join(", ");
                    self.wizard = Wizard::Generate(generation);
                    if !duplicates.is_empty() {
                        self.add_message(
                            &format!("Note: repeated entries: {duplicates}"),
                            MessageStyle::Info,
                        );
                    }
                    self.add_message(
                        "Set the number of cards, then press Enter to generate. Press 'p' for a preview.",
                        MessageStyle::Info,
                    );
                }
                Err(err) => {
                    let status = entry.status().message(entry.rank().cell_count());
                    self.wizard = Wizard::Words(entry);
                    self.add_message(&format!("{err}. {status}"), MessageStyle::Error);
                }
            },
            other @ Wizard::Generate(_) => self.wizard = other,
        }
    }

    /// Return to the previous step
    pub fn go_back(&mut self) {
        self.wizard = std::mem::take(&mut self.wizard).back();
    }

    fn load_preset(&mut self) {
        let Wizard::Words(entry) = &mut self.wizard else {
            return;
        };
        let rank = entry.rank();
        match entry.load_preset() {
            Some(preset) => self.add_message(
                &format!("Loaded the {} sample words.", preset.name),
                MessageStyle::Success,
            ),
            None => self.add_message(
                &format!("No sample words for a {rank} grid."),
                MessageStyle::Error,
            ),
        }
    }

    /// Generate a fresh batch, replacing the previous one
    pub fn generate(&mut self) {
        let Wizard::Generate(generation) = &mut self.wizard else {
            return;
        };
        let result = generation.generate().map(|batch| batch.len());
        match result {
            Ok(cards) => self.add_message(
                &format!("Generated {cards} cards. Press 'e' for PDF or 'h' for the print view."),
                MessageStyle::Success,
            ),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Write the current batch; failures become one error message
    pub fn export(&mut self, kind: ExportKind) {
        let Wizard::Generate(generation) = &self.wizard else {
            return;
        };
        let outcome = match kind {
            ExportKind::Pdf => {
                export_batch(generation, &PdfSink::new(self.settings.clone()), &self.settings)
            }
            ExportKind::Print => {
                export_batch(generation, &PrintSink::new(self.settings.clone()), &self.settings)
            }
        };

        match outcome {
            Some(Ok(text)) => self.add_message(&text, MessageStyle::Success),
            Some(Err(text)) => self.add_message(&text, MessageStyle::Error),
            None => self.add_message("Press Enter to generate cards first.", MessageStyle::Error),
        }
    }
}

/// Export the generated batch, if any, returning the message to show
fn export_batch<S: CardSink>(
    generation: &Generation,
    sink: &S,
    settings: &Settings,
) -> Option<Result<String, String>> {
    let batch = generation.batch()?;
    let result = export(sink, batch, generation.rank(), &settings.output_dir, &mut |_| {});

    Some(match result {
        Ok(file) => {
            let mut text = format!(
                "Saved {} ({} pages) to {}",
                sink.name(),
                file.pages,
                file.path.display()
            );
            if file.degraded_cells > 0 {
                text.push_str(&format!(
                    "; {} cells hold words wider than the cell",
                    file.degraded_cells
                ));
            }
            Ok(text)
        }
        Err(err) => Err(format!("Export failed: {err}")),
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Step;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                press(app, KeyCode::Enter);
            } else {
                press(app, KeyCode::Char(c));
            }
        }
    }

    fn app_in(dir: &std::path::Path) -> App {
        App::new(Settings {
            output_dir: dir.to_path_buf(),
            ..Settings::default()
        })
    }

    /// Intro → 3x3 grid → office preset → generation
    fn at_generation(app: &mut App) {
        press(app, KeyCode::Enter);
        press(app, KeyCode::Char('1'));
        press(app, KeyCode::Enter);
        ctrl(app, 'l');
        press(app, KeyCode::Tab);
        assert_eq!(app.wizard.step(), Step::Generation);
    }

    #[test]
    fn full_flow_exports_both_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        at_generation(&mut app);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('h'));

        assert!(dir.path().join("bingo-cards-3x3.pdf").exists());
        assert!(dir.path().join("bingo-cards-3x3-print.html").exists());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
    }

    #[test]
    fn export_before_generate_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        at_generation(&mut app);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn export_failure_keeps_batch() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let mut app = app_in(&blocker);
        at_generation(&mut app);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.starts_with("Export failed"));
        let Wizard::Generate(generation) = &app.wizard else {
            panic!("left the generation step");
        };
        assert_eq!(generation.batch().map(crate::core::CardBatch::len), Some(10));
    }

    #[test]
    fn short_word_list_stays_on_word_step() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter); // default 4x4
        type_text(&mut app, "one\ntwo\nthree");
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.wizard.step(), Step::WordEntry);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("You need 13 more words."));
    }

    #[test]
    fn typing_q_in_word_entry_does_not_quit() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "quiz");

        assert!(!app.should_quit);
        let Wizard::Words(entry) = &app.wizard else {
            panic!("expected word entry");
        };
        assert_eq!(entry.text(), "quiz");
    }

    #[test]
    fn modifier_chords_do_not_type_in_word_entry() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "ab");
        ctrl(&mut app, 's');
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));

        let Wizard::Words(entry) = &app.wizard else {
            panic!("expected word entry");
        };
        assert_eq!(entry.text(), "abC");
    }

    #[test]
    fn escape_walks_back_and_keeps_words() {
        let mut app = App::new(Settings::default());
        at_generation(&mut app);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.wizard.step(), Step::WordEntry);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.wizard.step(), Step::GridSelection);
        press(&mut app, KeyCode::Enter);

        let Wizard::Words(entry) = &app.wizard else {
            panic!("expected word entry");
        };
        assert!(entry.status().is_exact());
    }

    #[test]
    fn count_keys_clamp() {
        let mut app = App::new(Settings::default());
        at_generation(&mut app);

        for _ in 0..20 {
            press(&mut app, KeyCode::PageUp);
        }
        press(&mut app, KeyCode::Char('+'));
        let Wizard::Generate(generation) = &app.wizard else {
            panic!("expected generation");
        };
        assert_eq!(generation.count(), 100);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = App::new(Settings::default());
        for i in 0..8 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 3");
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }
}
