//! TUI rendering with ratatui
//!
//! One screen per wizard step, framed by a header, a step indicator,
//! the message list and a key help bar.

use super::app::{App, MessageStyle};
use crate::core::{Card, GRID_PRESETS, GridRank, WordCountStatus};
use crate::generator::MAX_CARDS;
use crate::output::formatters::format_card;
use crate::wizard::{Generation, GridSelection, Step, WordEntry, Wizard};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
};

/// Example card shown on the intro screen
const EXAMPLE_WORDS: [&str; 9] = [
    "Coffee",
    "Remote Work",
    "Zoom Call",
    "Deadline",
    "Email",
    "Meeting",
    "Laptop",
    "Team Chat",
    "Project",
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Steps
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_steps(f, app.wizard.step(), chunks[1]);

    match &app.wizard {
        Wizard::Intro => render_intro(f, chunks[2]),
        Wizard::Grid(grid) => render_grid_selection(f, grid, chunks[2]),
        Wizard::Words(entry) => render_word_entry(f, entry, chunks[2]),
        Wizard::Generate(generation) => render_generation(f, generation, chunks[2]),
    }

    render_messages(f, app, chunks[3]);
    render_help(f, app.wizard.step(), chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎲 BINGO BUILDER - Card Generator")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_steps(f: &mut Frame, current: Step, area: Rect) {
    let titles: Vec<Line> = Step::ALL
        .iter()
        .map(|step| Line::from(format!("{}. {}", step.index() + 1, step.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_intro(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let content = vec![
        Line::from(Span::styled(
            "Create custom Bingo cards in three steps",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1. Pick a grid size (3x3, 4x4 or 5x5)."),
        Line::from("2. Enter exactly one word or phrase per cell."),
        Line::from("3. Choose how many cards you need and export them."),
        Line::from(""),
        Line::from("Every card holds the same words in a different random order."),
        Line::from("Players mark the words as they come up; the first full row,"),
        Line::from("column or diagonal wins."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to begin",
            Style::default().fg(Color::Green),
        )),
    ];

    let intro = Paragraph::new(content)
        .block(
            Block::default()
                .title(" How It Works ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(intro, chunks[0]);

    let example = Card::new(EXAMPLE_WORDS.iter().map(ToString::to_string).collect());
    render_card(f, &example, GRID_PRESETS[0].rank(), " Example Card ", chunks[1]);
}

fn render_grid_selection(f: &mut Frame, grid: &GridSelection, area: Rect) {
    let items: Vec<ListItem> = GRID_PRESETS
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            let selected = i == grid.selected_index();
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{}", preset.rank()), style),
                Span::raw(format!("  {:>2} words  ", preset.word_count())),
                Span::styled(preset.description, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Choose Grid Size ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_word_entry(f: &mut Frame, entry: &WordEntry, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let required = entry.rank().cell_count();
    let title = format!(" Words for a {} grid ({required} needed) ", entry.rank());
    let mut lines: Vec<Line> = entry
        .text()
        .split('\n')
        .map(|l| Line::from(l.to_string()))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.push_span(Span::styled("█", Style::default().fg(Color::Yellow)));
    }
    // Keep the cursor line in view
    let visible = usize::from(chunks[0].height.saturating_sub(2));
    let scroll = lines.len().saturating_sub(visible) as u16;

    let editor = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(editor, chunks[0]);

    let words = entry.words();
    let status = words.status_for(entry.rank());
    let status_color = match status {
        WordCountStatus::Exact => Color::Green,
        WordCountStatus::Missing(_) => Color::Yellow,
        WordCountStatus::Excess(_) => Color::Red,
    };

    let mut info = vec![
        Line::from(format!("Words entered: {} / {required}", words.len())),
        Line::from(""),
        Line::from(Span::styled(
            status.message(required),
            Style::default().fg(status_color),
        )),
    ];
    let duplicates = words.duplicates();
    if !duplicates.is_empty() {
        info.push(Line::from(""));
        info.push(Line::from(Span::styled(
            format!("Repeated: {}", duplicates.join(", ")),
            Style::default().fg(Color::Yellow),
        )));
    }

    let panel = Paragraph::new(info)
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(panel, chunks[1]);
}

fn render_generation(f: &mut Frame, generation: &Generation, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(chunks[0]);

    let percent = (generation.count() * 100 / MAX_CARDS) as u16;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Cards ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{} / {MAX_CARDS}", generation.count()));
    f.render_widget(gauge, left[0]);

    let batch_line = generation.batch().map_or_else(
        || {
            Line::from(Span::styled(
                "Not generated yet",
                Style::default().fg(Color::DarkGray),
            ))
        },
        |batch| {
            Line::from(Span::styled(
                format!("{} cards ready", batch.len()),
                Style::default().fg(Color::Green),
            ))
        },
    );
    let summary = Paragraph::new(vec![
        Line::from(format!("Grid:  {}", generation.rank())),
        Line::from(format!("Words: {}", generation.words().len())),
        batch_line,
    ])
    .block(
        Block::default()
            .title(" Batch ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(summary, left[1]);

    if generation.show_preview() {
        let preview = generation.preview().cards();
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, preview.len().max(1) as u32); preview.len()])
            .split(chunks[1]);
        for (i, card) in preview.iter().enumerate() {
            let title = format!(" Preview {} ", i + 1);
            render_card(f, card, generation.rank(), &title, halves[i]);
        }
    } else {
        let hidden = Paragraph::new("Preview hidden. Press 'p' to show it.")
            .alignment(Alignment::Center)
            .block(Block::default().title(" Preview ").borders(Borders::ALL));
        f.render_widget(hidden, chunks[1]);
    }
}

fn render_card(f: &mut Frame, card: &Card, rank: GridRank, title: &str, area: Rect) {
    // Fit cells to the available width: borders take one column per cell plus one
    let inner = usize::from(area.width.saturating_sub(2));
    let cell_chars = (inner.saturating_sub(rank.cols() + 1) / rank.cols())
        .saturating_sub(2)
        .max(3);

    let lines: Vec<Line> = format_card(card, rank, cell_chars)
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, step: Step, area: Rect) {
    let help_text = match step {
        Step::Intro => "Enter: Start | q: Quit",
        Step::GridSelection => "←/→: Choose | 1-3: Jump | Enter: Continue | Esc: Back | q: Quit",
        Step::WordEntry => {
            "Type words, Enter: New line | Ctrl+L: Sample words | Ctrl+U: Clear | Tab: Continue | Esc: Back"
        }
        Step::Generation => {
            "↑/↓: Count | Enter: Generate | p: Preview | e: PDF | h: Print view | Esc: Back | q: Quit"
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
