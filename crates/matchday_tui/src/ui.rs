//! Rendering: header, scrollable match log, phase-dependent footer.

use crate::app::{App, Phase};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub fn draw(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Match log
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    let title = Paragraph::new(format!(
        " Matchday v{} | two random XIs, nine rounds ",
        matchday_core::VERSION
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout[0]);

    // Show the tail of the log unless the user scrolled up.
    let inner_height = layout[1].height.saturating_sub(2) as usize;
    let log = app.log();
    let end = log.len().saturating_sub(app.scroll_from_bottom());
    let start = end.saturating_sub(inner_height);
    let items: Vec<ListItem> =
        log[start..end].iter().map(|line| ListItem::new(line.as_str())).collect();
    frame.render_widget(
        List::new(items).block(Block::default().title(" Match log ").borders(Borders::ALL)),
        layout[1],
    );

    let footer = Paragraph::new(hints(app.phase()))
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, layout[2]);
}

fn hints(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => " Enter: kick off | Up/Down: scroll | q: quit ",
        Phase::RevealHome | Phase::RevealAway | Phase::Simulating | Phase::Reporting => {
            " Up/Down: scroll | q: quit "
        }
        Phase::BetPrompt => " y: place a bet | n: no bet | q: quit ",
        Phase::BetPick => " 1: back Home | 2: back Away | q: quit ",
        Phase::AwaitingReplay => " y: another round | n: call it a day | q: quit ",
        Phase::Done => " q: quit ",
    }
}
