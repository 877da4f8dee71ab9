use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::screen::ConfirmChoice;
use crate::tui::constants::APP_VERSION;
use crate::tui::helpers::{centered_rect, format_counter};

use super::{App, InputMode};

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(2),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.draw_list(f, chunks[1]);
        self.draw_footer(f, chunks[2]);

        match self.input_mode {
            InputMode::Add | InputMode::Edit => self.draw_input_overlay(f, size),
            InputMode::ConfirmRemove => self.draw_confirm_overlay(f, size),
            InputMode::Help => self.draw_help_overlay(f, size),
            InputMode::Normal => {}
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let done = self.tasks().iter().filter(|task| task.done).count();
        let line = Line::from(vec![
            Span::styled(
                format!(" taskpad v{APP_VERSION} "),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("— {}", format_counter(self.tasks().len(), done)),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn draw_list(&mut self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.tasks().is_empty() {
            let empty = Paragraph::new("No tasks yet — press a to add one")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .tasks()
            .iter()
            .map(|task| {
                let marker = if task.done { "[x] " } else { "[ ] " };
                let style = if task.done {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(task.title.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(32, 37, 47)))
            .highlight_symbol("› ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        if let Some(status) = &self.status {
            f.render_widget(
                Paragraph::new(status.text.clone()).style(status.style()),
                rows[0],
            );
        }

        let hints = "a add • e rename • Space toggle • x remove • j/k move • h help • q quit";
        f.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            rows[1],
        );
    }

    fn draw_input_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let title = match self.input_mode {
            InputMode::Edit => "Rename task",
            _ => "Add task",
        };
        let rect = centered_rect(46, 3, area);
        f.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(rect);
        f.render_widget(Paragraph::new(self.input.as_str()).block(block), rect);

        if self.input_focused && inner.width > 0 {
            let column = (self.input.cursor_column() as u16).min(inner.width - 1);
            f.set_cursor(inner.x + column, inner.y);
        }
    }

    fn draw_confirm_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let rect = centered_rect(44, 5, area);
        f.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Remove task")
            .border_style(Style::default().fg(Color::Red));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let title = self
            .pending_removal
            .as_ref()
            .map(|pending| pending.title.as_str())
            .unwrap_or("");
        let question = Paragraph::new(format!("Remove \"{title}\"?")).alignment(Alignment::Center);

        let chosen = Style::default()
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);
        let plain = Style::default().fg(Color::DarkGray);
        let (yes_style, no_style) = match self.confirm_choice {
            ConfirmChoice::Yes => (chosen, plain),
            ConfirmChoice::No => (plain, chosen),
        };
        let buttons = Paragraph::new(Line::from(vec![
            Span::styled("[ Yes ]", yes_style),
            Span::raw("   "),
            Span::styled("[ No ]", no_style),
        ]))
        .alignment(Alignment::Center);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);
        f.render_widget(question, rows[0]);
        f.render_widget(buttons, rows[2]);
    }

    fn draw_help_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from("a        add a task"),
            Line::from("e        rename the selected task"),
            Line::from("Space    toggle done"),
            Line::from("x / Del  remove (asks for confirmation)"),
            Line::from("j / k    move selection"),
            Line::from("h / ?    this reference"),
            Line::from("q        quit"),
        ];
        let rect = centered_rect(44, lines.len() as u16 + 2, area);
        f.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Keys")
            .border_style(Style::default().fg(Color::Green));
        f.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
