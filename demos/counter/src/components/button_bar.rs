//! Row of key hints standing in for the counter's buttons

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use tally::{format_key_for_display, Keybindings};

use super::Component;
use crate::action::CounterAction;
use crate::config::Command;

pub struct ButtonBarProps<'a> {
    pub keybindings: &'a Keybindings,
    pub show_counter: bool,
}

pub struct ButtonBar;

impl ButtonBar {
    fn hint(command: Command, props: &ButtonBarProps<'_>) -> Vec<Span<'static>> {
        let key = props
            .keybindings
            .get_first_keybinding(command.name())
            .map(format_key_for_display)
            .unwrap_or_else(|| "-".to_string());
        vec![
            Span::styled(format!(" {key}"), Style::default().fg(Color::Cyan).bold()),
            Span::styled(
                format!(" {}  ", command.label(props.show_counter)),
                Style::default().fg(Color::DarkGray),
            ),
        ]
    }
}

impl Component<CounterAction> for ButtonBar {
    type Props<'a> = ButtonBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let spans: Vec<Span> = Command::ALL
            .into_iter()
            .flat_map(|command| Self::hint(command, &props))
            .collect();
        let paragraph = Paragraph::new(Line::from(spans).centered()).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
