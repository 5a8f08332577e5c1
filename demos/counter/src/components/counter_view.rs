//! The counter screen: title, value and buttons
//!
//! Props borrow the current snapshot and the active keybindings; key
//! presses become at most one action through the keybinding table.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tally::{EventKind, Keybindings};
use tracing::trace;

use super::{ButtonBar, ButtonBarProps, Component};
use crate::action::CounterAction;
use crate::config::Command;
use crate::state::CounterState;

pub struct CounterViewProps<'a> {
    pub state: &'a CounterState,
    pub keybindings: &'a Keybindings,
}

#[derive(Default)]
pub struct CounterView;

impl Component<CounterAction> for CounterView {
    type Props<'a> = CounterViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = CounterAction> {
        event
            .as_key()
            .and_then(|key| props.keybindings.get_command(*key))
            .and_then(Command::from_name)
            .map(|command| {
                trace!(command = command.name(), "Key mapped");
                command.action()
            })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let block = Block::default()
            .title(" Redux Counter ")
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(Color::Cyan).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [_, value_area, _, buttons_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        if state.show_counter {
            let value = Paragraph::new(state.counter.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).bold());
            frame.render_widget(value, value_area);
        }

        let mut buttons = ButtonBar;
        buttons.render(
            frame,
            buttons_area,
            ButtonBarProps {
                keybindings: props.keybindings,
                show_counter: state.show_counter,
            },
        );
    }
}
