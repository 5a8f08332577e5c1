pub mod button_bar;
pub mod counter_view;

// Re-export core Component trait
pub use tally::Component;

pub use button_bar::{ButtonBar, ButtonBarProps};
pub use counter_view::{CounterView, CounterViewProps};
