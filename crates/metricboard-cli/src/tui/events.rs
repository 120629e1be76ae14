use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::state::{App, FilterColumn, InputMode, Page};
use metricboard_core::MetricCategory;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode {
        InputMode::Browse => handle_browse_key(app, key),
        InputMode::Filter {
            column,
            highlighted,
        } => handle_filter_key(app, column, highlighted, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.page = app.page.toggled();
        }
        KeyCode::Char('1') => app.page = Page::Dashboard,
        KeyCode::Char('2') => app.page = Page::Metrics,
        KeyCode::Down => match app.page {
            Page::Dashboard => {
                let last = MetricCategory::ALL.len().saturating_sub(1);
                app.select_category((app.current_category() + 1).min(last));
            }
            Page::Metrics => {
                app.metrics_table.row_offset = app.metrics_table.row_offset.saturating_add(1);
            }
        },
        KeyCode::Up => match app.page {
            Page::Dashboard => {
                app.select_category(app.current_category().saturating_sub(1));
            }
            Page::Metrics => {
                app.metrics_table.row_offset = app.metrics_table.row_offset.saturating_sub(1);
            }
        },
        KeyCode::PageDown if app.page == Page::Metrics => {
            app.metrics_table.row_offset = app.metrics_table.row_offset.saturating_add(10);
        }
        KeyCode::PageUp if app.page == Page::Metrics => {
            app.metrics_table.row_offset = app.metrics_table.row_offset.saturating_sub(10);
        }
        KeyCode::Char('s') if app.page == Page::Metrics => {
            app.metrics_table.cycle_sort_column();
        }
        KeyCode::Char('d') if app.page == Page::Metrics => {
            app.metrics_table.toggle_sort_order();
        }
        KeyCode::Char('f') if app.page == Page::Metrics => {
            app.mode = InputMode::Filter {
                column: FilterColumn::MetricType,
                highlighted: 0,
            };
        }
        KeyCode::Char('v') if app.page == Page::Metrics => {
            app.mode = InputMode::Filter {
                column: FilterColumn::Validity,
                highlighted: 0,
            };
        }
        KeyCode::Char('c') if app.page == Page::Metrics => {
            app.metrics_table.clear_filters();
        }
        _ => {}
    }
}

fn handle_filter_key(app: &mut App, column: FilterColumn, highlighted: usize, key: KeyEvent) {
    let options = column.options();
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.mode = InputMode::Browse;
        }
        KeyCode::Down => {
            app.mode = InputMode::Filter {
                column,
                highlighted: (highlighted + 1).min(options.len().saturating_sub(1)),
            };
        }
        KeyCode::Up => {
            app.mode = InputMode::Filter {
                column,
                highlighted: highlighted.saturating_sub(1),
            };
        }
        KeyCode::Char(' ') => {
            if let Some(option) = options.get(highlighted) {
                match column {
                    FilterColumn::MetricType => app.metrics_table.toggle_type_option(option),
                    FilterColumn::Validity => app.metrics_table.toggle_valid_option(option),
                }
                app.metrics_table.row_offset = 0;
            }
        }
        _ => {}
    }
}
