use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, Tabs, Wrap,
};

use metricboard_report::{
    ChartSlice, METRIC_COLUMNS, MetricField, PREVIEW_HEADERS, ScoreTone, charts::palette,
    health_slices, preview_rows, score_entries, validation_slices,
};

use crate::tui::state::{App, FilterColumn, InputMode, Page, SortOrder};

const PAGES: [Page; 2] = [Page::Dashboard, Page::Metrics];

pub fn draw_ui(frame: &mut ratatui::Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_page_tabs(frame, app, layout[0]);

    match app.page {
        Page::Dashboard => draw_dashboard(frame, app, layout[1]),
        Page::Metrics => draw_metrics(frame, app, layout[1]),
    }

    frame.render_widget(render_status_line(app), layout[2]);

    if let InputMode::Filter {
        column,
        highlighted,
    } = app.mode
    {
        draw_filter_panel(frame, app, column, highlighted);
    }
}

fn render_page_tabs(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let selected = PAGES.iter().position(|page| *page == app.page).unwrap_or(0);
    let tabs = Tabs::new(PAGES.iter().map(|page| page.label()).collect::<Vec<_>>())
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", app.info.name),
                    Style::default().fg(Color::White),
                )),
        );
    frame.render_widget(tabs, area);
}

fn draw_dashboard(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Min(8),
        ])
        .split(area);

    draw_overview_card(frame, app, layout[0]);
    draw_snapshot_card(frame, app, layout[1]);
    draw_score_strip(frame, app, layout[2]);
    draw_preview_table(frame, app, layout[3]);
}

fn draw_overview_card(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Overview");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(10)])
        .split(inner);

    frame.render_widget(render_category_tabs(app), layout[0]);

    // An out-of-range tab index leaves the content pane blank.
    let Some(category) = app.selected_category() else {
        return;
    };
    let status = app.info.dashboard.status(category);

    let mut lines = slice_lines(
        &validation_slices(status),
        layout[1].width.saturating_sub(2),
        show_weights(app),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        category.doc_hint(),
        Style::default().fg(Color::DarkGray),
    )));
    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, layout[1]);
}

fn render_category_tabs(app: &App) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = metricboard_core::MetricCategory::ALL
        .iter()
        .enumerate()
        .map(|(index, category)| {
            if index == app.current_category() {
                Line::from(vec![
                    Span::styled(" ► ", Style::default().fg(Color::Green)),
                    Span::styled(
                        category.label(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(category.label(), Style::default().fg(Color::Gray)),
                ])
            }
        })
        .collect();
    Paragraph::new(lines)
}

fn draw_snapshot_card(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Scorecard Snapshot");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(inner);

    let overall = &app.info.dashboard.overall;
    let mut lines = vec![Line::from(Span::styled(
        "Test Results",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.extend(slice_lines(
        &validation_slices(overall),
        layout[0].width.saturating_sub(2),
        show_weights(app),
    ));
    frame.render_widget(Paragraph::new(lines), layout[0]);

    let health = health_slices(overall);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::LEFT).title("Health Score"))
        .gauge_style(Style::default().fg(color(palette::SUCCESS)))
        .percent(u16::from(overall.health_score).min(100))
        .label(format!("{}% healthy / {}% not", health[0].value, health[1].value));
    frame.render_widget(gauge, layout[1]);
}

fn draw_score_strip(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let entries = score_entries(&app.info.dashboard.overall);
    let header = Row::new(
        entries
            .iter()
            .map(|entry| Cell::from(entry.title).style(Style::default().fg(Color::DarkGray)))
            .collect::<Vec<_>>(),
    );
    let values = Row::new(
        entries
            .iter()
            .map(|entry| Cell::from(entry.value.clone()).style(tone_style(entry.tone)))
            .collect::<Vec<_>>(),
    );
    let widths = [Constraint::Percentage(20); 5];
    let table = Table::new([values], widths).header(header);
    frame.render_widget(table, area);
}

fn draw_preview_table(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let rows = preview_rows(&app.info.dashboard);
    let header = Row::new(
        PREVIEW_HEADERS
            .iter()
            .map(|title| Cell::from(*title).style(Style::default().fg(Color::DarkGray)))
            .collect::<Vec<_>>(),
    );
    let body = rows
        .iter()
        .map(|row| Row::new(row.cells().map(|cell| cell.to_string()).to_vec()))
        .collect::<Vec<_>>();
    let widths = [Constraint::Percentage(16); 6];
    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Categories"),
    );
    frame.render_widget(table, area);
}

fn draw_metrics(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let rows = app.metrics_table.visible_rows(&app.info.metrics);
    let total = rows.len();
    let offset = app.metrics_table.row_offset.min(total.saturating_sub(1));

    let header = Row::new(
        METRIC_COLUMNS
            .iter()
            .enumerate()
            .map(|(index, column)| {
                Cell::from(header_label(app, index, column.field, column.header))
                    .style(Style::default().fg(Color::DarkGray))
            })
            .collect::<Vec<_>>(),
    );
    let body = rows
        .into_iter()
        .skip(offset)
        .map(|cells| Row::new(cells.to_vec()))
        .collect::<Vec<_>>();

    let widths = [
        Constraint::Percentage(22),
        Constraint::Percentage(14),
        Constraint::Percentage(16),
        Constraint::Percentage(14),
        Constraint::Percentage(10),
        Constraint::Percentage(24),
    ];
    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!("Metrics ({total})")),
    );
    frame.render_widget(table, area);
}

fn header_label(app: &App, index: usize, field: MetricField, header: &str) -> String {
    let mut label = header.to_string();
    if let Some((sorted, order)) = app.metrics_table.sort {
        if sorted == index {
            label.push_str(match order {
                SortOrder::Ascending => " ^",
                SortOrder::Descending => " v",
            });
        }
    }
    let filtered = match field {
        MetricField::MetricType => !app.metrics_table.type_filter.is_empty(),
        MetricField::IsValid => app.metrics_table.valid_filter.is_some(),
        _ => false,
    };
    if filtered {
        label.push_str(" *");
    }
    label
}

fn draw_filter_panel(frame: &mut ratatui::Frame, app: &App, column: FilterColumn, highlighted: usize) {
    let options = column.options();
    let height = (options.len() as u16).saturating_add(2);
    let area = centered_rect(36, height, frame.size());

    let lines: Vec<Line<'static>> = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let marker = match column {
                FilterColumn::MetricType => {
                    if app.filter_option_active(column, option) {
                        "[x]"
                    } else {
                        "[ ]"
                    }
                }
                FilterColumn::Validity => {
                    if app.filter_option_active(column, option) {
                        "(o)"
                    } else {
                        "( )"
                    }
                }
            };
            let cursor = if index == highlighted { "► " } else { "  " };
            let style = if index == highlighted {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("{cursor}{marker} {option}"), style))
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(column.title()),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(panel, area);
}

fn render_status_line(app: &App) -> Paragraph<'static> {
    let hint = match (&app.mode, app.page) {
        (InputMode::Filter { .. }, _) => "SPACE toggle . UP/DOWN move . ENTER/ESC close",
        (InputMode::Browse, Page::Dashboard) => {
            "TAB switch page . UP/DOWN category . q quit"
        }
        (InputMode::Browse, Page::Metrics) => {
            "s sort . d direction . f type filter . v valid filter . c clear . q quit"
        }
    };
    Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )))
}

/// Render slices as a proportional bar plus a legend line.
///
/// The adapter never special-cases an all-zero chart, so the degenerate
/// display lives here.
fn slice_lines(slices: &[ChartSlice], width: u16, weights: bool) -> Vec<Line<'static>> {
    let total: u64 = slices.iter().map(|slice| slice.value).sum();
    if total == 0 {
        return vec![Line::from(Span::styled(
            "no metrics recorded",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let width = u64::from(width.max(10));
    let mut bar: Vec<Span<'static>> = Vec::new();
    for slice in slices {
        let cells = (slice.value * width / total) as usize;
        if cells > 0 {
            bar.push(Span::styled(
                "█".repeat(cells),
                Style::default().fg(color(slice.color)),
            ));
        }
    }

    let mut legend: Vec<Span<'static>> = Vec::new();
    for slice in slices {
        legend.push(Span::styled("■ ", Style::default().fg(color(slice.color))));
        let text = if weights {
            format!("{} {}  ", slice.label, slice.value)
        } else {
            format!("{}  ", slice.label)
        };
        legend.push(Span::styled(text, Style::default().fg(Color::Gray)));
    }

    vec![Line::from(bar), Line::from(legend)]
}

fn show_weights(app: &App) -> bool {
    app.settings.arc_labels && app.viewport_width >= 60
}

fn tone_style(tone: ScoreTone) -> Style {
    match tone {
        ScoreTone::Default => Style::default().fg(Color::White),
        ScoreTone::Success => Style::default().fg(color(palette::SUCCESS)),
        ScoreTone::Failed => Style::default().fg(color(palette::FAILED)),
        ScoreTone::Unchecked => Style::default().fg(color(palette::UNCHECKED)),
    }
}

fn color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
