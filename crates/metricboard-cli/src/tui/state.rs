use std::collections::BTreeSet;

use metricboard_core::{DashboardInfo, MetricCategory, MetricRow};
use metricboard_report::{IS_VALID_OPTIONS, METRIC_COLUMNS, METRIC_TYPE_OPTIONS, metric_cells};

use crate::settings::Settings;

/// Top-level page shown under the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Metrics,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Metrics => "metrics",
        }
    }

    pub fn toggled(&self) -> Page {
        match self {
            Page::Dashboard => Page::Metrics,
            Page::Metrics => Page::Dashboard,
        }
    }
}

/// Which column a filter panel edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    MetricType,
    Validity,
}

impl FilterColumn {
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FilterColumn::MetricType => &METRIC_TYPE_OPTIONS,
            FilterColumn::Validity => &IS_VALID_OPTIONS,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FilterColumn::MetricType => "Filter: Metric Type",
            FilterColumn::Validity => "Filter: Valid",
        }
    }
}

/// Input focus: plain browsing or an open filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Filter {
        column: FilterColumn,
        highlighted: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(&self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Client-side grid state for the full metric table.
#[derive(Debug, Clone, Default)]
pub struct MetricsTableState {
    /// Active sort: column index into `METRIC_COLUMNS` plus direction.
    pub sort: Option<(usize, SortOrder)>,
    /// Multi-select metric-type filter; empty means no filtering.
    pub type_filter: BTreeSet<String>,
    /// Validity select filter.
    pub valid_filter: Option<bool>,
    /// First visible row.
    pub row_offset: usize,
}

impl MetricsTableState {
    /// Advance the sort to the next sortable column, then back to none.
    pub fn cycle_sort_column(&mut self) {
        let start = match self.sort {
            Some((index, _)) => index + 1,
            None => 0,
        };
        let next = (start..METRIC_COLUMNS.len()).find(|&index| METRIC_COLUMNS[index].sortable);
        self.sort = next.map(|index| (index, SortOrder::Ascending));
    }

    pub fn toggle_sort_order(&mut self) {
        if let Some((_, order)) = &mut self.sort {
            *order = order.flipped();
        }
    }

    pub fn toggle_type_option(&mut self, option: &str) {
        if !self.type_filter.remove(option) {
            self.type_filter.insert(option.to_string());
        }
    }

    /// Select-style toggle: picking the active option clears the filter.
    pub fn toggle_valid_option(&mut self, option: &str) {
        let picked = option == "True";
        self.valid_filter = match self.valid_filter {
            Some(current) if current == picked => None,
            _ => Some(picked),
        };
    }

    pub fn clear_filters(&mut self) {
        self.type_filter.clear();
        self.valid_filter = None;
        self.row_offset = 0;
    }

    fn matches(&self, row: &MetricRow) -> bool {
        if !self.type_filter.is_empty() && !self.type_filter.contains(&row.metric_type) {
            return false;
        }
        match self.valid_filter {
            Some(expected) => row.is_valid == Some(expected),
            None => true,
        }
    }

    /// Apply filters then sort, yielding display cells in column order.
    pub fn visible_rows(&self, metrics: &[MetricRow]) -> Vec<[String; 6]> {
        let mut rows: Vec<[String; 6]> = metrics
            .iter()
            .filter(|row| self.matches(row))
            .map(metric_cells)
            .collect();
        if let Some((column, order)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = a[column].cmp(&b[column]);
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }
}

/// All view state for one mounted dashboard.
pub struct App {
    pub info: DashboardInfo,
    pub settings: Settings,
    pub page: Page,
    pub mode: InputMode,
    pub metrics_table: MetricsTableState,
    pub should_quit: bool,
    /// Last known terminal width; only forces chart re-layout.
    pub viewport_width: u16,
    category_idx: usize,
}

impl App {
    pub fn new(info: DashboardInfo, settings: Settings) -> Self {
        Self {
            info,
            settings,
            page: Page::Dashboard,
            mode: InputMode::Browse,
            metrics_table: MetricsTableState::default(),
            should_quit: false,
            viewport_width: 0,
            category_idx: 0,
        }
    }

    /// Set the active category tab. Bounds are not validated; an
    /// out-of-range index leaves the content pane blank.
    pub fn select_category(&mut self, index: usize) {
        self.category_idx = index;
    }

    pub fn current_category(&self) -> usize {
        self.category_idx
    }

    pub fn selected_category(&self) -> Option<MetricCategory> {
        MetricCategory::from_index(self.category_idx)
    }

    pub fn on_resize(&mut self, width: u16) {
        self.viewport_width = width;
    }

    /// Options list for an open filter panel, with active markers.
    pub fn filter_option_active(&self, column: FilterColumn, option: &str) -> bool {
        match column {
            FilterColumn::MetricType => self.metrics_table.type_filter.contains(option),
            FilterColumn::Validity => match self.metrics_table.valid_filter {
                Some(true) => option == "True",
                Some(false) => option == "False",
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metricboard_core::DashboardMetricOverview;

    fn row(name: &str, kind: &str, is_valid: Option<bool>) -> MetricRow {
        MetricRow {
            metric_name: name.to_string(),
            data_source: None,
            metric_type: kind.to_string(),
            is_valid,
            metric_value: "1.00".to_string(),
            reason: None,
        }
    }

    fn app() -> App {
        let info = DashboardInfo {
            name: "test".to_string(),
            dashboard: DashboardMetricOverview::default(),
            metrics: vec![
                row("b_avg", "avg", Some(true)),
                row("a_min", "min", Some(false)),
                row("c_freshness", "freshness", None),
            ],
        };
        App::new(info, Settings::default())
    }

    #[test]
    fn selecting_an_index_reads_back_the_same_index() {
        let mut app = app();
        for index in 0..MetricCategory::ALL.len() {
            app.select_category(index);
            assert_eq!(app.current_category(), index);
            assert!(app.selected_category().is_some());
        }
    }

    #[test]
    fn out_of_range_selection_blanks_the_pane_without_panicking() {
        let mut app = app();
        app.select_category(42);
        assert_eq!(app.current_category(), 42);
        assert_eq!(app.selected_category(), None);
    }

    #[test]
    fn router_starts_on_dashboard_and_toggles() {
        let mut app = app();
        assert_eq!(app.page, Page::Dashboard);
        app.page = app.page.toggled();
        assert_eq!(app.page, Page::Metrics);
        app.page = app.page.toggled();
        assert_eq!(app.page, Page::Dashboard);
    }

    #[test]
    fn type_filter_is_multi_select() {
        let app = app();
        let mut table = MetricsTableState::default();
        table.toggle_type_option("avg");
        table.toggle_type_option("min");
        assert_eq!(table.visible_rows(&app.info.metrics).len(), 2);
        table.toggle_type_option("min");
        let rows = table.visible_rows(&app.info.metrics);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "b_avg");
    }

    #[test]
    fn zero_match_option_still_filters() {
        let app = app();
        let mut table = MetricsTableState::default();
        table.toggle_type_option("document_count");
        assert!(table.visible_rows(&app.info.metrics).is_empty());
    }

    #[test]
    fn validity_filter_selects_and_clears() {
        let app = app();
        let mut table = MetricsTableState::default();
        table.toggle_valid_option("False");
        let rows = table.visible_rows(&app.info.metrics);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][4], "FALSE");
        // Picking the active option again clears the filter.
        table.toggle_valid_option("False");
        assert_eq!(table.visible_rows(&app.info.metrics).len(), 3);
    }

    #[test]
    fn sort_cycles_over_sortable_columns_only() {
        let mut table = MetricsTableState::default();
        let mut visited = Vec::new();
        table.cycle_sort_column();
        while let Some((index, _)) = table.sort {
            visited.push(index);
            table.cycle_sort_column();
        }
        // Reason (last column) is not sortable.
        assert_eq!(visited, vec![0, 1, 2, 3, 4]);
        assert_eq!(table.sort, None);
    }

    #[test]
    fn sorting_orders_rows_by_the_selected_column() {
        let app = app();
        let mut table = MetricsTableState::default();
        table.cycle_sort_column();
        let rows = table.visible_rows(&app.info.metrics);
        assert_eq!(rows[0][0], "a_min");
        table.toggle_sort_order();
        let rows = table.visible_rows(&app.info.metrics);
        assert_eq!(rows[0][0], "c_freshness");
    }
}
