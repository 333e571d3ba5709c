//! Chart configurations
//!
//! Backend-agnostic description of the two overview charts. A
//! [`ChartBackend`](crate::charts::ChartBackend) turns one into pixels.

use serde::Serialize;

use crate::format::format_currency;
use crate::model::{CategorySales, MonthlySales};

/// Doughnut slice colours, cycled
pub const CATEGORY_COLORS: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];

const LINE_COLOR: &str = "#36A2EB";
const LINE_FILL: &str = "rgba(54, 162, 235, 0.1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Proportion of the whole
    Doughnut,
    /// Time series
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Legend entry for single-series charts
    pub series_label: Option<String>,
    /// One colour per slice (doughnut) or the stroke colour (line)
    pub colors: Vec<&'static str>,
    pub fill: Option<&'static str>,
    /// Curve smoothing for line charts, 0.0 = straight segments
    pub tension: f64,
}

impl ChartConfig {
    /// Format a value-axis tick
    pub fn format_tick(&self, value: f64) -> String {
        match self.kind {
            ChartKind::Line => format_currency(value),
            ChartKind::Doughnut => format!("{:.0}", value),
        }
    }

    /// Colour for the slice at `index`
    pub fn color_at(&self, index: usize) -> &'static str {
        if self.colors.is_empty() {
            LINE_COLOR
        } else {
            self.colors[index % self.colors.len()]
        }
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Sales by category, as a doughnut
pub fn category_chart(data: &[CategorySales]) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Doughnut,
        labels: data.iter().map(|d| d.categoria.clone()).collect(),
        values: data.iter().map(|d| d.total_vendas).collect(),
        series_label: None,
        colors: CATEGORY_COLORS.to_vec(),
        fill: None,
        tension: 0.0,
    }
}

/// Monthly sales, as a line series
pub fn monthly_chart(data: &[MonthlySales]) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        labels: data.iter().map(|d| d.mes.clone()).collect(),
        values: data.iter().map(|d| d.total_vendas).collect(),
        series_label: Some("Vendas (R$)".to_string()),
        colors: vec![LINE_COLOR],
        fill: Some(LINE_FILL),
        tension: 0.4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_chart_parallel_arrays() {
        let data = vec![
            CategorySales {
                categoria: "Livros".to_string(),
                total_vendas: 300.0,
            },
            CategorySales {
                categoria: "Casa".to_string(),
                total_vendas: 100.0,
            },
        ];

        let chart = category_chart(&data);
        assert_eq!(chart.kind, ChartKind::Doughnut);
        assert_eq!(chart.labels, vec!["Livros", "Casa"]);
        assert_eq!(chart.values, vec![300.0, 100.0]);
        assert_eq!(chart.total(), 400.0);
        assert_eq!(chart.color_at(6), "#36A2EB");
    }

    #[test]
    fn test_monthly_chart() {
        let data: Vec<MonthlySales> = serde_json::from_str(
            r#"[{"mes": "2024-01", "total_vendas": 1000}, {"mes": "2024-02", "receita_total": 1500.5}]"#,
        )
        .unwrap();

        let chart = monthly_chart(&data);
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(chart.values, vec![1000.0, 1500.5]);
        assert_eq!(chart.format_tick(1500.0), "R$\u{a0}1.500,00");
    }

    #[test]
    fn test_empty_chart() {
        assert!(category_chart(&[]).is_empty());
        assert_eq!(monthly_chart(&[]).total(), 0.0);
    }
}
