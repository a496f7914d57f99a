use serde::Serialize;

/// Percent change from `previous` to `current`.
///
/// Without a nonzero previous value there is nothing to compare against and the
/// change is reported as `0.0`.
pub fn percent_change(current: f64, previous: Option<f64>) -> f64 {
    match previous {
        Some(prev) if prev != 0.0 => (current - prev) / prev * 100.0,
        _ => 0.0,
    }
}

/// Direction of a nonzero change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// `None` for zero (and NaN): no indicator is shown
    pub fn from_change(change: f64) -> Option<Self> {
        if change > 0.0 {
            Some(Trend::Up)
        } else if change < 0.0 {
            Some(Trend::Down)
        } else {
            None
        }
    }
}

/// How a card value is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFormat {
    Count,
    Percent,
}

/// Single KPI tile: current value plus an optional comparison value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: String,
    pub value: f64,
    pub previous: Option<f64>,
    pub format: MetricFormat,
}

impl MetricCard {
    pub fn new(title: impl Into<String>, value: f64, format: MetricFormat) -> Self {
        Self {
            title: title.into(),
            value,
            previous: None,
            format,
        }
    }

    pub fn with_previous(mut self, previous: f64) -> Self {
        self.previous = Some(previous);
        self
    }

    pub fn change(&self) -> f64 {
        percent_change(self.value, self.previous)
    }

    pub fn trend(&self) -> Option<Trend> {
        Trend::from_change(self.change())
    }
}
