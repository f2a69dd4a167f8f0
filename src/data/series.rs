//! Series Selection Module
//! Enumerates the eight plottable series of a simulation result table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the simulated intersection a series belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn prefix(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Per-side metric plotted on the Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    NumberOfCars,
    AverageWaitingTime,
    MaximumWaitingTime,
    TimeToClear,
}

impl Metric {
    pub fn column_suffix(self) -> &'static str {
        match self {
            Metric::NumberOfCars => "Number of Cars",
            Metric::AverageWaitingTime => "Average Waiting Time",
            Metric::MaximumWaitingTime => "Maximum Waiting Time",
            Metric::TimeToClear => "Time to Clear",
        }
    }
}

/// The active series: one side and one metric, resolved at runtime.
///
/// X is always the side's "Period" column and Y its "Arrival Rate" column;
/// the metric only selects the Z column and the legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesChoice {
    pub side: Side,
    pub metric: Metric,
}

impl Default for SeriesChoice {
    fn default() -> Self {
        Self {
            side: Side::Right,
            metric: Metric::NumberOfCars,
        }
    }
}

impl fmt::Display for SeriesChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side.prefix(), self.metric.column_suffix())
    }
}

impl SeriesChoice {
    /// All eight plottable series, in panel order.
    pub const ALL: [SeriesChoice; 8] = [
        SeriesChoice { side: Side::Left, metric: Metric::NumberOfCars },
        SeriesChoice { side: Side::Left, metric: Metric::AverageWaitingTime },
        SeriesChoice { side: Side::Left, metric: Metric::MaximumWaitingTime },
        SeriesChoice { side: Side::Left, metric: Metric::TimeToClear },
        SeriesChoice { side: Side::Right, metric: Metric::NumberOfCars },
        SeriesChoice { side: Side::Right, metric: Metric::AverageWaitingTime },
        SeriesChoice { side: Side::Right, metric: Metric::MaximumWaitingTime },
        SeriesChoice { side: Side::Right, metric: Metric::TimeToClear },
    ];

    pub fn x_column(&self) -> String {
        format!("{} Period", self.side.prefix())
    }

    pub fn y_column(&self) -> String {
        format!("{} Arrival Rate", self.side.prefix())
    }

    pub fn z_column(&self) -> String {
        format!("{} {}", self.side.prefix(), self.metric.column_suffix())
    }

    /// Legend label, identical to the Z column name.
    pub fn label(&self) -> String {
        self.z_column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_series_is_right_number_of_cars() {
        let choice = SeriesChoice::default();
        assert_eq!(choice.x_column(), "Right Period");
        assert_eq!(choice.y_column(), "Right Arrival Rate");
        assert_eq!(choice.z_column(), "Right Number of Cars");
        assert_eq!(choice.label(), "Right Number of Cars");
    }

    #[test]
    fn left_metric_only_changes_z_column() {
        let choice = SeriesChoice {
            side: Side::Left,
            metric: Metric::AverageWaitingTime,
        };
        assert_eq!(choice.x_column(), "Left Period");
        assert_eq!(choice.y_column(), "Left Arrival Rate");
        assert_eq!(choice.z_column(), "Left Average Waiting Time");
    }

    #[test]
    fn all_eight_choices_have_distinct_labels() {
        let labels: HashSet<String> =
            SeriesChoice::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), 8);
    }
}
