//! Serializable figure description for the dual-axis dashboard chart
//!
//! The structs here serialize directly into the JSON shape the plotting
//! library consumes: a `data` array of traces and a `layout` object with
//! a secondary y-axis overlaying the first.

use serde::{Deserialize, Serialize};

/// A complete chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Traces in draw order
    pub data: Vec<Trace>,

    /// Page-level chart layout
    pub layout: Layout,
}

/// A named, ordered sequence of (x, y) points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// X values (dates as YYYY-MM-DD strings)
    pub x: Vec<String>,

    /// Y values
    pub y: Vec<f64>,

    /// Draw mode
    pub mode: String,

    /// Legend name
    pub name: String,

    /// Axis reference; "y2" moves the trace to the secondary axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

impl Trace {
    /// Line trace on the primary y-axis
    pub fn lines(name: impl Into<String>, x: Vec<String>, y: Vec<f64>) -> Self {
        Self { x, y, mode: "lines".to_string(), name: name.into(), yaxis: None }
    }

    /// Move this trace to the secondary y-axis
    pub fn on_secondary_axis(mut self) -> Self {
        self.yaxis = Some("y2".to_string());
        self
    }
}

/// Chart layout with a bounded secondary axis for sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: AxisTitle,
    pub yaxis: AxisTitle,
    pub yaxis2: SecondaryAxis,
    pub legend: Legend,
    pub hovermode: String,
}

/// Minimal axis object carrying only a title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub title: String,
}

/// Secondary y-axis overlaying the primary, fixed to the sentiment range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryAxis {
    pub title: String,
    pub overlaying: String,
    pub side: String,
    pub range: [f64; 2],
    pub tickvals: Vec<f64>,
    pub ticktext: Vec<String>,
}

/// Legend block; only the title is configured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: LegendTitle,
}

/// Legend title text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendTitle {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secondary_axis_trace_serialization() {
        let trace = Trace::lines(
            "AAPL Sentiment",
            vec!["2024-01-01".to_string()],
            vec![0.25],
        )
        .on_secondary_axis();

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["yaxis"], "y2");
        assert_eq!(value["mode"], "lines");
        assert_eq!(value["name"], "AAPL Sentiment");
    }

    #[test]
    fn test_primary_axis_trace_omits_yaxis() {
        let trace = Trace::lines("AAPL Price", vec!["2024-01-01".to_string()], vec![185.64]);

        let value = serde_json::to_value(&trace).unwrap();
        assert!(value.get("yaxis").is_none());
    }
}
