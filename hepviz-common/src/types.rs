use serde::{Deserialize, Serialize};

/// Legend metadata for a physics sample (a background, signal, or data
/// category shown in a plot legend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Display label; may contain TeX-style markup for the renderer.
    pub label: String,
    /// Color name or hex code, passed through to the plotting backend.
    pub color: String,
}

impl Sample {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Axis metadata for a measured or derived physical quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Axis label; may contain TeX-style markup.
    pub label: String,
    /// Histogram bin edges, strictly increasing, length `nbins + 1`.
    pub binning: Vec<f64>,
}

impl Variable {
    pub fn new(label: impl Into<String>, binning: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            binning,
        }
    }

    /// Number of bins described by the edge sequence.
    pub fn nbins(&self) -> usize {
        self.binning.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nbins() {
        let var = Variable::new("x", vec![0.0, 0.5, 1.0]);
        assert_eq!(var.nbins(), 2);

        let empty = Variable::new("x", vec![]);
        assert_eq!(empty.nbins(), 0);
    }

    #[test]
    fn test_sample_serialization() {
        let sample = Sample::new(r"t$\bar{\text{t}}$", "white");
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value["label"], r"t$\bar{\text{t}}$");
        assert_eq!(value["color"], "white");

        let back: Sample = serde_json::from_value(value).unwrap();
        assert_eq!(back, sample);
    }
}
