use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Excellent,
    Average,
    Poor,
}

impl Verdict {
    /// Strict comparisons: exactly 80 is Average, exactly 50 is Poor.
    pub fn from_score(final_score: f64) -> Self {
        if final_score > 80.0 {
            Verdict::Excellent
        } else if final_score > 50.0 {
            Verdict::Average
        } else {
            Verdict::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent",
            Verdict::Average => "Average",
            Verdict::Poor => "Poor",
        }
    }
}
