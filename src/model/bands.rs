use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaceBand {
    IdealPace,
    Slow,
    TooSlow,
    Fast,
    Invalid,
}

impl PaceBand {
    /// Bands are tested in order; anything unmatched is `Fast`, which also
    /// absorbs 80 <= wpm < 81 and the fractional gaps above 110 and 140.
    pub fn from_wpm(wpm: f64) -> Self {
        if (111.0..=140.0).contains(&wpm) {
            PaceBand::IdealPace
        } else if (81.0..=110.0).contains(&wpm) {
            PaceBand::Slow
        } else if wpm < 80.0 {
            PaceBand::TooSlow
        } else {
            PaceBand::Fast
        }
    }

    pub fn score(self) -> u32 {
        match self {
            PaceBand::IdealPace => 10,
            PaceBand::Slow => 6,
            PaceBand::TooSlow => 2,
            PaceBand::Fast => 6,
            PaceBand::Invalid => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaceBand::IdealPace => "Ideal Pace",
            PaceBand::Slow => "Slow",
            PaceBand::TooSlow => "Too Slow",
            PaceBand::Fast => "Fast",
            PaceBand::Invalid => "Invalid",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PaceBand::IdealPace => "Ideal Pace (111-140 WPM)",
            PaceBand::Slow => "Slow (81-110 WPM)",
            PaceBand::TooSlow => "Too Slow (<80 WPM)",
            PaceBand::Fast => "Fast (>140 WPM)",
            PaceBand::Invalid => "Invalid",
        }
    }
}

pub fn vocabulary_band(ttr: f64) -> u32 {
    if ttr >= 0.9 {
        10
    } else if ttr >= 0.7 {
        8
    } else if ttr >= 0.5 {
        6
    } else if ttr >= 0.3 {
        4
    } else {
        2
    }
}

/// Raw 10-point clarity band; callers scale it to the clarity weight.
pub fn filler_band(filler_rate: f64) -> u32 {
    if filler_rate < 2.0 {
        10
    } else if filler_rate < 5.0 {
        8
    } else if filler_rate < 9.0 {
        6
    } else if filler_rate < 12.0 {
        4
    } else {
        2
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bands.rs"]
mod tests;
