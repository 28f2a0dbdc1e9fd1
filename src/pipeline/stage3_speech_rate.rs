use crate::model::bands::PaceBand;
use crate::model::scores::SpeechRateScore;

pub fn score_speech_rate(word_count: usize, duration_seconds: f64) -> SpeechRateScore {
    if duration_seconds <= 0.0 {
        return from_band(PaceBand::Invalid, 0);
    }

    let wpm = words_per_minute(word_count, duration_seconds);
    let band = PaceBand::from_wpm(wpm);
    from_band(band, wpm as u32)
}

pub fn words_per_minute(word_count: usize, duration_seconds: f64) -> f64 {
    word_count as f64 / (duration_seconds / 60.0)
}

fn from_band(band: PaceBand, wpm: u32) -> SpeechRateScore {
    SpeechRateScore {
        score: f64::from(band.score()),
        wpm,
        band,
        feedback: band.label(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_speech_rate.rs"]
mod tests;
