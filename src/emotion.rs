use serde::{Deserialize, Serialize};

/// One labeled magnitude from the service's `top_emotions` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emotion {
    pub label: String,
    pub score: f64,
}

impl Emotion {
    #[cfg(test)]
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self { label: label.into(), score }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmotionBar {
    pub label: String,
    /// Width relative to the strongest emotion, in [0, 100], one decimal place.
    pub percentage: f64,
}

fn magnitude(score: f64) -> f64 {
    if score.is_finite() && score > 0.0 {
        score
    } else {
        0.0
    }
}

/// Scale every score against the largest one. When nothing is positive the
/// divisor is 1, so all bars come out at 0%.
pub fn normalize(emotions: &[Emotion]) -> Vec<EmotionBar> {
    let max = emotions
        .iter()
        .map(|e| magnitude(e.score))
        .fold(0.0_f64, f64::max);
    let divisor = if max > 0.0 { max } else { 1.0 };

    emotions
        .iter()
        .map(|e| {
            let pct = magnitude(e.score) / divisor * 100.0;
            EmotionBar {
                label: e.label.clone(),
                percentage: ((pct * 10.0).round() / 10.0).clamp(0.0, 100.0),
            }
        })
        .collect()
}
