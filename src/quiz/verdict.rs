/// Closing message shown on the summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Excellent,
    GoodJob,
    KeepTrying,
}

impl Verdict {
    pub fn from_score(score: u32, total: usize) -> Self {
        if total == 0 {
            return Verdict::KeepTrying;
        }
        let ratio = f64::from(score) / total as f64;
        if ratio >= 1.0 {
            Verdict::Perfect
        } else if ratio >= 0.7 {
            Verdict::Excellent
        } else if ratio >= 0.5 {
            Verdict::GoodJob
        } else {
            Verdict::KeepTrying
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect! 🏆",
            Verdict::Excellent => "Excellent! ⭐",
            Verdict::GoodJob => "Good job! 👍",
            Verdict::KeepTrying => "Keep trying! You'll get there! 💪",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_score(3, 3), Verdict::Perfect);
        assert_eq!(Verdict::from_score(7, 10), Verdict::Excellent);
        assert_eq!(Verdict::from_score(2, 3), Verdict::GoodJob);
        assert_eq!(Verdict::from_score(5, 10), Verdict::GoodJob);
        assert_eq!(Verdict::from_score(1, 3), Verdict::KeepTrying);
        assert_eq!(Verdict::from_score(0, 0), Verdict::KeepTrying);
    }
}
