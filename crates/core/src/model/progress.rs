use serde::{Deserialize, Serialize};

/// Aggregated completion for one session, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: usize,
}

impl SessionProgress {
    /// Compute progress from counts; `percentage` is `completed / total * 100`
    /// rounded half up. A session with no topics reports all zeroes.
    #[must_use]
    pub fn from_counts(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self::default();
        }
        let completed = completed.min(total);
        Self {
            completed,
            total,
            percentage: (completed * 200 + total) / (total * 2),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_reports_zero() {
        assert_eq!(SessionProgress::from_counts(0, 0), SessionProgress::default());
        assert_eq!(SessionProgress::from_counts(3, 0), SessionProgress::default());
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(SessionProgress::from_counts(2, 8).percentage, 25);
        assert_eq!(SessionProgress::from_counts(1, 8).percentage, 13);
        assert_eq!(SessionProgress::from_counts(1, 3).percentage, 33);
        assert_eq!(SessionProgress::from_counts(2, 3).percentage, 67);
        assert_eq!(SessionProgress::from_counts(8, 8).percentage, 100);
    }

    #[test]
    fn completion_flag_needs_every_topic() {
        assert!(SessionProgress::from_counts(8, 8).is_complete());
        assert!(!SessionProgress::from_counts(7, 8).is_complete());
        assert!(!SessionProgress::from_counts(0, 0).is_complete());
    }
}
