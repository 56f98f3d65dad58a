/// Aggregated view of course progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseProgress {
    pub total: usize,
    pub completed: usize,
    pub percentage: u8,
    pub is_complete: bool,
}

impl CourseProgress {
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        let completed = completed.min(total);
        Self {
            total,
            completed,
            percentage: percentage(completed, total),
            is_complete: total > 0 && completed == total,
        }
    }
}

/// `round(100 * completed / total)` with halves rounded up; 0 for an empty course.
#[must_use]
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let rounded = (completed * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_course_is_zero_percent() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 0), 0);
        assert!(!CourseProgress::new(0, 0).is_complete);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 200), 1);
        assert_eq!(percentage(1, 201), 0);
    }

    #[test]
    fn full_completion_is_hundred() {
        let progress = CourseProgress::new(4, 4);
        assert_eq!(progress.percentage, 100);
        assert!(progress.is_complete);
    }

    #[test]
    fn overcounting_is_clamped() {
        assert_eq!(percentage(9, 4), 100);
        assert_eq!(CourseProgress::new(9, 4).completed, 4);
    }
}
