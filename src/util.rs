//! Pure display helpers. No state, no dependencies on the slices.

use chrono::NaiveDate;
use rand::seq::IndexedRandom;

/// Participants shown before the list is truncated with "and other".
pub const VISIBLE_PARTICIPANTS_COUNT: usize = 4;

/// Join a participants list for display, truncating long casts.
pub fn participants_line(participants: &[String]) -> String {
    if participants.is_empty() {
        return "Unknown".to_string();
    }
    if participants.len() > VISIBLE_PARTICIPANTS_COUNT {
        return format!(
            "{} and other",
            participants[..VISIBLE_PARTICIPANTS_COUNT].join(", ")
        );
    }
    participants.join(", ")
}

/// Format a score with a decimal comma, always one fractional digit.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}").replace('.', ",")
}

/// Format a run time in minutes as `"1h 39m"`.
pub fn format_run_time(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Human-readable date, e.g. `"March 28, 2014"`.
pub fn format_date_human(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Machine-readable date, day precision.
pub fn format_date_machine(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Verbal bucket for a 0–10 score.
pub fn rating_description(score: f64) -> &'static str {
    match score {
        s if s < 3.0 => "Bad",
        s if s < 5.0 => "Normal",
        s if s < 8.0 => "Good",
        s if s < 10.0 => "Very good",
        _ => "Awesome",
    }
}

/// Pick up to `count` distinct random elements, preserving nothing of
/// the input order.
pub fn sample_random_elements<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    let mut rng = rand::rng();
    items
        .choose_multiple(&mut rng, count.min(items.len()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participants_line_handles_empty_and_short_lists() {
        assert_eq!(participants_line(&[]), "Unknown");
        let two = vec!["A".to_string(), "B".to_string()];
        assert_eq!(participants_line(&two), "A, B");
    }

    #[test]
    fn participants_line_truncates_long_lists() {
        let names: Vec<String> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(participants_line(&names), "A, B, C, D and other");
    }

    #[test]
    fn format_score_uses_decimal_comma() {
        assert_eq!(format_score(8.9), "8,9");
        assert_eq!(format_score(7.0), "7,0");
    }

    #[test]
    fn format_run_time_splits_hours_and_minutes() {
        assert_eq!(format_run_time(99), "1h 39m");
        assert_eq!(format_run_time(60), "1h 0m");
        assert_eq!(format_run_time(45), "0h 45m");
    }

    #[test]
    fn date_formats() {
        let date = NaiveDate::from_ymd_opt(2014, 3, 28).unwrap();
        assert_eq!(format_date_human(date), "March 28, 2014");
        assert_eq!(format_date_machine(date), "2014-03-28");
    }

    #[test]
    fn rating_description_buckets() {
        assert_eq!(rating_description(1.0), "Bad");
        assert_eq!(rating_description(3.0), "Normal");
        assert_eq!(rating_description(5.0), "Good");
        assert_eq!(rating_description(8.0), "Very good");
        assert_eq!(rating_description(10.0), "Awesome");
    }

    #[test]
    fn sample_never_exceeds_input() {
        let items = vec![1, 2, 3];
        assert_eq!(sample_random_elements(&items, 10).len(), 3);
        assert_eq!(sample_random_elements(&items, 2).len(), 2);
    }
}
