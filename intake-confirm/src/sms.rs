//! Confirmation SMS composition.
//!
//! The body is a deterministic function of the participant's selected
//! date and timezone label, so a redelivered message composes the same
//! text.

use chrono::NaiveDate;

/// Fixed daily follow-up survey times (hour, minute), matching the
/// schedule the participant was promised during intake.
const FOLLOWUP_TIMES: [(u32, u32); 3] = [(9, 0), (13, 0), (17, 0)];

/// Build the confirmation SMS body: the selected date in long form and
/// the three daily survey times with the participant's timezone label.
pub fn format_confirmation_body(selected_date: NaiveDate, timezone: &str) -> String {
    let date_str = selected_date.format("%B %d, %Y").to_string();

    let time_parts: Vec<String> = FOLLOWUP_TIMES
        .iter()
        .map(|&(hour, minute)| {
            let period = if hour < 12 { "AM" } else { "PM" };
            let display_hour = match hour {
                0 => 12,
                1..=12 => hour,
                _ => hour - 12,
            };
            format!("{display_hour}:{minute:02} {period}")
        })
        .collect();

    let times_str = format!(
        "{}, and {}",
        time_parts[..time_parts.len() - 1].join(", "),
        time_parts[time_parts.len() - 1]
    );

    format!(
        "Thank you for participating in our study! \
         We received your selected follow-up date: {date_str}. \
         You will receive surveys at {times_str} ({timezone})."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_includes_date_times_and_timezone() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 5).unwrap();
        let body = format_confirmation_body(date, "US/Central");

        assert_eq!(
            body,
            "Thank you for participating in our study! \
             We received your selected follow-up date: September 05, 2026. \
             You will receive surveys at 9:00 AM, 1:00 PM, and 5:00 PM (US/Central)."
        );
    }

    #[test]
    fn composition_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(
            format_confirmation_body(date, "US/Eastern"),
            format_confirmation_body(date, "US/Eastern")
        );
    }
}
