// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Formats a duration in seconds into a human-readable `MM:SS` string.
///
/// This is used for the playback time label, the track list and the
/// duration pickers. Minutes are not wrapped into hours.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65), "01:05");
/// assert_eq!(format_time(3600), "60:00");
/// ```
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Parses either `MM:SS` or a plain number of seconds.
///
/// Returns `None` for anything else, including seconds of 60 or more in the
/// `MM:SS` form.
pub(crate) fn parse_time(text: &str) -> Option<u64> {
    let text = text.trim();

    match text.split_once(':') {
        Some((mins, secs)) => {
            let mins: u64 = mins.parse().ok()?;
            let secs: u64 = secs.parse().ok()?;
            (secs < 60).then_some(mins * 60 + secs)
        }
        None => text.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(1200), "20:00");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn parse_time_accepts_both_forms() {
        assert_eq!(parse_time("01:05"), Some(65));
        assert_eq!(parse_time(" 90 "), Some(90));
        assert_eq!(parse_time("1:60"), None);
        assert_eq!(parse_time("abc"), None);
        assert_eq!(parse_time("-3"), None);
    }
}
