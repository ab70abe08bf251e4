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

/// Formats a duration in seconds into a human-readable `M:SS` string.
///
/// Minutes are unpadded and seconds are zero-padded to two digits, so 65
/// seconds renders as `1:05`. This is used for displaying track positions
/// and total durations in the player interface.
///
/// # Arguments
///
/// * `total_seconds` - The duration to format, represented as a 64-bit integer.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// Parses a `M:SS` duration string into a number of seconds.
///
/// Catalog durations are authored as display strings (`"5:55"`); this is
/// the inverse of [`format_time`]. Malformed components parse as zero.
pub(crate) fn parse_duration(text: &str) -> u64 {
    match text.split_once(':') {
        Some((mins, secs)) => {
            let mins: u64 = mins.parse().unwrap_or(0);
            let secs: u64 = secs.parse().unwrap_or(0);
            mins * 60 + secs
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_unpadded() {
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(355), "5:55");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn parses_display_durations() {
        assert_eq!(parse_duration("5:55"), 355);
        assert_eq!(parse_duration("3:03"), 183);
        assert_eq!(parse_duration("8:02"), 482);
        assert_eq!(parse_duration("0:00"), 0);
    }

    #[test]
    fn parse_and_format_round_trip() {
        assert_eq!(format_time(parse_duration("6:30")), "6:30");
    }

    #[test]
    fn malformed_durations_parse_as_zero() {
        assert_eq!(parse_duration("nonsense"), 0);
        assert_eq!(parse_duration("x:y"), 0);
    }
}
