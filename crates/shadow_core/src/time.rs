//! Wall-clock timestamps, mainly used to tag log messages

use core::fmt::Display;
use crate::os;

/// UTC wall-clock time, with millisecond precision
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct TimeStamp {
    pub year        : u16,
    pub month       : u8,
    pub day_of_week : u8,
    pub day         : u8,
    pub hour        : u8,
    pub minute      : u8,
    pub second      : u8,
    pub millisecond : u16,
}

impl Display for TimeStamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}", self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond))
    }
}

/// Get the current UTC time
/// 
/// If the OS fails to provide the time, a zeroed timestamp is returned.
pub fn get_timestamp() -> TimeStamp {
    os::time::get_timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_fields() {
        let stamp = TimeStamp { year: 2024, month: 3, day_of_week: 2, day: 5, hour: 7, minute: 8, second: 9, millisecond: 42 };
        assert_eq!(stamp.to_string(), "2024-03-05 07:08:09.042");
    }

    #[test]
    fn current_timestamp_is_in_range() {
        let stamp = get_timestamp();
        assert!(stamp.year >= 2020);
        assert!((1..=12).contains(&stamp.month));
        assert!((1..=31).contains(&stamp.day));
        assert!(stamp.day_of_week < 7);
        assert!(stamp.hour < 24);
        assert!(stamp.minute < 60);
        // Leap seconds can show up as 60
        assert!(stamp.second <= 60);
        assert!(stamp.millisecond < 1000);
    }
}
