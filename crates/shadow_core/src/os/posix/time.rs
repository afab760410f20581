use core::mem::MaybeUninit;

use crate::time::TimeStamp;

pub(crate) fn get_timestamp() -> TimeStamp {
    unsafe {
        let mut now = MaybeUninit::<libc::timespec>::zeroed();
        if libc::clock_gettime(libc::CLOCK_REALTIME, now.as_mut_ptr()) != 0 {
            return TimeStamp::default();
        }
        let now = now.assume_init();

        let mut tm = MaybeUninit::<libc::tm>::zeroed();
        if libc::gmtime_r(&now.tv_sec, tm.as_mut_ptr()).is_null() {
            return TimeStamp::default();
        }
        let tm = tm.assume_init();

        TimeStamp {
            year:        (tm.tm_year + 1900) as u16,
            month:       (tm.tm_mon + 1) as u8,
            day_of_week: tm.tm_wday as u8,
            day:         tm.tm_mday as u8,
            hour:        tm.tm_hour as u8,
            minute:      tm.tm_min as u8,
            second:      tm.tm_sec as u8,
            millisecond: (now.tv_nsec / 1_000_000) as u16,
        }
    }
}
