//! Calendar predicates

/// Check whether a year is a leap year in the Gregorian calendar
///
/// Divisible by 4 and not by 100, or divisible by 400.
pub const fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
