/// Smallest value a C `int` can hold.
pub const MIN: f64 = -2147483648.0;
/// Largest value a C `int` can hold.
pub const MAX: f64 = 2147483647.0;

/// Clamps into the signed 32-bit range instead of wrapping.
pub fn saturate(number: f64) -> f64 {
    if number < MIN {
        MIN
    } else if number > MAX {
        MAX
    } else {
        number
    }
}
