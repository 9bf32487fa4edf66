/// Clamp `value` into `[min, max]`, checking the upper bound first.
///
/// Unlike [`Ord::clamp`] this never panics when `min > max`; `min` wins.
pub fn check_bounds<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let upper = if value > max { max } else { value };
    if upper < min { min } else { upper }
}

pub(crate) fn mul_div255_u32(x: u32, y: u32) -> u32 {
    (x * y + 127) / 255
}

pub(crate) fn div_round(num: u32, den: u32) -> u32 {
    if den == 0 { 0 } else { (num + den / 2) / den }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
