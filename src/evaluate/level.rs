pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

// Lower bounds of levels 2..=5. A percentage equal to a bound takes the higher level.
const THRESHOLDS: [f64; 4] = [15.0, 30.0, 50.0, 70.0];

pub fn percentage_to_level(percentage: f64) -> u8 {
    let below = THRESHOLDS
        .iter()
        .position(|threshold| percentage < *threshold);
    match below {
        Some(index) => MIN_LEVEL + index as u8,
        None => MAX_LEVEL,
    }
}
