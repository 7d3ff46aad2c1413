/// Grams to the kilogram string stored in the event payload: divide by
/// 1000, round to 2 decimals (float formatting rounds ties to even), then
/// trim trailing zeros while keeping at least one fractional digit.
/// 4500 → "4.5", 7123 → "7.12", 7000 → "7.0".
pub fn grams_to_kg_str(grams: f64) -> String {
    let kg = grams / 1000.0;

    let mut s = format!("{:.2}", kg);
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }

    s
}
