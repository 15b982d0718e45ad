static DIGITS: phf::Map<char, u32> = phf::phf_map! {
    '零' => 0,
    '〇' => 0,
    '一' => 1,
    '二' => 2,
    '两' => 2,
    '兩' => 2,
    '三' => 3,
    '四' => 4,
    '五' => 5,
    '六' => 6,
    '七' => 7,
    '八' => 8,
    '九' => 9,
};

static MULTIPLIERS: phf::Map<char, u32> = phf::phf_map! {
    '十' => 10,
    '百' => 100,
    '千' => 1000,
};

/// Converts a numeral token to a number.
///
/// Tokens starting with an ascii digit are read as a decimal number (up to
/// the first character that does not belong to one). Anything else is read
/// as a chinese numeral: a digit followed by a multiplier adds their product,
/// a lone multiplier counts once, the trailing digit is added as units.
/// Values above 9999 are not supported, tokens overflowing `u32` give `None`.
pub fn parse_number(token: &str) -> Option<f64> {
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        let end = token
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(token.len());
        return parse_decimal(&token[..end]);
    }

    let mut seen = false;
    let mut result: u32 = 0;
    let mut units = 0;
    for c in token.chars() {
        if let Some(multiplier) = MULTIPLIERS.get(&c) {
            let factor = if units == 0 { 1 } else { units };
            result = result.checked_add(factor * multiplier)?;
            units = 0;
            seen = true;
        } else if let Some(digit) = DIGITS.get(&c) {
            units = *digit;
            seen = true;
        }
    }

    let value = result.checked_add(units)?;
    seen.then_some(f64::from(value))
}

// "1.2.3" parses as far as it is a number, like "1.2"
fn parse_decimal(s: &str) -> Option<f64> {
    s.parse().ok().or_else(|| {
        let mut parts = s.splitn(3, '.');
        let int = parts.next()?;
        match parts.next() {
            Some(frac) if !frac.is_empty() => format!("{int}.{frac}").parse().ok(),
            _ => int.parse().ok(),
        }
    })
}
