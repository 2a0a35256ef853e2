use super::styles::NumberFormat;

pub const DEFAULT_BULLET: &str = "\u{2022}";

const ROMAN_TABLE: &[(u32, &str)] = &[
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// Render a counter value in the given list format.
///
/// Bullets have no value; callers take the glyph from the level template.
pub fn render_value(value: u32, format: &NumberFormat) -> String {
    match format {
        NumberFormat::Decimal | NumberFormat::Other(_) => value.to_string(),
        NumberFormat::DecimalZero => format!("{value:02}"),
        NumberFormat::LowerLetter => to_letters(value, b'a'),
        NumberFormat::UpperLetter => to_letters(value, b'A'),
        NumberFormat::LowerRoman => to_roman(value),
        NumberFormat::UpperRoman => to_roman(value).to_uppercase(),
        NumberFormat::Bullet | NumberFormat::None => String::new(),
    }
}

/// Lowercase subtractive Roman numeral. Zero has no numeral and stays decimal.
pub fn to_roman(mut n: u32) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut result = String::new();
    for &(value, numeral) in ROMAN_TABLE {
        while n >= value {
            result.push_str(numeral);
            n -= value;
        }
    }
    result
}

/// `1 -> a`, `26 -> z`, `27 -> aa`.
fn to_letters(value: u32, base: u8) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut n = value - 1;
    let mut result = String::new();
    loop {
        result.insert(0, (base + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

/// Bullet glyph for a level template.
///
/// Symbol-font bullets are stored as private-use code points (U+F0xx); map the
/// common ones back to their Unicode shapes.
pub fn bullet_glyph(template: Option<&str>) -> String {
    let glyph: String = template
        .unwrap_or_default()
        .trim()
        .chars()
        .map(|c| {
            let cp = c as u32;
            if (0xF000..=0xF0FF).contains(&cp) {
                symbol_to_unicode(cp - 0xF000).unwrap_or(c)
            } else {
                c
            }
        })
        .collect();

    if glyph.is_empty() {
        DEFAULT_BULLET.to_string()
    } else {
        glyph
    }
}

fn symbol_to_unicode(sym: u32) -> Option<char> {
    let mapped = match sym {
        0xB7 => '\u{2022}', // bullet
        0xA7 => '\u{25A0}', // black square
        0xA8 => '\u{25CB}', // white circle
        0xD8 => '\u{2666}', // diamond
        0x76 => '\u{221A}', // check mark
        0x6F => '\u{25CB}', // Courier New "o"
        _ => return char::from_u32(sym),
    };
    Some(mapped)
}
