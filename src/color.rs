/// Resolve a named model color (palette entries, port/link colors) to RGB.
///
/// The diagram model stores colors as names; only the renderer needs actual
/// channel values. Also accepts `#rrggbb` hex strings.
pub fn parse_color(val: &str) -> Option<(u8, u8, u8)> {
    let val = val.trim();
    if let Some(hex) = val.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some((r, g, b));
        }
        return None;
    }

    match val.to_ascii_lowercase().as_str() {
        "white" => Some((0xff, 0xff, 0xff)),
        "black" => Some((0x00, 0x00, 0x00)),
        "red" => Some((0xff, 0x00, 0x00)),
        "darkred" => Some((0x8b, 0x00, 0x00)),
        "green" => Some((0x00, 0xff, 0x00)),
        "darkgreen" => Some((0x00, 0x64, 0x00)),
        "blue" => Some((0x00, 0x00, 0xff)),
        "darkblue" => Some((0x00, 0x00, 0x8b)),
        "cyan" => Some((0x00, 0xff, 0xff)),
        "darkcyan" => Some((0x00, 0x8b, 0x8b)),
        "magenta" => Some((0xff, 0x00, 0xff)),
        "darkmagenta" => Some((0x8b, 0x00, 0x8b)),
        "yellow" => Some((0xff, 0xff, 0x00)),
        "gray" | "grey" => Some((0x80, 0x80, 0x80)),
        _ => None,
    }
}
