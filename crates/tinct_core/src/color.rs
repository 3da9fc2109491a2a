//! HSL ↔ hex color conversion.
//!
//! Both directions work on the string encodings the theme uses: HSL triples
//! like `"221.2 83.2% 53.3%"` and hex colors like `"#2563eb"`. Parsing is
//! permissive; malformed input degrades to black instead of failing. Callers
//! that need a hard check validate first ([is_hex_color],
//! [crate::ThemeConfig::validate]).

/// Convert an HSL triple string to a `#rrggbb` hex string.
pub fn hsl_to_hex(hsl: &str) -> String {
    let (r, g, b) = hsl_to_rgb(hsl);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Convert an HSL triple string to RGB channels.
///
/// Standard HSL→RGB: chroma `C = (1 - |2L-1|)·S`, intermediate
/// `X = C·(1 - |((H/60) mod 2) - 1|)`, base channels chosen by the 60°
/// sextant `H` falls into, offset `m = L - C/2` added to each. Hue outside
/// [0, 360) falls through the sextant match to the achromatic base.
pub fn hsl_to_rgb(hsl: &str) -> (u8, u8, u8) {
    let mut tokens = hsl.split_whitespace();
    let h = parse_component(tokens.next());
    let s = parse_component(tokens.next());
    let l = parse_component(tokens.next());

    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..1.0 / 6.0).contains(&h) {
        (c, x, 0.0)
    } else if (1.0 / 6.0..1.0 / 3.0).contains(&h) {
        (x, c, 0.0)
    } else if (1.0 / 3.0..0.5).contains(&h) {
        (0.0, c, x)
    } else if (0.5..2.0 / 3.0).contains(&h) {
        (0.0, x, c)
    } else if (2.0 / 3.0..5.0 / 6.0).contains(&h) {
        (x, 0.0, c)
    } else if (5.0 / 6.0..1.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    (channel(r + m), channel(g + m), channel(b + m))
}

/// Convert a `#RRGGBB` hex string to an HSL triple string, components
/// rounded to the nearest integer.
pub fn hex_to_hsl(hex: &str) -> String {
    let (r, g, b) = hex_channels(hex).unwrap_or((0, 0, 0));
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        // Achromatic: no hue, no saturation
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    format!(
        "{} {}% {}%",
        (h * 360.0).round(),
        (s * 100.0).round(),
        (l * 100.0).round()
    )
}

/// True for exactly `#RRGGBB` (leading `#`, six hex digits). The gate the
/// editor applies before feeding typed input to [hex_to_hsl].
pub fn is_hex_color(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(|b| b.is_ascii_hexdigit())
}

/// Parse one HSL component; missing or malformed tokens become NaN so the
/// degenerate value propagates instead of panicking.
fn parse_component(token: Option<&str>) -> f64 {
    token
        .map(|t| t.trim_end_matches('%'))
        .and_then(|t| t.parse().ok())
        .unwrap_or(f64::NAN)
}

/// Scale a [0,1] channel to a byte. `as u8` saturates and maps NaN to 0.
fn channel(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

fn hex_channels(hex: &str) -> Option<(u8, u8, u8)> {
    let r = u8::from_str_radix(hex.get(1..3)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(3..5)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(5..7)?, 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl_components(hsl: &str) -> (i64, i64, i64) {
        let parts: Vec<i64> = hsl
            .split_whitespace()
            .map(|t| t.trim_end_matches('%').parse().unwrap())
            .collect();
        (parts[0], parts[1], parts[2])
    }

    #[test]
    fn white_and_black() {
        assert_eq!(hsl_to_hex("0 0% 100%"), "#ffffff");
        assert_eq!(hsl_to_hex("0 0% 0%"), "#000000");
    }

    #[test]
    fn pure_red_to_hsl() {
        assert_eq!(hex_to_hsl("#ff0000"), "0 100% 50%");
    }

    #[test]
    fn blue_preset_primary() {
        // 221.2° at 83.2%/53.3% is a mid blue
        assert_eq!(hsl_to_hex("221.2 83.2% 53.3%"), "#2563eb");
    }

    #[test]
    fn hex_output_shape() {
        for hsl in ["0 0% 100%", "120 100% 25%", "300 40% 60%", "47.9 95.8% 53.1%"] {
            let hex = hsl_to_hex(hsl);
            assert!(is_hex_color(&hex), "bad hex {hex} for {hsl}");
        }
    }

    #[test]
    fn hsl_output_ranges() {
        for hex in ["#000000", "#ffffff", "#2563eb", "#a1b2c3", "#0f0f0f", "#ff00ff"] {
            let (h, s, l) = hsl_components(&hex_to_hsl(hex));
            assert!((0..=360).contains(&h), "hue {h} out of range for {hex}");
            assert!((0..=100).contains(&s), "saturation {s} out of range for {hex}");
            assert!((0..=100).contains(&l), "lightness {l} out of range for {hex}");
        }
    }

    #[test]
    fn round_trip_within_one_unit() {
        for hex in ["#2563eb", "#9ece6a", "#f7768e", "#1a1b26", "#e0af68", "#7dcfff"] {
            let first = hex_to_hsl(hex);
            let second = hex_to_hsl(&hsl_to_hex(&first));
            let (h1, s1, l1) = hsl_components(&first);
            let (h2, s2, l2) = hsl_components(&second);
            assert!((h1 - h2).abs() <= 1, "{hex}: hue drift {h1} vs {h2}");
            assert!((s1 - s2).abs() <= 1, "{hex}: saturation drift {s1} vs {s2}");
            assert!((l1 - l2).abs() <= 1, "{hex}: lightness drift {l1} vs {l2}");
        }
    }

    #[test]
    fn malformed_hsl_degrades_to_black() {
        assert_eq!(hsl_to_hex("garbage"), "#000000");
        assert_eq!(hsl_to_hex(""), "#000000");
        assert_eq!(hsl_to_hex("one two three"), "#000000");
    }

    #[test]
    fn malformed_hex_degrades_to_black_hsl() {
        assert_eq!(hex_to_hsl("nope"), "0 0% 0%");
        assert_eq!(hex_to_hsl("#12345"), "0 0% 0%");
        assert_eq!(hex_to_hsl("#gggggg"), "0 0% 0%");
    }

    #[test]
    fn is_hex_color_gate() {
        assert!(is_hex_color("#2563eb"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(!is_hex_color("2563eb"));
        assert!(!is_hex_color("#25 3eb"));
        assert!(!is_hex_color("#2563e"));
        assert!(!is_hex_color("#2563ebf"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn gray_is_achromatic() {
        let (h, s, _) = hsl_components(&hex_to_hsl("#808080"));
        assert_eq!(h, 0);
        assert_eq!(s, 0);
    }
}
