//! Command classification and parsing.
//!
//! Every completed input line is either a palette command (fixed `P:`
//! prefix) or a single-color command; there is no third form. Parsing is
//! all-or-nothing: a command only exists once the whole line has been
//! validated, so a rejected line leaves nothing to roll back.

use heapless::Vec;

use crate::color::Rgb;

/// Maximum number of colors in a palette command (7x7 grid)
pub const MAX_PALETTE: usize = 49;

/// Colors committed by a palette command, in wire order
pub type PaletteColors = Vec<Rgb, MAX_PALETTE>;

/// Reasons a line fails to parse as a command
///
/// These are surfaced to the logger only; nothing is written back on the
/// serial wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Palette count field is not followed by a `:` delimiter
    MissingDelimiter,
    /// Palette count is outside [1, 49]
    CountOutOfRange,
    /// Fewer than 6 bytes remain for a declared color token
    ShortHexToken,
    /// Single-color line does not have exactly three fields
    WrongFieldCount,
    /// Single-color field is not a decimal integer
    NotAnInteger,
}

/// A successfully parsed command line
///
/// Channel values are raw wire values; per-channel calibration is applied
/// when the command is committed to the render state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `P:<n>:<hex6>:...` - render n contiguous color blocks
    Palette(PaletteColors),
    /// `<r>,<g>,<b>` - fill the whole panel with one color
    Single(Rgb),
}

impl Command {
    /// Parse one terminator-stripped line
    ///
    /// Dispatch is a fixed two-byte prefix check: lines starting with
    /// `P:` are palette commands, everything else is tried as a
    /// single-color command.
    pub fn parse(line: &[u8]) -> Result<Self, CommandError> {
        if line.starts_with(b"P:") {
            parse_palette(&line[2..])
        } else {
            parse_single(line)
        }
    }
}

/// Parse the body of a palette command (after the `P:` prefix)
fn parse_palette(body: &[u8]) -> Result<Command, CommandError> {
    let delim = body
        .iter()
        .position(|&b| b == b':')
        .ok_or(CommandError::MissingDelimiter)?;

    let count = parse_count(&body[..delim]);
    if count < 1 || count > MAX_PALETTE {
        return Err(CommandError::CountOutOfRange);
    }

    let mut rest = &body[delim + 1..];
    let mut colors = PaletteColors::new();
    for _ in 0..count {
        if rest.len() < 6 {
            return Err(CommandError::ShortHexToken);
        }
        let color = Rgb::new(
            hex_byte(rest[0], rest[1]),
            hex_byte(rest[2], rest[3]),
            hex_byte(rest[4], rest[5]),
        );
        // Cannot overflow: count is bounded by MAX_PALETTE
        let _ = colors.push(color);

        rest = &rest[6..];
        // Token separators are optional; tokens may run together
        if rest.first() == Some(&b':') {
            rest = &rest[1..];
        }
    }

    Ok(Command::Palette(colors))
}

/// Parse a `<r>,<g>,<b>` single-color line
///
/// Exactly three comma-separated decimal fields; values of any magnitude
/// are accepted and clamped to [0, 255].
fn parse_single(line: &[u8]) -> Result<Command, CommandError> {
    let mut channels = [0u8; 3];
    let mut fields = 0;

    for field in line.split(|&b| b == b',') {
        if fields == 3 {
            return Err(CommandError::WrongFieldCount);
        }
        let value = core::str::from_utf8(field)
            .ok()
            .and_then(|s| s.trim().parse::<i32>().ok())
            .ok_or(CommandError::NotAnInteger)?;
        channels[fields] = value.clamp(0, 255) as u8;
        fields += 1;
    }

    if fields != 3 {
        return Err(CommandError::WrongFieldCount);
    }

    Ok(Command::Single(Rgb::new(
        channels[0], channels[1], channels[2],
    )))
}

/// atoi-style count parsing: fold leading decimal digits, stop at the
/// first non-digit. No digits yields 0, which the range check rejects.
fn parse_count(field: &[u8]) -> usize {
    let mut count = 0usize;
    for &b in field {
        if !b.is_ascii_digit() {
            break;
        }
        count = count * 10 + (b - b'0') as usize;
        if count > MAX_PALETTE {
            // Already out of range; avoid overflow on absurd fields
            break;
        }
    }
    count
}

/// Decode two hex digits into a byte, case-insensitive.
///
/// Invalid digits contribute zero bits instead of rejecting the token,
/// matching the lenient decoding the protocol has always had.
fn hex_byte(hi: u8, lo: u8) -> u8 {
    (hex_nibble(hi) << 4) | hex_nibble(lo)
}

fn hex_nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'A'..=b'F' => b - b'A' + 10,
        b'a'..=b'f' => b - b'a' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_two_colors() {
        let cmd = Command::parse(b"P:2:FF0000:00FF00").unwrap();
        let Command::Palette(colors) = cmd else {
            panic!("expected palette");
        };
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], Rgb::new(255, 0, 0));
        assert_eq!(colors[1], Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_palette_lowercase_hex() {
        let cmd = Command::parse(b"P:1:a1b2c3").unwrap();
        assert_eq!(
            cmd,
            Command::Palette(PaletteColors::from_slice(&[Rgb::new(0xA1, 0xB2, 0xC3)]).unwrap())
        );
    }

    #[test]
    fn test_palette_tokens_may_run_together() {
        // The separator after each 6-digit token is optional
        let cmd = Command::parse(b"P:2:FF000000FF00").unwrap();
        let Command::Palette(colors) = cmd else {
            panic!("expected palette");
        };
        assert_eq!(colors[0], Rgb::new(255, 0, 0));
        assert_eq!(colors[1], Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_palette_count_zero_rejected() {
        assert_eq!(
            Command::parse(b"P:0:FF0000"),
            Err(CommandError::CountOutOfRange)
        );
    }

    #[test]
    fn test_palette_count_over_max_rejected() {
        assert_eq!(
            Command::parse(b"P:50:FF0000"),
            Err(CommandError::CountOutOfRange)
        );
    }

    #[test]
    fn test_palette_empty_count_rejected() {
        assert_eq!(
            Command::parse(b"P::FF0000"),
            Err(CommandError::CountOutOfRange)
        );
    }

    #[test]
    fn test_palette_missing_delimiter_rejected() {
        assert_eq!(Command::parse(b"P:3"), Err(CommandError::MissingDelimiter));
    }

    #[test]
    fn test_palette_short_token_rejected() {
        assert_eq!(
            Command::parse(b"P:2:FF0000:00FF"),
            Err(CommandError::ShortHexToken)
        );
    }

    #[test]
    fn test_palette_count_with_trailing_junk() {
        // atoi semantics: "5x" parses as 5
        let cmd = Command::parse(b"P:2x:FF0000:00FF00").unwrap();
        let Command::Palette(colors) = cmd else {
            panic!("expected palette");
        };
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn test_palette_lenient_hex_decodes_zero_bits() {
        // 'G' and 'Z' are not hex digits; they contribute 0 bits
        let cmd = Command::parse(b"P:1:GZFF0F").unwrap();
        let Command::Palette(colors) = cmd else {
            panic!("expected palette");
        };
        assert_eq!(colors[0], Rgb::new(0x00, 0xFF, 0x0F));
    }

    #[test]
    fn test_palette_full_grid() {
        let mut line = heapless::Vec::<u8, 510>::new();
        line.extend_from_slice(b"P:49").unwrap();
        for _ in 0..49 {
            line.extend_from_slice(b":112233").unwrap();
        }
        let cmd = Command::parse(&line).unwrap();
        let Command::Palette(colors) = cmd else {
            panic!("expected palette");
        };
        assert_eq!(colors.len(), 49);
    }

    #[test]
    fn test_single_basic() {
        assert_eq!(
            Command::parse(b"100,200,50"),
            Ok(Command::Single(Rgb::new(100, 200, 50)))
        );
    }

    #[test]
    fn test_single_clamps_out_of_range() {
        assert_eq!(
            Command::parse(b"300,-5,255"),
            Ok(Command::Single(Rgb::new(255, 0, 255)))
        );
    }

    #[test]
    fn test_single_allows_surrounding_whitespace() {
        assert_eq!(
            Command::parse(b" 1, 2 ,3"),
            Ok(Command::Single(Rgb::new(1, 2, 3)))
        );
    }

    #[test]
    fn test_single_wrong_field_count_rejected() {
        assert_eq!(Command::parse(b"1,2"), Err(CommandError::WrongFieldCount));
        assert_eq!(
            Command::parse(b"1,2,3,4"),
            Err(CommandError::WrongFieldCount)
        );
    }

    #[test]
    fn test_single_garbage_rejected() {
        assert_eq!(Command::parse(b"hello"), Err(CommandError::NotAnInteger));
        assert_eq!(Command::parse(b"1,2,x"), Err(CommandError::NotAnInteger));
        assert_eq!(Command::parse(b""), Err(CommandError::NotAnInteger));
    }

    #[test]
    fn test_single_overflowing_field_rejected() {
        // Does not fit in i32; dropped rather than clamped
        assert_eq!(
            Command::parse(b"99999999999,0,0"),
            Err(CommandError::NotAnInteger)
        );
    }
}
