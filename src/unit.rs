//! Code-unit abstraction over the two supported input widths.
//!
//! The scanner, decoders, and value builder are written once against this
//! trait and instantiated for both encodings:
//!
//! - `u8`: narrow input, one Latin-1 code unit per byte.
//! - `u16`: wide input, one UTF-16 code unit per element.
//!
//! Widening a `u8` unit to `u16` maps Latin-1 directly onto the first 256
//! UTF-16 code units, so string decoding can accumulate `u16` units for
//! either width and validate the result once at the end.

/// A single fixed-width unit of input text.
pub(crate) trait CodeUnit: Copy + Eq {
    /// The unit as a UTF-16 code unit.
    fn widen(self) -> u16;
}

impl CodeUnit for u8 {
    fn widen(self) -> u16 {
        u16::from(self)
    }
}

impl CodeUnit for u16 {
    fn widen(self) -> u16 {
        self
    }
}

/// The unit at `pos` as an ASCII byte, or `None` when out of range or
/// non-ASCII. All structurally significant characters of the grammar are
/// ASCII, so classification happens through this projection; non-ASCII
/// units only ever pass through verbatim inside strings and comments.
pub(crate) fn ascii_at<C: CodeUnit>(input: &[C], pos: usize) -> Option<u8> {
    let unit = input.get(pos)?.widen();
    if unit < 0x80 {
        Some(unit as u8)
    } else {
        None
    }
}
