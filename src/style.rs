//! Visual styles for menu elements.
//!
//! A [`Style`] is an open set of bit flags over a `u32`: each base attribute
//! (weight, decoration, foreground color, background color) occupies one
//! distinct bit. Composition is bitwise OR, membership is bitwise AND.
//! Any raw `u32` is a valid style; bits with no named constant are simply
//! ignored when the style is mapped to terminal attributes.
//!
//! Structure:
//! - Constants: named flags (documented bit layout)
//! - Operators: `|` composition, `contains` membership
//! - Rendering: mapping to `crossterm::style::ContentStyle`

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crossterm::style::{Attribute, Color, ContentStyle};

/// A composable set of visual attribute flags.
///
/// Styles are plain values: freely copied, never owned by the element
/// rendering them. `Style::REGULAR` (all bits clear) means "no styling".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style(u32);

// ============================================================================
// FLAG CONSTANTS
// ============================================================================
//
// Bit layout: 0..=7 attributes, 8..=22 foreground colors, 23..=30
// background colors. When several color bits of the same kind are set,
// the last one in declaration order wins at render time.

impl Style {
    /// No styling at all.
    pub const REGULAR: Style = Style(0);

    // --- Attributes ---

    pub const BOLD: Style = Style(1 << 0);
    pub const DIMMED: Style = Style(1 << 1);
    pub const ITALIC: Style = Style(1 << 2);
    pub const UNDERSCORE: Style = Style(1 << 3);
    pub const DOUBLE_UNDERSCORE: Style = Style(1 << 4);
    pub const FLASHING: Style = Style(1 << 5);
    pub const INVERTED: Style = Style(1 << 6);
    pub const STRIKETHROUGH: Style = Style(1 << 7);

    // --- Foreground colors ---

    pub const BLACK: Style = Style(1 << 8);
    pub const RED: Style = Style(1 << 9);
    pub const GREEN: Style = Style(1 << 10);
    pub const YELLOW: Style = Style(1 << 11);
    pub const BLUE: Style = Style(1 << 12);
    pub const PURPLE: Style = Style(1 << 13);
    pub const LIGHTBLUE: Style = Style(1 << 14);
    pub const GRAY_BRIGHT: Style = Style(1 << 15);
    pub const RED_BRIGHT: Style = Style(1 << 16);
    pub const GREEN_BRIGHT: Style = Style(1 << 17);
    pub const YELLOW_BRIGHT: Style = Style(1 << 18);
    pub const BLUE_BRIGHT: Style = Style(1 << 19);
    pub const PURPLE_BRIGHT: Style = Style(1 << 20);
    pub const TURQUOISE: Style = Style(1 << 21);
    pub const WHITE_BRIGHT: Style = Style(1 << 22);

    // --- Background colors ---

    pub const BG_GRAY: Style = Style(1 << 23);
    pub const BG_RED: Style = Style(1 << 24);
    pub const BG_GREEN: Style = Style(1 << 25);
    pub const BG_YELLOW: Style = Style(1 << 26);
    pub const BG_BLUE: Style = Style(1 << 27);
    pub const BG_PURPLE: Style = Style(1 << 28);
    pub const BG_CYAN: Style = Style(1 << 29);
    pub const BG_WHITE: Style = Style(1 << 30);

    // --- Composites (unions of base bits) ---

    /// Highlight for the selected element: inverted and bold.
    pub const SELECTED: Style = Style(Style::INVERTED.0 | Style::BOLD.0);

    /// Underscore that also crosses the glyph body.
    pub const UNDERSCORE_INTERSECT: Style =
        Style(Style::UNDERSCORE.0 | Style::STRIKETHROUGH.0);
}

// ============================================================================
// OPERATORS
// ============================================================================

impl Style {
    /// Build a style from raw bits. Every `u32` is accepted; unknown bits
    /// are ignored at render time.
    pub const fn from_bits(bits: u32) -> Style {
        Style(bits)
    }

    /// The raw bit pattern.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when this style and `other` share at least one flag bit.
    ///
    /// For a single base flag this is plain membership; for a composite it
    /// answers "is any part of it present".
    pub const fn contains(self, other: Style) -> bool {
        self.0 & other.0 != 0
    }

    /// True when no flags are set.
    pub const fn is_regular(self) -> bool {
        self.0 == 0
    }
}

/// Composition: the union of both flag sets. Commutative and associative.
impl BitOr for Style {
    type Output = Style;

    fn bitor(self, rhs: Style) -> Style {
        Style(self.0 | rhs.0)
    }
}

impl BitOrAssign for Style {
    fn bitor_assign(&mut self, rhs: Style) {
        self.0 |= rhs.0;
    }
}

/// Intersection of flag sets.
impl BitAnd for Style {
    type Output = Style;

    fn bitand(self, rhs: Style) -> Style {
        Style(self.0 & rhs.0)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Style({:#010x})", self.0)
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl Style {
    /// Map the flag set to a crossterm [`ContentStyle`].
    ///
    /// Unknown bits contribute nothing. When several foreground (or
    /// background) bits are set, the last declared color wins.
    pub fn content_style(self) -> ContentStyle {
        let mut cs = ContentStyle::default();

        if self.contains(Style::BOLD) {
            cs.attributes.set(Attribute::Bold);
        }
        if self.contains(Style::DIMMED) {
            cs.attributes.set(Attribute::Dim);
        }
        if self.contains(Style::ITALIC) {
            cs.attributes.set(Attribute::Italic);
        }
        if self.contains(Style::UNDERSCORE) {
            cs.attributes.set(Attribute::Underlined);
        }
        if self.contains(Style::DOUBLE_UNDERSCORE) {
            cs.attributes.set(Attribute::DoubleUnderlined);
        }
        if self.contains(Style::FLASHING) {
            cs.attributes.set(Attribute::SlowBlink);
        }
        if self.contains(Style::INVERTED) {
            cs.attributes.set(Attribute::Reverse);
        }
        if self.contains(Style::STRIKETHROUGH) {
            cs.attributes.set(Attribute::CrossedOut);
        }

        cs.foreground_color = self.foreground();
        cs.background_color = self.background();

        cs
    }

    /// Apply the style to a line of text, producing the ANSI-wrapped form.
    ///
    /// `REGULAR` (and any style made only of unknown bits) returns the text
    /// unchanged, so unstyled menus stay byte-clean.
    pub fn apply(self, text: &str) -> String {
        let cs = self.content_style();
        if cs == ContentStyle::default() {
            return text.to_string();
        }
        cs.apply(text).to_string()
    }

    fn foreground(self) -> Option<Color> {
        let mut color = None;
        if self.contains(Style::BLACK) {
            color = Some(Color::Black);
        }
        if self.contains(Style::RED) {
            color = Some(Color::DarkRed);
        }
        if self.contains(Style::GREEN) {
            color = Some(Color::DarkGreen);
        }
        if self.contains(Style::YELLOW) {
            color = Some(Color::DarkYellow);
        }
        if self.contains(Style::BLUE) {
            color = Some(Color::DarkBlue);
        }
        if self.contains(Style::PURPLE) {
            color = Some(Color::DarkMagenta);
        }
        if self.contains(Style::LIGHTBLUE) {
            color = Some(Color::DarkCyan);
        }
        if self.contains(Style::GRAY_BRIGHT) {
            color = Some(Color::DarkGrey);
        }
        if self.contains(Style::RED_BRIGHT) {
            color = Some(Color::Red);
        }
        if self.contains(Style::GREEN_BRIGHT) {
            color = Some(Color::Green);
        }
        if self.contains(Style::YELLOW_BRIGHT) {
            color = Some(Color::Yellow);
        }
        if self.contains(Style::BLUE_BRIGHT) {
            color = Some(Color::Blue);
        }
        if self.contains(Style::PURPLE_BRIGHT) {
            color = Some(Color::Magenta);
        }
        if self.contains(Style::TURQUOISE) {
            color = Some(Color::Cyan);
        }
        if self.contains(Style::WHITE_BRIGHT) {
            color = Some(Color::White);
        }
        color
    }

    fn background(self) -> Option<Color> {
        let mut color = None;
        if self.contains(Style::BG_GRAY) {
            color = Some(Color::DarkGrey);
        }
        if self.contains(Style::BG_RED) {
            color = Some(Color::Red);
        }
        if self.contains(Style::BG_GREEN) {
            color = Some(Color::Green);
        }
        if self.contains(Style::BG_YELLOW) {
            color = Some(Color::Yellow);
        }
        if self.contains(Style::BG_BLUE) {
            color = Some(Color::Blue);
        }
        if self.contains(Style::BG_PURPLE) {
            color = Some(Color::Magenta);
        }
        if self.contains(Style::BG_CYAN) {
            color = Some(Color::Cyan);
        }
        if self.contains(Style::BG_WHITE) {
            color = Some(Color::White);
        }
        color
    }
}

// ============================================================================
// TESTS
// ============================================================================
