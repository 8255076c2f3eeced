use nom::branch::alt;
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::char;
use nom::combinator::{map, map_res};
use nom::sequence::preceded;
use nom::{IResult, Parser};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::hash::{Hash, Hasher};

fn default_one() -> f32 {
    1.0
}

fn is_one(num: &f32) -> bool {
    *num == 1.0
}

/// An RGBA color as consumed by the drawable styles.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_one", default = "default_one")]
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 1.0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 1.0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Returns the same color with its alpha replaced by `opacity`, clamped to `0..=1`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: if opacity.is_nan() { 1.0 } else { opacity.clamp(0.0, 1.0) },
            ..self
        }
    }

    /// Parses a whole `#RRGGBB` or `#RGB` string, ignoring surrounding
    /// whitespace.
    pub fn from_hex(s: &str) -> Option<Color> {
        match parse_color(s.trim()) {
            Ok(("", color)) => Some(color),
            _ => None,
        }
    }
}

fn hex_byte(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), hex_byte).parse(input)
}

fn hex_short(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, is_hex_digit), |digit: &str| {
        hex_byte(&digit.repeat(2))
    })
    .parse(input)
}

fn hex_color_6(input: &str) -> IResult<&str, Color> {
    map((hex_primary, hex_primary, hex_primary), |(r, g, b)| {
        Color::rgb(r, g, b)
    })
    .parse(input)
}

fn hex_color_3(input: &str) -> IResult<&str, Color> {
    map((hex_short, hex_short, hex_short), |(r, g, b)| Color::rgb(r, g, b)).parse(input)
}

/// Parses a hex color (e.g., "#FF0000" or "#F00").
pub fn parse_color(input: &str) -> IResult<&str, Color> {
    preceded(char('#'), alt((hex_color_6, hex_color_3))).parse(input)
}

/// Formats as `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_one(&self.a) {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "default_one")]
                a: f32,
            },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::from_hex(&s)
                .ok_or_else(|| de::Error::custom(format!("invalid hex color '{}'", s))),
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}
