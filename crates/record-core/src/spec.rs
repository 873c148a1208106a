//! Field type specifications and the type string parser.
//!
//! A field is declared with a compact type string of the form
//! `<code>[':' <options>]`:
//!
//! | Code | Options            | Example     | Meaning                          |
//! |------|--------------------|-------------|----------------------------------|
//! | `i`  | `<min>-<max>`      | `i:1-100`   | integer in `[min, max]`          |
//! | `f`  | `<min>-<max>`      | `f:0.5-2.5` | float in `[min, max)`            |
//! | `t`  | `<amount><unit>`   | `t:4-6w`    | words (`w`) or sentences (`s`)   |
//! | `p`  | `<width>*<height>` | `p:400*300` | placeholder image URL            |
//!
//! Every check happens here, at parse time. A [`FieldSpec`] that exists is
//! always valid, so generation from it cannot fail.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static INT_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)-(\d+)$").expect("valid int range regex"));

static FLOAT_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)-((?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)$")
        .expect("valid float range regex")
});

static TEXT_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:-(\d+))?$").expect("valid text amount regex"));

static IMAGE_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\*(\d+)$").expect("valid image size regex"));

/// Largest word or sentence count a text field may declare.
pub const MAX_TEXT_AMOUNT: usize = 10_000;

/// Error raised when a type string cannot be turned into a [`FieldSpec`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecError {
    /// Leading type code is not one of `i`, `f`, `t`, `p`
    #[error("Type '{0}' not supported in model declaration, expected one of i, f, t, p")]
    UnsupportedType(String),

    /// Integer options do not match `<min>-<max>`
    #[error("Options '{0}' for integer type are invalid, min-max expected")]
    InvalidIntOptions(String),

    /// Float options do not match `<min>-<max>`
    #[error("Options '{0}' for float type are invalid, min-max expected")]
    InvalidFloatOptions(String),

    /// Text unit is missing or not one of `w`, `s`
    #[error("Unit '{0}' is invalid for text length, use s(entences) or w(ords)")]
    InvalidTextUnit(String),

    /// Text amount is neither a fixed number nor a range
    #[error("Options '{0}' for text type are invalid, range or fixed number expected")]
    InvalidTextOptions(String),

    /// Image options do not match `<width>*<height>`
    #[error("Options '{0}' for image type are invalid, width*height expected")]
    InvalidImageOptions(String),

    /// A declared range has `min > max`
    #[error("Range '{0}' is inverted, min must not exceed max")]
    InvertedRange(String),

    /// A field of a model carries an invalid type string
    #[error("Invalid type '{type_string}' for field '{field}'")]
    InvalidField {
        field: String,
        type_string: String,
        source: Box<SpecError>,
    },

    /// The same field name is declared twice in one model
    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),
}

/// Integer range, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntSpec {
    min: i64,
    max: i64,
}

impl IntSpec {
    /// Create an integer range, rejecting `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, SpecError> {
        if min > max {
            return Err(SpecError::InvertedRange(format!("{min}-{max}")));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

impl Default for IntSpec {
    fn default() -> Self {
        Self {
            min: 0,
            max: i64::MAX,
        }
    }
}

/// Float range, sampled as `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatSpec {
    min: f64,
    max: f64,
}

impl FloatSpec {
    /// Create a float range, rejecting non-finite bounds and `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, SpecError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SpecError::InvalidFloatOptions(format!("{min}-{max}")));
        }
        if min > max {
            return Err(SpecError::InvertedRange(format!("{min}-{max}")));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Default for FloatSpec {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// What a text field counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextUnit {
    Words,
    Sentences,
}

impl TextUnit {
    fn code(self) -> char {
        match self {
            TextUnit::Words => 'w',
            TextUnit::Sentences => 's',
        }
    }
}

/// Inclusive count range with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    min: usize,
    max: usize,
}

impl CountRange {
    pub fn new(min: usize, max: usize) -> Result<Self, SpecError> {
        if min > max {
            return Err(SpecError::InvertedRange(format!("{min}-{max}")));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

/// How many units a text field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    /// Exactly this many
    Fixed(usize),
    /// A count drawn uniformly from the range on every generation
    Range(CountRange),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Fixed(n) => write!(f, "{n}"),
            Amount::Range(range) => write!(f, "{}-{}", range.min, range.max),
        }
    }
}

/// Text made of pool words or pseudo sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpec {
    pub unit: TextUnit,
    pub amount: Amount,
}

/// Placeholder image dimensions, copied verbatim into the URL.
///
/// Only digit-ness is checked, so a zero width or height and leading zeros
/// are kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    width: String,
    height: String,
}

impl ImageSpec {
    /// Create image dimensions from two digit strings.
    pub fn new(width: &str, height: &str) -> Result<Self, SpecError> {
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(width) || !is_digits(height) {
            return Err(SpecError::InvalidImageOptions(format!("{width}*{height}")));
        }
        Ok(Self {
            width: width.to_string(),
            height: height.to_string(),
        })
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn height(&self) -> &str {
        &self.height
    }
}

/// Validated description of one field's type and generation constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldSpec {
    Int(IntSpec),
    Float(FloatSpec),
    Text(TextSpec),
    Image(ImageSpec),
}

impl FieldSpec {
    /// Short name of the variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldSpec::Int(_) => "int",
            FieldSpec::Float(_) => "float",
            FieldSpec::Text(_) => "text",
            FieldSpec::Image(_) => "image",
        }
    }
}

/// Renders the canonical type string, which parses back to the same spec.
impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSpec::Int(spec) if *spec == IntSpec::default() => write!(f, "i"),
            FieldSpec::Int(spec) => write!(f, "i:{}-{}", spec.min, spec.max),
            FieldSpec::Float(spec) if *spec == FloatSpec::default() => write!(f, "f"),
            FieldSpec::Float(spec) => write!(f, "f:{}-{}", spec.min, spec.max),
            FieldSpec::Text(spec) => write!(f, "t:{}{}", spec.amount, spec.unit.code()),
            FieldSpec::Image(spec) => write!(f, "p:{}*{}", spec.width, spec.height),
        }
    }
}

impl FromStr for FieldSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s)
    }
}

impl TryFrom<String> for FieldSpec {
    type Error = SpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_type(&value)
    }
}

impl From<FieldSpec> for String {
    fn from(spec: FieldSpec) -> Self {
        spec.to_string()
    }
}

/// Parse a type string such as `t:4-6w` into a [`FieldSpec`].
pub fn parse_type(type_string: &str) -> Result<FieldSpec, SpecError> {
    let (code, options) = match type_string.split_once(':') {
        Some((code, options)) => (code, Some(options)),
        None => (type_string, None),
    };

    match code {
        "i" => parse_int_options(options).map(FieldSpec::Int),
        "f" => parse_float_options(options).map(FieldSpec::Float),
        "t" => parse_text_options(options.unwrap_or_default()).map(FieldSpec::Text),
        "p" => parse_image_options(options.unwrap_or_default()).map(FieldSpec::Image),
        other => Err(SpecError::UnsupportedType(other.to_string())),
    }
}

fn parse_int_options(options: Option<&str>) -> Result<IntSpec, SpecError> {
    let Some(options) = options else {
        return Ok(IntSpec::default());
    };
    let invalid = || SpecError::InvalidIntOptions(options.to_string());

    let caps = INT_RANGE.captures(options).ok_or_else(invalid)?;
    let min: i64 = caps[1].parse().map_err(|_| invalid())?;
    let max: i64 = caps[2].parse().map_err(|_| invalid())?;
    IntSpec::new(min, max)
}

fn parse_float_options(options: Option<&str>) -> Result<FloatSpec, SpecError> {
    let Some(options) = options else {
        return Ok(FloatSpec::default());
    };
    let invalid = || SpecError::InvalidFloatOptions(options.to_string());

    let caps = FLOAT_RANGE.captures(options).ok_or_else(invalid)?;
    let min: f64 = caps[1].parse().map_err(|_| invalid())?;
    let max: f64 = caps[2].parse().map_err(|_| invalid())?;
    FloatSpec::new(min, max)
}

fn parse_text_options(options: &str) -> Result<TextSpec, SpecError> {
    // The unit is the last character, the amount everything before it.
    let mut chars = options.chars();
    let unit = match chars.next_back() {
        Some('w') => TextUnit::Words,
        Some('s') => TextUnit::Sentences,
        Some(other) => return Err(SpecError::InvalidTextUnit(other.to_string())),
        None => return Err(SpecError::InvalidTextUnit(String::new())),
    };
    let amount = chars.as_str();
    let invalid = || SpecError::InvalidTextOptions(options.to_string());

    let caps = TEXT_AMOUNT.captures(amount).ok_or_else(invalid)?;
    let count = |digits: &str| -> Result<usize, SpecError> {
        digits
            .parse::<usize>()
            .ok()
            .filter(|n| *n <= MAX_TEXT_AMOUNT)
            .ok_or_else(invalid)
    };
    let first = count(&caps[1])?;
    let amount = match caps.get(2) {
        None => Amount::Fixed(first),
        Some(max) => Amount::Range(CountRange::new(first, count(max.as_str())?)?),
    };

    Ok(TextSpec { unit, amount })
}

fn parse_image_options(options: &str) -> Result<ImageSpec, SpecError> {
    let invalid = || SpecError::InvalidImageOptions(options.to_string());

    let caps = IMAGE_SIZE.captures(options).ok_or_else(invalid)?;
    ImageSpec::new(&caps[1], &caps[2])
}
