//! Percent-style message formatting.
//!
//! Supports the `String.format` subset used in diagnostic messages. A
//! specifier has the shape `%[index$][flags][width][.precision]conversion`.
//!
//! | Conversion | Accepts | Output |
//! |---|---|---|
//! | `%s`, `%S` | anything | display form; precision truncates |
//! | `%d` | integers | decimal |
//! | `%f` | floats | fixed point, 6 digits unless a precision is given |
//! | `%e`, `%E` | floats | scientific, `1.234560e+03` |
//! | `%x`, `%X`, `%o` | integers | hex / octal (two's complement for negatives) |
//! | `%b`, `%B` | anything | the bool, or `true` for non-bool values |
//! | `%c`, `%C` | chars, integer code points | the char |
//! | `%%`, `%n` | - | `%`, newline |
//!
//! Argument selection: `%2$s` picks the second argument, `%<s` reuses the
//! previous one, anything else takes the next ordinary argument. Explicit
//! indices do not advance the ordinary position.
//!
//! Flags: `-` left-justify, `0` zero-pad, `+` and ` ` sign, `,` grouping,
//! `#` radix prefix. Uppercase conversions uppercase the whole field.
//! Width and precision are capped at [`MAX_FIELD_WIDTH`].
//!
//! Surplus arguments are ignored. Everything else is a [`FormatError`].

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;
use tracing::warn;

/// Largest accepted width or precision.
pub const MAX_FIELD_WIDTH: usize = u16::MAX as usize;

/// A single message argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) | Arg::UInt(_) => "integer",
            Arg::Float(_) => "float",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(v) => f.write_str(v),
            Arg::Int(v) => write!(f, "{v}"),
            Arg::UInt(v) => write!(f, "{v}"),
            Arg::Float(v) => write!(f, "{v}"),
            Arg::Bool(v) => write!(f, "{v}"),
            Arg::Char(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_arg_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value.into())
                }
            }
        )+
    };
}

impl_arg_from!(Int: i8, i16, i32, i64);
impl_arg_from!(UInt: u8, u16, u32, u64);
impl_arg_from!(Float: f32, f64);
impl_arg_from!(Bool: bool);
impl_arg_from!(Char: char);
impl_arg_from!(Str: String, &str);

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::UInt(value as u64)
    }
}

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        Arg::Int(value as i64)
    }
}

/// Errors raised while applying a format string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A specifier selected an argument that does not exist.
    #[error("no argument at index {index}")]
    MissingArgument { index: usize },

    /// The conversion character is not supported.
    #[error("unknown format conversion '%{conversion}' at byte {position}")]
    UnknownConversion { conversion: char, position: usize },

    /// The argument cannot be rendered with the conversion.
    #[error("format specifier '%{conversion}' cannot be applied to {arg}")]
    TypeMismatch { conversion: char, arg: &'static str },

    /// An explicit argument index is zero or unparsable.
    #[error("invalid argument index at byte {position}")]
    InvalidIndex { position: usize },

    /// A width is unparsable or larger than [`MAX_FIELD_WIDTH`].
    #[error("invalid width at byte {position}")]
    InvalidWidth { position: usize },

    /// A `.` was not followed by digits, or the precision is larger than
    /// [`MAX_FIELD_WIDTH`].
    #[error("invalid precision at byte {position}")]
    InvalidPrecision { position: usize },

    /// `-` or `0` was given without a width.
    #[error("flag requires a width at byte {position}")]
    MissingWidth { position: usize },

    /// `-` and `0` were both given.
    #[error("conflicting '-' and '0' flags at byte {position}")]
    ConflictingFlags { position: usize },

    /// The flag does not apply to the conversion.
    #[error("flag '{flag}' cannot be used with '%{conversion}'")]
    FlagMismatch { flag: char, conversion: char },

    /// The conversion does not take a precision.
    #[error("precision cannot be used with '%{conversion}'")]
    UnexpectedPrecision { conversion: char },

    /// The format string ends in the middle of a specifier.
    #[error("dangling '%' at end of format string")]
    Dangling,
}

#[derive(Debug, Default, Clone, Copy)]
struct Flags {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    group: bool,
    alternate: bool,
}

impl Flags {
    fn set(&self) -> impl Iterator<Item = char> {
        [
            (self.left, '-'),
            (self.zero, '0'),
            (self.plus, '+'),
            (self.space, ' '),
            (self.group, ','),
            (self.alternate, '#'),
        ]
        .into_iter()
        .filter_map(|(on, flag)| on.then_some(flag))
    }
}

#[derive(Debug, Clone, Copy)]
enum Selector {
    Next,
    Previous,
    Explicit(usize),
}

#[derive(Debug)]
struct Spec {
    selector: Selector,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

/// A rendered number, before sign, prefix and padding are applied.
struct Numeric {
    negative: bool,
    prefix: &'static str,
    digits: String,
}

enum Body {
    Text(String),
    Number(Numeric),
}

type Chars<'a> = Peekable<CharIndices<'a>>;

fn take_digits(chars: &mut Chars<'_>) -> String {
    let mut digits = String::new();
    while let Some(&(_, d)) = chars.peek() {
        if !d.is_ascii_digit() {
            break;
        }
        digits.push(d);
        chars.next();
    }
    digits
}

fn parse_field(digits: &str, err: FormatError) -> Result<usize, FormatError> {
    digits
        .parse::<usize>()
        .ok()
        .filter(|value| *value <= MAX_FIELD_WIDTH)
        .ok_or(err)
}

/// Parses the specifier following a `%` found at byte `position`.
fn parse_spec(chars: &mut Chars<'_>, position: usize) -> Result<Spec, FormatError> {
    let mut selector = Selector::Next;
    if let Some(&(_, '<')) = chars.peek() {
        chars.next();
        selector = Selector::Previous;
    }

    let mut digits = take_digits(chars);
    if !digits.is_empty() && matches!(chars.peek(), Some(&(_, '$'))) {
        chars.next();
        let index = digits
            .parse::<usize>()
            .ok()
            .filter(|index| *index > 0)
            .ok_or(FormatError::InvalidIndex { position })?;
        selector = Selector::Explicit(index - 1);
        digits.clear();
    }

    let mut flags = Flags::default();
    if digits.is_empty() {
        while let Some(&(_, flag)) = chars.peek() {
            match flag {
                '-' => flags.left = true,
                '0' => flags.zero = true,
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                ',' => flags.group = true,
                '#' => flags.alternate = true,
                _ => break,
            }
            chars.next();
        }
        digits = take_digits(chars);
    } else if digits.starts_with('0') {
        flags.zero = true;
        digits = digits.trim_start_matches('0').to_string();
    }

    let width = if digits.is_empty() {
        None
    } else {
        Some(parse_field(&digits, FormatError::InvalidWidth { position })?)
    };

    let mut precision = None;
    if let Some(&(_, '.')) = chars.peek() {
        chars.next();
        let digits = take_digits(chars);
        precision = Some(parse_field(
            &digits,
            FormatError::InvalidPrecision { position },
        )?);
    }

    let Some((_, conversion)) = chars.next() else {
        return Err(FormatError::Dangling);
    };

    if (flags.left || flags.zero) && width.is_none() {
        return Err(FormatError::MissingWidth { position });
    }
    if flags.left && flags.zero {
        return Err(FormatError::ConflictingFlags { position });
    }

    Ok(Spec {
        selector,
        flags,
        width,
        precision,
        conversion,
    })
}

impl Spec {
    fn check_flags(&self, lower: char) -> Result<(), FormatError> {
        let allowed: &[char] = match lower {
            'd' => &['-', '0', '+', ' ', ','],
            'f' => &['-', '0', '+', ' ', ','],
            'e' => &['-', '0', '+', ' '],
            'x' | 'o' => &['-', '0', '#'],
            _ => &['-'],
        };
        if let Some(flag) = self.flags.set().find(|flag| !allowed.contains(flag)) {
            return Err(FormatError::FlagMismatch {
                flag,
                conversion: self.conversion,
            });
        }
        if self.precision.is_some() && matches!(lower, 'd' | 'x' | 'o' | 'c') {
            return Err(FormatError::UnexpectedPrecision {
                conversion: self.conversion,
            });
        }
        Ok(())
    }

    fn render(&self, arg: &Arg) -> Result<String, FormatError> {
        let lower = self.conversion.to_ascii_lowercase();
        self.check_flags(lower)?;

        let mismatch = || FormatError::TypeMismatch {
            conversion: self.conversion,
            arg: arg.type_name(),
        };
        let truncate = |s: String| match self.precision {
            Some(p) => s.chars().take(p).collect::<String>(),
            None => s,
        };
        let precision = self.precision.unwrap_or(6);

        let body = match (lower, arg) {
            ('s', arg) => Body::Text(truncate(arg.to_string())),
            ('b', Arg::Bool(v)) => Body::Text(truncate(v.to_string())),
            ('b', _) => Body::Text(truncate("true".to_string())),
            ('c', Arg::Char(v)) => Body::Text(v.to_string()),
            ('c', Arg::Int(v)) => Body::Text(code_point(*v).ok_or_else(mismatch)?.to_string()),
            ('c', Arg::UInt(v)) => Body::Text(
                i64::try_from(*v)
                    .ok()
                    .and_then(code_point)
                    .ok_or_else(mismatch)?
                    .to_string(),
            ),
            ('d', Arg::Int(v)) => Body::Number(Numeric {
                negative: *v < 0,
                prefix: "",
                digits: v.unsigned_abs().to_string(),
            }),
            ('d', Arg::UInt(v)) => Body::Number(Numeric {
                negative: false,
                prefix: "",
                digits: v.to_string(),
            }),
            ('f', Arg::Float(v)) => float_body(*v, |m| format!("{m:.precision$}")),
            ('e', Arg::Float(v)) => float_body(*v, |m| scientific(m, precision)),
            ('x', Arg::Int(v)) => radix(format!("{v:x}"), self.flags.alternate, "0x"),
            ('x', Arg::UInt(v)) => radix(format!("{v:x}"), self.flags.alternate, "0x"),
            ('o', Arg::Int(v)) => radix(format!("{v:o}"), self.flags.alternate, "0"),
            ('o', Arg::UInt(v)) => radix(format!("{v:o}"), self.flags.alternate, "0"),
            _ => return Err(mismatch()),
        };

        let field = match body {
            Body::Text(text) => self.pad(text),
            Body::Number(number) => self.pad_number(number),
        };
        if self.conversion.is_ascii_uppercase() {
            Ok(field.to_uppercase())
        } else {
            Ok(field)
        }
    }

    fn pad(&self, text: String) -> String {
        let len = text.chars().count();
        match self.width {
            Some(width) if width > len => {
                let fill = " ".repeat(width - len);
                if self.flags.left {
                    text + &fill
                } else {
                    fill + &text
                }
            }
            _ => text,
        }
    }

    fn pad_number(&self, number: Numeric) -> String {
        let sign = if number.negative {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };
        let digits = if self.flags.group {
            group_thousands(&number.digits)
        } else {
            number.digits
        };
        let head = format!("{sign}{}", number.prefix);

        match self.width {
            Some(width) if self.flags.zero => {
                let len = head.len() + digits.chars().count();
                let zeros = "0".repeat(width.saturating_sub(len));
                format!("{head}{zeros}{digits}")
            }
            _ => self.pad(head + &digits),
        }
    }
}

fn code_point(value: i64) -> Option<char> {
    u32::try_from(value).ok().and_then(char::from_u32)
}

fn radix(digits: String, alternate: bool, prefix: &'static str) -> Body {
    Body::Number(Numeric {
        negative: false,
        prefix: if alternate { prefix } else { "" },
        digits,
    })
}

fn float_body(value: f64, render: impl FnOnce(f64) -> String) -> Body {
    if value.is_nan() {
        return Body::Text("NaN".to_string());
    }
    if value.is_infinite() {
        let text = if value < 0.0 { "-Infinity" } else { "Infinity" };
        return Body::Text(text.to_string());
    }
    Body::Number(Numeric {
        negative: value.is_sign_negative(),
        prefix: "",
        digits: render(value.abs()),
    })
}

/// Scientific notation with a signed, two-digit exponent: `1.50e+03`.
fn scientific(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        None => raw,
    }
}

fn group_thousands(digits: &str) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };
    let mut out = String::with_capacity(digits.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Applies `args` to a percent-style `format` string.
pub fn format_message(format: &str, args: &[Arg]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.char_indices().peekable();
    let mut next_arg = 0;
    let mut last_arg = None;

    while let Some((position, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let spec = parse_spec(&mut chars, position)?;
        match spec.conversion {
            '%' => out.push('%'),
            'n' => out.push('\n'),
            's' | 'S' | 'd' | 'f' | 'e' | 'E' | 'x' | 'X' | 'o' | 'b' | 'B' | 'c' | 'C' => {
                let index = match spec.selector {
                    Selector::Next => {
                        next_arg += 1;
                        next_arg - 1
                    }
                    Selector::Explicit(index) => index,
                    Selector::Previous => last_arg.ok_or(FormatError::MissingArgument {
                        index: next_arg,
                    })?,
                };
                let arg = args
                    .get(index)
                    .ok_or(FormatError::MissingArgument { index })?;
                last_arg = Some(index);
                out.push_str(&spec.render(arg)?);
            }
            other => {
                return Err(FormatError::UnknownConversion {
                    conversion: other,
                    position,
                })
            }
        }
    }

    Ok(out)
}

/// Renders a diagnostic message, never failing.
///
/// Without arguments the message is taken literally. If formatting fails the
/// raw format string is returned together with the arguments.
pub fn render_message(message: &str, args: &[Arg]) -> String {
    if args.is_empty() {
        return message.to_string();
    }
    match format_message(message, args) {
        Ok(rendered) => rendered,
        Err(err) => {
            warn!(error = %err, format = message, "falling back to unformatted message");
            fallback(message, args)
        }
    }
}

fn fallback(message: &str, args: &[Arg]) -> String {
    let args = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{message} [{args}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn fmt(format: &str, args: &[Arg]) -> String {
        format_message(format, args).unwrap()
    }

    #[test]
    fn test_float_precision() {
        assert_eq!(fmt("PI value is %.2f", &[Arg::from(PI)]), "PI value is 3.14");
        assert_eq!(fmt("PI is %.4f", &[Arg::from(PI)]), "PI is 3.1416");
        assert_eq!(fmt("π <=> %.3f", &[Arg::from(PI)]), "π <=> 3.142");
        assert_eq!(fmt("%f", &[Arg::from(1.5f64)]), "1.500000");
    }

    #[test]
    fn test_mixed_specifiers() {
        let args = [
            Arg::from("alice"),
            Arg::from(42i32),
            Arg::from(255u32),
            Arg::from('z'),
        ];
        assert_eq!(
            fmt("%s has %d items (0x%x) %c%%%n", &args),
            "alice has 42 items (0xff) z%\n"
        );
    }

    #[test]
    fn test_bool_specifier() {
        let args = [Arg::from(false), Arg::from("x")];
        assert_eq!(fmt("%b %b", &args), "false true");
        assert_eq!(fmt("%B", &[Arg::from(true)]), "TRUE");
    }

    #[test]
    fn test_string_precision_truncates() {
        assert_eq!(fmt("%.3s", &[Arg::from("abcdef")]), "abc");
    }

    #[test]
    fn test_surplus_args_ignored() {
        assert_eq!(fmt("%s", &[Arg::from(1i32), Arg::from(2i32)]), "1");
    }

    #[test]
    fn test_explicit_index() {
        let args = [Arg::from("ab"), Arg::from("cd")];
        assert_eq!(fmt("%1$s", &args), "ab");
        assert_eq!(fmt("%2$s before %1$s", &args), "cd before ab");
        assert_eq!(fmt("%1$s %1$s", &args), "ab ab");
    }

    #[test]
    fn test_explicit_index_does_not_advance() {
        let args = [Arg::from("ab"), Arg::from("cd")];
        assert_eq!(fmt("%2$s %s %s", &args), "cd ab cd");
    }

    #[test]
    fn test_previous_argument() {
        let args = [Arg::from(255i32)];
        assert_eq!(fmt("%d is %<x in hex", &args), "255 is ff in hex");
        assert_eq!(
            format_message("%<s", &args),
            Err(FormatError::MissingArgument { index: 0 })
        );
    }

    #[test]
    fn test_explicit_index_errors() {
        let args = [Arg::from("ab"), Arg::from("cd")];
        assert_eq!(
            format_message("%3$s", &args),
            Err(FormatError::MissingArgument { index: 2 })
        );
        assert_eq!(
            format_message("%0$s", &args),
            Err(FormatError::InvalidIndex { position: 0 })
        );
    }

    #[test]
    fn test_width() {
        assert_eq!(fmt("%5d", &[Arg::from(255i32)]), "  255");
        assert_eq!(fmt("%-6s|", &[Arg::from("ab")]), "ab    |");
        assert_eq!(fmt("%6s|", &[Arg::from("ab")]), "    ab|");
        assert_eq!(fmt("%2s", &[Arg::from("abcdef")]), "abcdef");
        assert_eq!(fmt("%1$-4s|", &[Arg::from("ab")]), "ab  |");
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(fmt("%08.3f", &[Arg::from(3.14159f64)]), "0003.142");
        assert_eq!(fmt("%05d", &[Arg::from(-42i32)]), "-0042");
        assert_eq!(fmt("%#06x", &[Arg::from(255i32)]), "0x00ff");
    }

    #[test]
    fn test_sign_and_grouping_flags() {
        assert_eq!(fmt("%+d", &[Arg::from(5i32)]), "+5");
        assert_eq!(fmt("% d", &[Arg::from(5i32)]), " 5");
        assert_eq!(fmt("%,d", &[Arg::from(1234567i64)]), "1,234,567");
        assert_eq!(fmt("%,d", &[Arg::from(-123i64)]), "-123");
        assert_eq!(fmt("%,.2f", &[Arg::from(1234567.891f64)]), "1,234,567.89");
    }

    #[test]
    fn test_uppercase_conversions() {
        assert_eq!(fmt("%X", &[Arg::from(255i32)]), "FF");
        assert_eq!(fmt("%#X", &[Arg::from(255i32)]), "0XFF");
        assert_eq!(fmt("%S", &[Arg::from("ab")]), "AB");
        assert_eq!(fmt("%C", &[Arg::from('q')]), "Q");
    }

    #[test]
    fn test_scientific_and_octal() {
        assert_eq!(fmt("%.2e", &[Arg::from(1234.5f64)]), "1.23e+03");
        assert_eq!(fmt("%.2E", &[Arg::from(0.00123f64)]), "1.23E-03");
        assert_eq!(fmt("%o", &[Arg::from(8i32)]), "10");
        assert_eq!(fmt("%#o", &[Arg::from(8i32)]), "010");
    }

    #[test]
    fn test_char_from_code_point() {
        assert_eq!(fmt("%c", &[Arg::from(65i32)]), "A");
        assert_eq!(
            format_message("%c", &[Arg::from(-1i32)]),
            Err(FormatError::TypeMismatch {
                conversion: 'c',
                arg: "integer"
            })
        );
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(fmt("%f", &[Arg::from(f64::NAN)]), "NaN");
        assert_eq!(fmt("%.2f", &[Arg::from(f64::NEG_INFINITY)]), "-Infinity");
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            format_message("%s and %s", &[Arg::from("one")]),
            Err(FormatError::MissingArgument { index: 1 })
        );
    }

    #[test]
    fn test_type_mismatch() {
        assert_eq!(
            format_message("%d", &[Arg::from("seven")]),
            Err(FormatError::TypeMismatch {
                conversion: 'd',
                arg: "string"
            })
        );
    }

    #[test]
    fn test_unknown_conversion() {
        assert_eq!(
            format_message("abc %q", &[Arg::from(1i32)]),
            Err(FormatError::UnknownConversion {
                conversion: 'q',
                position: 4
            })
        );
    }

    #[test]
    fn test_flag_errors() {
        let args = [Arg::from(5i32)];
        assert_eq!(
            format_message("%-d", &args),
            Err(FormatError::MissingWidth { position: 0 })
        );
        assert_eq!(
            format_message("%-05d", &args),
            Err(FormatError::ConflictingFlags { position: 0 })
        );
        assert_eq!(
            format_message("%+s", &args),
            Err(FormatError::FlagMismatch {
                flag: '+',
                conversion: 's'
            })
        );
        assert_eq!(
            format_message("%.2d", &args),
            Err(FormatError::UnexpectedPrecision { conversion: 'd' })
        );
    }

    #[test]
    fn test_dangling_and_bad_precision() {
        assert_eq!(
            format_message("100%", &[Arg::from(1i32)]),
            Err(FormatError::Dangling)
        );
        assert_eq!(
            format_message("%.f", &[Arg::from(1.0f64)]),
            Err(FormatError::InvalidPrecision { position: 0 })
        );
    }

    #[test]
    fn test_oversized_fields_rejected() {
        assert_eq!(
            format_message("v=%.70000f", &[Arg::from(1.5f64)]),
            Err(FormatError::InvalidPrecision { position: 2 })
        );
        assert_eq!(
            format_message("%70000d", &[Arg::from(1i32)]),
            Err(FormatError::InvalidWidth { position: 0 })
        );
        assert_eq!(
            format_message("%.99999999999999999999999s", &[Arg::from("x")]),
            Err(FormatError::InvalidPrecision { position: 0 })
        );
    }

    #[test]
    fn test_largest_precision_accepted() {
        let rendered = fmt("%.65535f", &[Arg::from(1.5f64)]);
        assert_eq!(rendered.len(), 2 + MAX_FIELD_WIDTH);
    }

    #[test]
    fn test_render_message_literal_without_args() {
        assert_eq!(render_message("100% sure", &[]), "100% sure");
    }

    #[test]
    fn test_render_message_falls_back() {
        let rendered = render_message("PI is %d", &[Arg::from(PI)]);
        assert_eq!(rendered, format!("PI is %d [{}]", PI));
    }

    #[test]
    fn test_render_message_falls_back_on_huge_precision() {
        let rendered = render_message("%.70000f", &[Arg::from(1.5f64)]);
        assert_eq!(rendered, "%.70000f [1.5]");
    }
}
