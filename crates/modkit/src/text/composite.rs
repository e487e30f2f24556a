//! Composite format strings with SI support.
//!
//! Templates use `{index[,alignment][:format]}` items, with `{{` and `}}` as
//! escaped braces. Numeric arguments understand these format codes:
//!
//! | Code        | Meaning                                      | Example        |
//! |-------------|----------------------------------------------|----------------|
//! | `S[d[,m[,M]]]` | SI prefix (see [`FormatSpec`])            | `{0:S3}`       |
//! | `F[n]`      | fixed point, `n` decimals (default 2)        | `{0:F1}`       |
//! | `G[n]`      | general, `n` significant digits             | `{0:G4}`       |
//! | `D[n]`      | integer, zero padded to `n` digits           | `{0:D5}`       |
//! | `X[n]`/`x[n]` | hexadecimal, zero padded to `n` digits     | `{0:x2}`       |
//!
//! Text and null arguments ignore the format code.

use crate::error::{Error, Result};
use crate::si::{FormatSpec, MAX_DIGITS, format_general, format_si};

/// Widest padding an item may request
pub const MAX_ALIGNMENT: u32 = 9999;

/// A value that can be substituted into a composite format string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg<'a> {
    Float(f64),
    Int(i64),
    UInt(u64),
    Text(&'a str),
    Null,
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for FormatArg<'_> {
                fn from(value: $source) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64: u8, u16, u32, u64, usize);

impl From<f64> for FormatArg<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for FormatArg<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl<'a, T: Into<FormatArg<'a>>> From<Option<T>> for FormatArg<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl FormatArg<'_> {
    fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v),
            Self::Int(v) => Some(v as f64),
            Self::UInt(v) => Some(v as f64),
            Self::Text(_) | Self::Null => None,
        }
    }

    /// Render this argument, applying `format` when it is numeric
    pub fn render(&self, format: Option<&str>) -> Result<String> {
        match (self, format) {
            (Self::Null, _) => Ok("null".to_string()),
            (Self::Text(text), _) => Ok(text.to_string()),
            (Self::Float(v), None) => Ok(v.to_string()),
            (Self::Int(v), None) => Ok(v.to_string()),
            (Self::UInt(v), None) => Ok(v.to_string()),
            (_, Some(format)) => self.render_numeric(format),
        }
    }

    fn render_numeric(&self, format: &str) -> Result<String> {
        let mut chars = format.chars();
        let Some(code) = chars.next() else {
            return Err(Error::MalformedFormat("Format string is empty".to_string()));
        };
        let rest = chars.as_str();
        let value = self.as_f64().unwrap_or_default();

        match code {
            'S' | 's' => {
                let spec: FormatSpec = format.parse()?;
                Ok(format_si(value, &spec))
            }
            'F' | 'f' => {
                let decimals = precision(format, rest, 2)?;
                Ok(match *self {
                    Self::Int(v) if decimals == 0 => v.to_string(),
                    Self::UInt(v) if decimals == 0 => v.to_string(),
                    _ => format!("{:.*}", decimals, value),
                })
            }
            'G' | 'g' => {
                if rest.is_empty() {
                    self.render(None)
                } else {
                    Ok(format_general(value, precision(format, rest, 0)?))
                }
            }
            'D' | 'd' => {
                let width = precision(format, rest, 0)?;
                match *self {
                    Self::Int(v) => {
                        let sign = if v < 0 { "-" } else { "" };
                        Ok(format!("{}{:0width$}", sign, v.unsigned_abs(), width = width))
                    }
                    Self::UInt(v) => Ok(format!("{:0width$}", v, width = width)),
                    _ => Err(integer_only(format)),
                }
            }
            'X' | 'x' => {
                let width = precision(format, rest, 0)?;
                let bits = match *self {
                    Self::Int(v) => v as u64,
                    Self::UInt(v) => v,
                    _ => return Err(integer_only(format)),
                };
                Ok(if code == 'X' {
                    format!("{:0width$X}", bits, width = width)
                } else {
                    format!("{:0width$x}", bits, width = width)
                })
            }
            _ => Err(Error::MalformedFormat(format!(
                "unsupported format specifier '{}'",
                format
            ))),
        }
    }
}

fn precision(format: &str, digits: &str, default: usize) -> Result<usize> {
    if digits.is_empty() {
        return Ok(default);
    }
    let precision: u32 = digits
        .parse()
        .map_err(|e| Error::Parse(format!("invalid precision in '{}': {}", format, e)))?;
    if precision > MAX_DIGITS {
        return Err(Error::MalformedFormat(format!(
            "precision in '{}' exceeds {}",
            format, MAX_DIGITS
        )));
    }
    Ok(precision as usize)
}

fn integer_only(format: &str) -> Error {
    Error::MalformedFormat(format!("'{}' requires an integer argument", format))
}

/// One `{index[,alignment][:format]}` item
#[derive(Debug, Clone, PartialEq, Eq)]
struct FormatItem<'t> {
    index: usize,
    alignment: i32,
    format: Option<&'t str>,
}

impl<'t> FormatItem<'t> {
    fn parse(body: &'t str) -> Result<Self> {
        let (head, format) = match body.split_once(':') {
            Some((_, "")) => {
                return Err(Error::MalformedFormat("Format string is empty".to_string()));
            }
            Some((head, format)) => (head, Some(format)),
            None => (body, None),
        };

        let (index, alignment) = match head.split_once(',') {
            Some((index, alignment)) => (index, Some(alignment)),
            None => (head, None),
        };

        let index = index.trim().parse().map_err(|_| {
            Error::MalformedFormat(format!("invalid format item index in '{{{}}}'", body))
        })?;
        let alignment: i32 = match alignment {
            Some(alignment) => alignment.trim().parse().map_err(|_| {
                Error::MalformedFormat(format!("invalid alignment in '{{{}}}'", body))
            })?,
            None => 0,
        };
        if alignment.unsigned_abs() > MAX_ALIGNMENT {
            return Err(Error::MalformedFormat(format!(
                "alignment in '{{{}}}' exceeds {}",
                body, MAX_ALIGNMENT
            )));
        }

        Ok(Self {
            index,
            alignment,
            format,
        })
    }

    fn write(&self, out: &mut String, args: &[FormatArg<'_>]) -> Result<()> {
        let arg = args.get(self.index).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "format item {{{}}} has no argument ({} supplied)",
                self.index,
                args.len()
            ))
        })?;

        let text = arg.render(self.format)?;
        let width = self.alignment.unsigned_abs() as usize;
        if self.alignment < 0 {
            out.push_str(&format!("{:<width$}", text, width = width));
        } else {
            out.push_str(&format!("{:>width$}", text, width = width));
        }
        Ok(())
    }
}

/// Substitute `args` into a composite format `template`
pub fn format(template: &str, args: &[FormatArg<'_>]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(i) = rest.find(['{', '}']) {
        out.push_str(&rest[..i]);
        let brace = rest.as_bytes()[i];
        let after = &rest[i + 1..];

        if after.as_bytes().first() == Some(&brace) {
            out.push(brace as char);
            rest = &after[1..];
            continue;
        }

        if brace == b'}' {
            return Err(Error::MalformedFormat(format!(
                "unmatched '}}' in '{}'",
                template
            )));
        }

        let end = after.find('}').ok_or_else(|| {
            Error::MalformedFormat(format!("unclosed '{{' in '{}'", template))
        })?;
        FormatItem::parse(&after[..end])?.write(&mut out, args)?;
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Format with SI support, converting each argument with [`FormatArg::from`].
///
/// ```
/// let text = modkit::si_format!("{0} parts, {1:S3}W", 3, 1234.5).unwrap();
/// assert_eq!(text, "3 parts, 1230W");
/// ```
#[macro_export]
macro_rules! si_format {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::text::format($template, &[$($crate::text::FormatArg::from($arg)),*])
    };
}
