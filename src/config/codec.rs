//! String conversion rules for configuration values.
//!
//! Parsing is permissive and never fails loudly: a value that cannot be
//! converted yields `None`, and the caller decides whether that is an error.

use std::path::PathBuf;

/// Conversion between a configuration value and its INI string form.
pub trait Codec: Sized {
    /// Parse a stripped string. Returns `None` if the string is not a valid `Self`.
    fn parse(s: &str) -> Option<Self>;

    /// Format a value the way it is written to the INI file.
    fn format(&self) -> String;
}

impl Codec for String {
    fn parse(s: &str) -> Option<Self> {
        Some(s.to_string())
    }

    fn format(&self) -> String {
        self.clone()
    }
}

/// Accepts any integer (non-zero is true), `true`/`on` and `false`/`off`,
/// case-insensitively. Formats as `1`/`0`.
impl Codec for bool {
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        if let Ok(n) = s.parse::<i64>() {
            return Some(n != 0);
        }
        match s.as_str() {
            "true" | "on" => Some(true),
            "false" | "off" => Some(false),
            _ => None,
        }
    }

    fn format(&self) -> String {
        if *self { "1" } else { "0" }.to_string()
    }
}

/// Accepts decimal, `0x` hexadecimal and `0`-prefixed octal literals.
/// Trailing garbage and negative numbers are rejected.
impl Codec for u64 {
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        let s = s.strip_prefix('+').unwrap_or(&s);

        let (digits, radix) = if let Some(hex) = s.strip_prefix("0x") {
            (hex, 16)
        } else if s.len() > 1 && s.starts_with('0') {
            (&s[1..], 8)
        } else {
            (s, 10)
        };

        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        u64::from_str_radix(digits, radix).ok()
    }

    fn format(&self) -> String {
        self.to_string()
    }
}

impl Codec for PathBuf {
    fn parse(s: &str) -> Option<Self> {
        Some(PathBuf::from(s))
    }

    fn format(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

/// Strip an inline `;`/`#` comment and surrounding whitespace from a raw INI value.
pub fn strip_value(raw: &str) -> &str {
    let end = raw.find([';', '#']).unwrap_or(raw.len());
    raw[..end].trim_matches([' ', '\t', '\n', '\r'])
}

/// `clap` value parser for unsigned options, so the command line accepts the
/// same literals as the INI file.
pub fn parse_unsigned_arg(s: &str) -> Result<u64, String> {
    <u64 as Codec>::parse(s).ok_or_else(|| format!("invalid unsigned integer '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_value() {
        for raw in ["abc", "\tabc", "abc\t", " abc", "abc ", " abc ", "  abc  "] {
            assert_eq!(strip_value(raw), "abc");
        }
        assert_eq!(strip_value("\t/dev/test  \t \r\n"), "/dev/test");
        assert_eq!(
            strip_value("      american ;american english french german"),
            "american"
        );
        assert_eq!(strip_value("1 #values != 0 enable input inversion"), "1");
        assert_eq!(strip_value("; only a comment"), "");
    }

    #[test]
    fn test_bool_acceptance_set() {
        for s in ["1", "true", "on", "TRUE", "On", "42", "-1"] {
            assert_eq!(<bool as Codec>::parse(s), Some(true), "input {s:?}");
        }
        for s in ["0", "false", "off", "OFF", "False", "00"] {
            assert_eq!(<bool as Codec>::parse(s), Some(false), "input {s:?}");
        }
        for s in ["d", "", "yes", "1d", "truee"] {
            assert_eq!(<bool as Codec>::parse(s), None, "input {s:?}");
        }
    }

    #[test]
    fn test_bool_format() {
        assert_eq!(true.format(), "1");
        assert_eq!(false.format(), "0");
    }

    #[test]
    fn test_unsigned_bases() {
        assert_eq!(<u64 as Codec>::parse("1920"), Some(1920));
        assert_eq!(<u64 as Codec>::parse("0"), Some(0));
        assert_eq!(<u64 as Codec>::parse("+600"), Some(600));
        assert_eq!(<u64 as Codec>::parse("0x780"), Some(1920));
        assert_eq!(<u64 as Codec>::parse("0X1f"), Some(31));
        assert_eq!(<u64 as Codec>::parse("010"), Some(8));
    }

    #[test]
    fn test_unsigned_rejects_garbage() {
        for s in ["1920d", "", "-1", "0x", "08", "abc", "0x+5", "12 34"] {
            assert_eq!(<u64 as Codec>::parse(s), None, "input {s:?}");
        }
        assert!(parse_unsigned_arg("1920d").is_err());
        assert_eq!(parse_unsigned_arg("800"), Ok(800));
    }

    #[test]
    fn test_string_and_path_are_verbatim() {
        assert_eq!(
            <String as Codec>::parse("Liberty City"),
            Some("Liberty City".to_string())
        );
        assert_eq!(
            <PathBuf as Codec>::parse("/dev/test"),
            Some(PathBuf::from("/dev/test"))
        );
        assert_eq!(PathBuf::from("/dev/test").format(), "/dev/test");
    }
}
