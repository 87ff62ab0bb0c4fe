//! Ordered INI document used for reading and writing the settings file.
//!
//! Keys are addressed by their flat `section.key` name. Keys that appear
//! before the first section header have no section and are addressed by their
//! bare name.

use ini::{EscapePolicy, Ini, ParseOption, WriteOption};
use std::io::{self, Write};

type Entries = Vec<(String, String)>;

/// Parsed INI content, sections and keys in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IniDocument {
    sections: Vec<(Option<String>, Entries)>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text.
    ///
    /// Values are kept verbatim apart from surrounding whitespace; inline
    /// comments are left for the caller to strip. Empty keys and keys repeated
    /// within one section are rejected.
    pub fn parse(text: &str) -> Result<Self, String> {
        let opt = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(text, opt).map_err(|e| e.to_string())?;

        let mut doc = Self::new();
        for (section, props) in ini.iter() {
            let section = section.map(|s| s.trim().to_string());
            for (key, value) in props.iter() {
                let key = key.trim();
                if key.is_empty() {
                    return Err(match &section {
                        Some(name) => format!("empty key name in section [{}]", name),
                        None => "empty key name".to_string(),
                    });
                }
                let entries = doc.section_mut(section.as_deref());
                if entries.iter().any(|(k, _)| k == key) {
                    return Err(format!("duplicate key name \"{}\"", flat_key(section.as_deref(), key)));
                }
                entries.push((key.to_string(), value.trim().to_string()));
            }
        }
        Ok(doc)
    }

    /// Look up a value by its flat key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .find(|(flat, _)| flat == key)
            .map(|(_, value)| value)
    }

    /// Set a value by flat key, replacing an existing entry in place or
    /// appending it (creating the section if needed).
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let (section, name) = split_key(key);
        let value = value.into();
        let entries = self.section_mut(section);
        match entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = value,
            None => entries.push((name.to_string(), value)),
        }
    }

    /// Every entry as `(flat key, value)`, in file order.
    pub fn entries(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.sections.iter().flat_map(|(section, entries)| {
            entries
                .iter()
                .map(move |(key, value)| (flat_key(section.as_deref(), key), value.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|(_, entries)| entries.is_empty())
    }

    /// Write the document as INI text. Section-less keys come first.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut ini = Ini::new();
        let ordered = self
            .sections
            .iter()
            .filter(|(section, _)| section.is_none())
            .chain(self.sections.iter().filter(|(section, _)| section.is_some()));
        for (section, entries) in ordered {
            for (key, value) in entries {
                ini.with_section(section.as_deref()).set(key, value);
            }
        }

        let opt = WriteOption {
            escape_policy: EscapePolicy::Nothing,
            ..WriteOption::default()
        };
        ini.write_to_opt(writer, opt)
    }

    /// Render the document to a string.
    pub fn render(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn section_mut(&mut self, section: Option<&str>) -> &mut Entries {
        let index = match self
            .sections
            .iter()
            .position(|(name, _)| name.as_deref() == section)
        {
            Some(index) => index,
            None => {
                self.sections.push((section.map(str::to_string), Vec::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index].1
    }
}

/// Split a flat key at its first `.` into section and name.
fn split_key(key: &str) -> (Option<&str>, &str) {
    match key.split_once('.') {
        Some((section, name)) => (Some(section), name),
        None => (None, key),
    }
}

fn flat_key(section: Option<&str>, key: &str) -> String {
    match section {
        Some(section) => format!("{}.{}", section, key),
        None => key.to_string(),
    }
}
