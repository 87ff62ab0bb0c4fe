//! Reading and writing the INI settings file.
//!
//! A read is not transactional: if a later field fails to convert, the
//! fields visited before it keep the values they were given.

use super::codec::strip_value;
use super::game::GameConfig;
use super::ini::IniDocument;
use crate::error::{ConfigError, ConfigResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

impl GameConfig {
    /// Read the INI file at `path`.
    ///
    /// Fields that already hold a value are left alone. Every key in the file
    /// is recorded in `all_config_data` once all known fields validate.
    pub fn read_config_file(&mut self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = IniDocument::parse(&text).map_err(|reason| ConfigError::syntax(path, reason))?;

        for mut field in self.file_fields_mut() {
            let key = field.key();
            if field.has_value() {
                debug!(key = key, "Keeping value set on the command line");
                continue;
            }
            match doc.get(key) {
                None if field.is_required() => return Err(ConfigError::missing_key(key)),
                None => debug!(key = key, "Key not in config file, using default"),
                Some(raw) => {
                    let value = strip_value(raw);
                    if !field.set_from_str(value) {
                        return Err(ConfigError::invalid_type(key, value));
                    }
                }
            }
        }

        for (key, raw) in doc.entries() {
            self.all_config_data.insert(key, strip_value(raw).to_string());
        }

        info!(
            path = %path.display(),
            keys = self.all_config_data.len(),
            "Loaded config file"
        );
        Ok(())
    }

    /// Write every key seen so far plus the live value of each known field
    /// to `path`. Unset fields are not written.
    pub fn write_config_file(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let save_err = |source| ConfigError::Save {
            path: path.to_path_buf(),
            source,
        };

        let doc = self.to_ini_document();
        let mut writer = BufWriter::new(File::create(path).map_err(save_err)?);
        doc.write_to(&mut writer).map_err(save_err)?;
        writer.flush().map_err(save_err)?;

        info!(path = %path.display(), "Saved config file");
        Ok(())
    }

    /// INI text holding the default of every known field.
    pub fn default_ini_string(&self) -> String {
        let mut doc = IniDocument::new();
        for field in self.file_fields() {
            doc.set(field.key(), field.default_string());
        }
        // Rendering into memory cannot fail.
        doc.render().unwrap_or_default()
    }

    fn to_ini_document(&self) -> IniDocument {
        let mut doc = IniDocument::new();
        for (key, value) in &self.all_config_data {
            doc.set(key, value.as_str());
        }
        for field in self.file_fields() {
            if let Some(value) = field.value_string() {
                doc.set(field.key(), value);
            }
        }
        doc
    }
}
