//! Configuration persistence (`config.xml`)
//!
//! A flat XML document with three text elements under `<Configuration>`:
//! `<InstallPath>`, `<Version>`, `<ExecutablePath>`. The editor rewrites the
//! whole document on save; the launcher reads it once per launch and treats
//! `ExecutablePath` as the sole source of truth. Element names are fixed so
//! both tools interoperate with configs written by earlier releases.
//!
//! Reads are tolerant: absent or empty `InstallPath`/`Version` simply mean
//! "not configured". A file that fails to parse is reported as
//! [`LauncherError::ConfigMalformed`], distinctly from an absent file
//! ([`LauncherError::ConfigMissing`]) which is a normal first-run state for
//! the editor.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{LauncherError, Result};
use crate::scan::InstalledVersion;

/// Default configuration file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.xml";

const ROOT_ELEMENT: &str = "Configuration";
const INSTALL_PATH_ELEMENT: &str = "InstallPath";
const VERSION_ELEMENT: &str = "Version";
const EXECUTABLE_PATH_ELEMENT: &str = "ExecutablePath";

/// The persisted configuration record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Install root directory, user-supplied
    pub install_root: Option<String>,
    /// Selected dotted version string
    pub selected_version: Option<String>,
    /// Resolved binary path; derived from root + version, never edited
    pub executable_path: Option<String>,
}

impl Configuration {
    /// Build the record the editor persists: an explicit snapshot of the
    /// chosen root and scanned entry, not state read back out of the UI.
    pub fn from_selection(install_root: &str, selected: &InstalledVersion) -> Self {
        Self {
            install_root: Some(install_root.to_string()),
            selected_version: Some(selected.version.to_string()),
            executable_path: Some(selected.executable_path.display().to_string()),
        }
    }

    /// Load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// [`LauncherError::ConfigMissing`] if the file does not exist,
    /// [`LauncherError::ConfigMalformed`] if it is not valid XML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(LauncherError::ConfigMissing {
                    path: path.display().to_string(),
                });
            }
            Err(err) => return Err(err.into()),
        };
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let malformed = |reason: String| LauncherError::ConfigMalformed {
            path: path.display().to_string(),
            reason,
        };

        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut config = Self::default();
        let mut current: Option<&str> = None;
        loop {
            match reader.read_event() {
                Err(err) => return Err(malformed(err.to_string())),
                Ok(Event::Eof) => break,
                Ok(Event::Start(el)) => {
                    current = match el.name().as_ref() {
                        b"InstallPath" => Some(INSTALL_PATH_ELEMENT),
                        b"Version" => Some(VERSION_ELEMENT),
                        b"ExecutablePath" => Some(EXECUTABLE_PATH_ELEMENT),
                        _ => None,
                    };
                }
                Ok(Event::End(_)) => current = None,
                Ok(Event::Text(text)) => {
                    let value = text
                        .unescape()
                        .map_err(|err| malformed(err.to_string()))?
                        .trim()
                        .to_string();
                    if value.is_empty() {
                        continue;
                    }
                    match current {
                        Some(INSTALL_PATH_ELEMENT) => config.install_root = Some(value),
                        Some(VERSION_ELEMENT) => config.selected_version = Some(value),
                        Some(EXECUTABLE_PATH_ELEMENT) => config.executable_path = Some(value),
                        _ => {}
                    }
                }
                Ok(_) => {}
            }
        }

        Ok(config)
    }

    /// Write a fresh document to `path`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// [`LauncherError::ConfigWriteFailed`] if serialization or the write
    /// fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_failed = |reason: String| LauncherError::ConfigWriteFailed {
            path: path.display().to_string(),
            reason,
        };

        let document = self.to_xml().map_err(write_failed)?;
        fs::write(path, document).map_err(|err| write_failed(err.to_string()))
    }

    fn to_xml(&self) -> std::result::Result<Vec<u8>, String> {
        fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> std::result::Result<(), String> {
            writer.write_event(event).map_err(|err| err.to_string())
        }

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
        )?;
        emit(&mut writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;

        let fields = [
            (INSTALL_PATH_ELEMENT, &self.install_root),
            (VERSION_ELEMENT, &self.selected_version),
            (EXECUTABLE_PATH_ELEMENT, &self.executable_path),
        ];
        for (name, value) in fields {
            emit(&mut writer, Event::Start(BytesStart::new(name)))?;
            if let Some(value) = value {
                emit(&mut writer, Event::Text(BytesText::new(value)))?;
            }
            emit(&mut writer, Event::End(BytesEnd::new(name)))?;
        }

        emit(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
        Ok(writer.into_inner())
    }

    /// The resolved executable path the launcher must use.
    ///
    /// # Errors
    ///
    /// [`LauncherError::ConfigIncomplete`] if `ExecutablePath` is absent or
    /// empty.
    pub fn required_executable_path(&self) -> Result<PathBuf> {
        match &self.executable_path {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Err(LauncherError::ConfigIncomplete {
                field: EXECUTABLE_PATH_ELEMENT,
            }),
        }
    }
}
