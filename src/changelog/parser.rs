//! Change log parser
//!
//! Streams the XML events of a persisted change log through a small state
//! machine: character data is accumulated and handed to the field of the
//! current changeset when an element closes.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{ChangeLogError, is_xml_char};
use super::constants::{attributes, elements};
use crate::model::{BuildHandle, ChangeLogEntry, ChangeLogSet};

/// Parser for persisted change logs
pub struct ChangeLogParser;

impl ChangeLogParser {
    /// Parse the change log file of a build
    pub fn parse(build: BuildHandle, path: &Path) -> Result<ChangeLogSet, ChangeLogError> {
        let file = File::open(path).map_err(|source| ChangeLogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let change_log = Self::parse_reader(build, BufReader::new(file))?;

        tracing::debug!(
            path = %path.display(),
            entries = change_log.len(),
            "change log parsed"
        );
        Ok(change_log)
    }

    /// Parse a change log document held in memory
    pub fn parse_str(build: BuildHandle, xml: &str) -> Result<ChangeLogSet, ChangeLogError> {
        Self::parse_reader(build, xml.as_bytes())
    }

    /// Parse a change log from any buffered reader
    ///
    /// Entries keep document order. Any malformed input fails the whole parse.
    pub fn parse_reader<R: BufRead>(
        build: BuildHandle,
        input: R,
    ) -> Result<ChangeLogSet, ChangeLogError> {
        let mut reader = Reader::from_reader(input);
        let mut handler = ChangeLogHandler::new(ChangeLogSet::new(build));
        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut root_seen = false;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(start) => {
                    Self::open_element(depth, &mut root_seen)?;
                    depth += 1;
                    handler.start_element(&start)?;
                }
                Event::Empty(start) => {
                    Self::open_element(depth, &mut root_seen)?;
                    handler.start_element(&start)?;
                    handler.end_element(Element::from_local_name(start.local_name().as_ref()))?;
                }
                Event::End(end) => {
                    depth = depth.saturating_sub(1);
                    handler.end_element(Element::from_local_name(end.local_name().as_ref()))?;
                }
                Event::Text(text) => {
                    let text = text.decode()?;
                    if depth > 0 {
                        handler.characters(&text);
                    } else if !text.trim().is_empty() {
                        return Err(ChangeLogError::ContentOutsideRoot);
                    }
                }
                Event::CData(_) | Event::GeneralRef(_) if depth == 0 => {
                    return Err(ChangeLogError::ContentOutsideRoot);
                }
                Event::CData(data) => handler.characters(&data.decode()?),
                Event::GeneralRef(reference) => handler.entity(&reference.decode()?)?,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if depth > 0 {
            return Err(ChangeLogError::UnexpectedEof);
        }
        if !root_seen {
            return Err(ChangeLogError::MissingRoot);
        }

        Ok(handler.change_log)
    }

    /// A document has exactly one root element
    fn open_element(depth: usize, root_seen: &mut bool) -> Result<(), ChangeLogError> {
        if depth == 0 {
            if *root_seen {
                return Err(ChangeLogError::ContentOutsideRoot);
            }
            *root_seen = true;
        }
        Ok(())
    }
}

/// Elements the handler reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Changeset,
    Date,
    User,
    Comment,
    Item,
    Other,
}

impl Element {
    fn from_local_name(name: &[u8]) -> Self {
        [
            (elements::CHANGESET, Self::Changeset),
            (elements::DATE, Self::Date),
            (elements::USER, Self::User),
            (elements::COMMENT, Self::Comment),
            (elements::ITEM, Self::Item),
        ]
        .into_iter()
        .find(|(element, _)| element.as_bytes() == name)
        .map_or(Self::Other, |(_, element)| element)
    }

    fn name(self) -> &'static str {
        match self {
            Self::Changeset => elements::CHANGESET,
            Self::Date => elements::DATE,
            Self::User => elements::USER,
            Self::Comment => elements::COMMENT,
            Self::Item => elements::ITEM,
            Self::Other => "",
        }
    }
}

/// A changeset whose end tag has not been seen yet
#[derive(Debug, Default)]
struct PendingEntry {
    version: String,
    check_in_time: Option<NaiveDateTime>,
    author: String,
    message: String,
    affected_paths: Vec<String>,
}

impl PendingEntry {
    fn into_entry(self) -> Result<ChangeLogEntry, ChangeLogError> {
        let check_in_time = self
            .check_in_time
            .ok_or_else(|| ChangeLogError::MissingCheckInTime {
                version: self.version.clone(),
            })?;

        Ok(ChangeLogEntry {
            version: self.version,
            check_in_time,
            author: self.author,
            message: self.message,
            affected_paths: self.affected_paths,
        })
    }
}

struct ChangeLogHandler {
    change_log: ChangeLogSet,
    text: String,
    current: Option<PendingEntry>,
}

impl ChangeLogHandler {
    fn new(change_log: ChangeLogSet) -> Self {
        Self {
            change_log,
            text: String::new(),
            current: None,
        }
    }

    fn start_element(&mut self, start: &BytesStart<'_>) -> Result<(), ChangeLogError> {
        if Element::from_local_name(start.local_name().as_ref()) == Element::Changeset {
            let version = start
                .try_get_attribute(attributes::VERSION)?
                .ok_or(ChangeLogError::MissingVersion)?
                .unescape_value()?
                .into_owned();

            self.current = Some(PendingEntry {
                version,
                ..PendingEntry::default()
            });
        }

        Ok(())
    }

    fn end_element(&mut self, element: Element) -> Result<(), ChangeLogError> {
        let text = self.take_text();

        match element {
            Element::Changeset => {
                let pending = self.current.take().ok_or(ChangeLogError::OutsideChangeset {
                    element: element.name().to_string(),
                })?;
                self.change_log.add(pending.into_entry()?);
            }
            Element::Comment => self.current_entry(element)?.message = text,
            Element::User => self.current_entry(element)?.author = text,
            Element::Date => {
                let check_in_time = ChangeLogEntry::parse_check_in_time(&text).map_err(
                    |source| ChangeLogError::InvalidDate {
                        value: text.clone(),
                        source,
                    },
                )?;
                self.current_entry(element)?.check_in_time = Some(check_in_time);
            }
            Element::Item => self.current_entry(element)?.affected_paths.push(text),
            Element::Other => {}
        }

        Ok(())
    }

    fn characters(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Resolve an entity or character reference into the text accumulator
    fn entity(&mut self, name: &str) -> Result<(), ChangeLogError> {
        if let Some(code) = name.strip_prefix('#') {
            let ch = match code.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => code.parse().ok(),
            }
            .and_then(char::from_u32)
            .filter(|&ch| is_xml_char(ch))
            .ok_or_else(|| ChangeLogError::InvalidCharacterReference(name.to_string()))?;
            self.text.push(ch);
            return Ok(());
        }

        let resolved = match name {
            "lt" => "<",
            "gt" => ">",
            "amp" => "&",
            "apos" => "'",
            "quot" => "\"",
            _ => return Err(ChangeLogError::UnknownEntity(name.to_string())),
        };
        self.text.push_str(resolved);
        Ok(())
    }

    /// Trimmed accumulated text; the accumulator is reset
    fn take_text(&mut self) -> String {
        let text = self.text.trim().to_string();
        self.text.clear();
        text
    }

    fn current_entry(&mut self, element: Element) -> Result<&mut PendingEntry, ChangeLogError> {
        self.current
            .as_mut()
            .ok_or_else(|| ChangeLogError::OutsideChangeset {
                element: element.name().to_string(),
            })
    }
}
