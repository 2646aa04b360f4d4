//! Change log writer

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::escape::escape;

use super::{ChangeLogError, is_xml_char};
use super::constants::{EDIT_ACTION, XML_DECLARATION, attributes, elements};
use crate::model::ChangeLogSet;

/// Escape markup and replace characters XML 1.0 does not allow
///
/// Control characters other than tab, line feed and carriage return become
/// U+FFFD so the document stays well-formed.
fn escape_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return escape(text);
    }

    let replaced: String = text
        .chars()
        .map(|ch| if is_xml_char(ch) { ch } else { char::REPLACEMENT_CHARACTER })
        .collect();
    Cow::Owned(escape(replaced.as_str()).into_owned())
}

/// Persists a [`ChangeLogSet`] as XML into a sink
///
/// Single use: [`write`](Self::write) closes the sink when it is done, so a
/// second call fails with [`ChangeLogError::WriterClosed`].
pub struct ChangeLogWriter<W: Write> {
    sink: Option<W>,
}

impl ChangeLogWriter<BufWriter<File>> {
    /// Create a writer for a new (or truncated) change log file
    pub fn create(path: &Path) -> Result<Self, ChangeLogError> {
        let file = File::create(path).map_err(|source| ChangeLogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ChangeLogWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink: Some(sink) }
    }

    /// Whether the sink has already been written and closed
    pub fn is_closed(&self) -> bool {
        self.sink.is_none()
    }

    /// Write the change log and close the sink
    ///
    /// The sink is released even if writing fails halfway.
    pub fn write(&mut self, change_log: &ChangeLogSet) -> Result<(), ChangeLogError> {
        let mut sink = self.sink.take().ok_or(ChangeLogError::WriterClosed)?;

        Self::write_document(&mut sink, change_log)?;
        sink.flush()?;

        tracing::debug!(
            build = %change_log.build(),
            entries = change_log.len(),
            "change log written"
        );
        Ok(())
    }

    fn write_document(sink: &mut W, change_log: &ChangeLogSet) -> Result<(), ChangeLogError> {
        writeln!(sink, "{XML_DECLARATION}")?;
        writeln!(sink, "<{}>", elements::CHANGELOG)?;

        for entry in change_log {
            writeln!(
                sink,
                "\t<{} {}=\"{}\">",
                elements::CHANGESET,
                attributes::VERSION,
                escape_text(&entry.version)
            )?;
            Self::write_text_element(sink, 2, elements::DATE, &entry.formatted_check_in_time())?;
            Self::write_text_element(sink, 2, elements::USER, &entry.author)?;
            Self::write_text_element(sink, 2, elements::COMMENT, &entry.message)?;
            writeln!(sink, "\t\t<{}>", elements::ITEMS)?;

            for path in &entry.affected_paths {
                writeln!(
                    sink,
                    "\t\t\t<{item} {}=\"{EDIT_ACTION}\">{}</{item}>",
                    attributes::ACTION,
                    escape_text(path),
                    item = elements::ITEM
                )?;
            }

            writeln!(sink, "\t\t</{}>", elements::ITEMS)?;
            writeln!(sink, "\t</{}>", elements::CHANGESET)?;
        }

        writeln!(sink, "</{}>", elements::CHANGELOG)?;
        Ok(())
    }

    fn write_text_element(
        sink: &mut W,
        depth: usize,
        name: &str,
        text: &str,
    ) -> Result<(), ChangeLogError> {
        writeln!(
            sink,
            "{}<{name}>{}</{name}>",
            "\t".repeat(depth),
            escape_text(text)
        )?;
        Ok(())
    }
}
