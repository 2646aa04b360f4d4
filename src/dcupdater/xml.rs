//! XML configuration files (e.g. `portalapp.xml`)

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{
    ComponentConfigurationReader, ConfigurationError, REFERENCE_PROPERTIES, split_reference_list,
};

/// Location of a portal application's deployment descriptor
pub const PORTAL_APPLICATION_LOCATION: &str = "dist/PORTAL-INF/portalapp.xml";

const PROPERTY: &[u8] = b"property";
const NAME: &str = "name";
const VALUE: &str = "value";

/// Reads references from `<property name="..." value="a, b"/>` elements
#[derive(Debug, Clone)]
pub struct XmlConfigurationReader {
    location: String,
}

impl Default for XmlConfigurationReader {
    fn default() -> Self {
        Self::new(PORTAL_APPLICATION_LOCATION)
    }
}

impl XmlConfigurationReader {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl ComponentConfigurationReader for XmlConfigurationReader {
    fn configuration_location(&self) -> &str {
        &self.location
    }

    fn raw_references(&self, content: &str) -> Result<Vec<String>, ConfigurationError> {
        let mut reader = Reader::from_str(content);
        let mut references = Vec::new();
        let mut depth = 0usize;
        let mut root_seen = false;

        loop {
            let event = reader.read_event()?;
            match &event {
                Event::Start(_) => {
                    depth += 1;
                    root_seen = true;
                }
                Event::Empty(_) => root_seen = true,
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Eof if depth > 0 => return Err(ConfigurationError::UnexpectedEof),
                Event::Eof if !root_seen => return Err(ConfigurationError::MissingRoot),
                Event::Eof => break,
                _ => {}
            }

            if let Event::Start(element) | Event::Empty(element) = &event
                && element.local_name().as_ref() == PROPERTY
            {
                references.extend(property_references(element)?);
            }
        }

        Ok(references)
    }
}

/// References listed by a `property` element, if it names a reference property
fn property_references(element: &BytesStart<'_>) -> Result<Vec<String>, ConfigurationError> {
    let Some(name) = element.try_get_attribute(NAME)? else {
        return Ok(Vec::new());
    };
    if !REFERENCE_PROPERTIES.contains(&&*name.unescape_value()?) {
        return Ok(Vec::new());
    }

    match element.try_get_attribute(VALUE)? {
        Some(value) => Ok(split_reference_list(&value.unescape_value()?).collect()),
        None => Ok(Vec::new()),
    }
}
