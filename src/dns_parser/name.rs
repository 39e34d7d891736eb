use std::fmt;
use std::hash;
use std::str::from_utf8;

use super::cursor::{Reader, Writer};
use super::Error;

/// Longest label allowed between two dots
pub const MAX_LABEL_LEN: usize = 63;
/// Longest domain name allowed, in its dotted form
pub const MAX_NAME_LEN: usize = 255;

/// A domain name in dotted form, e.g. `foo.bar.com`
///
/// The root name is the empty string. Names compare and hash ignoring
/// ASCII case, the way DNS matches them.
#[derive(Debug, Clone, Default)]
pub struct Name(String);

impl Name {
    /// Reads a sequence of labels terminated by a zero-length label
    ///
    /// Compression pointers are not supported and are reported as
    /// `Error::MalformedName`.
    pub fn scan(reader: &mut Reader) -> Result<Name, Error> {
        let mut name = String::new();
        loop {
            let len = reader.read_u8()? as usize;
            if len == 0 {
                return Ok(Name(name));
            }
            if len > MAX_LABEL_LEN || len > reader.remaining() {
                return Err(Error::MalformedName);
            }
            let label = reader.read_bytes(len)?;
            let label = from_utf8(label).map_err(|_| Error::MalformedName)?;
            if !name.is_empty() {
                name.push('.');
            }
            name.push_str(label);
            if name.len() > MAX_NAME_LEN {
                return Err(Error::MalformedName);
            }
        }
    }

    pub fn from_str<T: Into<String>>(name: T) -> Name {
        let mut name = name.into();
        if name.ends_with('.') {
            name.pop();
        }
        Name(name)
    }

    pub fn root() -> Name {
        Name(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        let labels = if self.is_root() {
            None
        } else {
            Some(self.0.split('.'))
        };
        labels.into_iter().flatten()
    }

    /// Number of bytes `write_to` produces for this name
    pub fn wire_len(&self) -> usize {
        self.labels().map(|label| label.len() + 1).sum::<usize>() + 1
    }

    fn validate(&self) -> Result<(), Error> {
        if self.0.len() > MAX_NAME_LEN {
            return Err(Error::NameTooLong);
        }
        for label in self.labels() {
            if label.is_empty() {
                return Err(Error::MalformedName);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(Error::LabelTooLong);
            }
        }
        Ok(())
    }

    /// Writes the name as length-prefixed labels followed by the root label
    ///
    /// The name is validated before anything is written, and a name that
    /// does not fit leaves the writer where it was.
    pub fn write_to(&self, writer: &mut Writer) -> Result<(), Error> {
        self.validate()?;
        let start = writer.position();
        let result = self.write_labels(writer);
        if result.is_err() {
            writer.truncate(start);
        }
        result
    }

    fn write_labels(&self, writer: &mut Writer) -> Result<(), Error> {
        for label in self.labels() {
            writer.write_u8(label.len() as u8)?;
            writer.write_bytes(label.as_bytes())?;
        }
        writer.write_u8(0)
    }
}

impl<'a> From<&'a str> for Name {
    fn from(name: &'a str) -> Name {
        Name::from_str(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Name {
        Name::from_str(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            fmt.write_str(".")
        } else {
            fmt.write_str(&self.0)
        }
    }
}

impl hash::Hash for Name {
    fn hash<H>(&self, state: &mut H)
    where
        H: hash::Hasher,
    {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0);
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Name) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Name {}
