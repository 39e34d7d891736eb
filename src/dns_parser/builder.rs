use log::warn;

use super::cursor::Writer;
use super::header::HEADER_SIZE;
use super::{Error, Header, Message, Question, ResourceRecord, ResponseCode};

/// Size of the buffer `Message::build` encodes into
pub const MAX_PACKET_SIZE: usize = 1500;

impl Message {
    /// Returns the encoded packet
    ///
    /// The message is written into a `MAX_PACKET_SIZE` buffer; a message
    /// that does not fit fails with `Error::BufferFull`.
    pub fn build(&self) -> Result<Vec<u8>, Error> {
        let mut buf = [0u8; MAX_PACKET_SIZE];
        let len = self.write_to(&mut buf)?;
        Ok(buf[..len].to_vec())
    }

    /// Writes the packet into `buf` and returns the number of bytes used
    ///
    /// The section counts in the written header are those of the records
    /// actually written, not the ones in `self.header`. A record whose type
    /// cannot be encoded is left out and the response code becomes
    /// `NotImplemented`; every other error aborts the whole packet.
    pub fn write_to(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let mut writer = Writer::new(buf);
        let mut header = Header {
            questions: count(self.questions.len())?,
            answers: 0,
            nameservers: 0,
            additional: 0,
            ..self.header
        };
        // Placeholder, the final header is written once the counts are known
        header.write(&mut writer)?;

        for question in &self.questions {
            question.write_to(&mut writer)?;
        }

        let mut skipped = false;
        header.answers = write_section(&mut writer, &self.answers, &mut skipped)?;
        header.nameservers = write_section(&mut writer, &self.nameservers, &mut skipped)?;
        header.additional = write_section(&mut writer, &self.additional, &mut skipped)?;
        if skipped {
            header.response_code = ResponseCode::NotImplemented;
        }

        let len = writer.position();
        writer.truncate(0);
        header.write(&mut writer)?;
        debug_assert_eq!(writer.position(), HEADER_SIZE);
        Ok(len)
    }
}

fn count(len: usize) -> Result<u16, Error> {
    if len > u16::max_value() as usize {
        return Err(Error::BufferFull);
    }
    Ok(len as u16)
}

fn write_section(
    writer: &mut Writer,
    records: &[ResourceRecord],
    skipped: &mut bool,
) -> Result<u16, Error> {
    let mut written = 0;
    for rr in records {
        match rr.write_to(writer) {
            Ok(()) => written += 1,
            Err(Error::UnsupportedRRType(typ)) => {
                warn!("leaving out record {} of unsupported type {}", rr.name, typ);
                *skipped = true;
            }
            Err(err) => return Err(err),
        }
    }
    count(written)
}

impl Question {
    pub fn write_to(&self, writer: &mut Writer) -> Result<(), Error> {
        self.qname.write_to(writer)?;
        writer.write_u16(self.qtype.into())?;
        writer.write_u16(self.qclass.into())
    }
}

impl ResourceRecord {
    /// Writes the whole record, computing RDLENGTH from the written RDATA
    ///
    /// On failure nothing of the record is left in the writer.
    pub fn write_to(&self, writer: &mut Writer) -> Result<(), Error> {
        let start = writer.position();
        let result = self.write_fields(writer);
        if result.is_err() {
            writer.truncate(start);
        }
        result
    }

    fn write_fields(&self, writer: &mut Writer) -> Result<(), Error> {
        self.name.write_to(writer)?;
        writer.write_u16(self.typ().into())?;
        writer.write_u16(self.cls.into())?;
        writer.write_u32(self.ttl)?;

        let size_offset = writer.position();
        writer.write_u16(0)?;

        let data_offset = writer.position();
        self.data.write_to(writer)?;
        let data_size = writer.position() - data_offset;

        writer.patch_u16(size_offset, data_size as u16)
    }
}
