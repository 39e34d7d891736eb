use super::cursor::{Reader, Writer};
use super::{Error, Opcode, ResponseCode};

mod flag {
    pub const QUERY: u16 = 0b1000_0000_0000_0000;
    pub const OPCODE_MASK: u16 = 0b0111_1000_0000_0000;
    pub const AUTHORITATIVE: u16 = 0b0000_0100_0000_0000;
    pub const TRUNCATED: u16 = 0b0000_0010_0000_0000;
    pub const RECURSION_DESIRED: u16 = 0b0000_0001_0000_0000;
    pub const RECURSION_AVAILABLE: u16 = 0b0000_0000_1000_0000;
    pub const RESPONSE_CODE_MASK: u16 = 0b0000_0000_0000_1111;
}

/// Size of the fixed header at the start of every packet
pub const HEADER_SIZE: usize = 12;

/// Represents parsed header of the packet
///
/// The section counts are what the packet claimed. When a message is
/// written they are replaced by the lengths of its record lists.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Header {
    pub id: u16,
    /// `true` for a query (QR bit clear), `false` for a response
    pub query: bool,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: ResponseCode,
    pub questions: u16,
    pub answers: u16,
    pub nameservers: u16,
    pub additional: u16,
}

impl Default for Header {
    fn default() -> Header {
        Header {
            id: 0,
            query: true,
            opcode: Opcode::StandardQuery,
            authoritative: false,
            truncated: false,
            recursion_desired: false,
            recursion_available: false,
            response_code: ResponseCode::NoError,
            questions: 0,
            answers: 0,
            nameservers: 0,
            additional: 0,
        }
    }
}

impl Header {
    pub fn parse(reader: &mut Reader) -> Result<Header, Error> {
        if reader.remaining() < HEADER_SIZE {
            return Err(Error::Truncated);
        }
        let id = reader.read_u16()?;
        let mut header = Header {
            id,
            ..Header::default()
        };
        header.set_flags(reader.read_u16()?);
        header.questions = reader.read_u16()?;
        header.answers = reader.read_u16()?;
        header.nameservers = reader.read_u16()?;
        header.additional = reader.read_u16()?;
        Ok(header)
    }

    /// Returns the packed 16-bit flags word
    ///
    /// The three reserved bits between RA and RCODE are always zero.
    pub fn flags(&self) -> u16 {
        let mut flags = 0;
        if !self.query {
            flags |= flag::QUERY;
        }
        flags |= (u16::from(u8::from(self.opcode)) << 11) & flag::OPCODE_MASK;
        if self.authoritative {
            flags |= flag::AUTHORITATIVE;
        }
        if self.truncated {
            flags |= flag::TRUNCATED;
        }
        if self.recursion_desired {
            flags |= flag::RECURSION_DESIRED;
        }
        if self.recursion_available {
            flags |= flag::RECURSION_AVAILABLE;
        }
        flags |= u16::from(u8::from(self.response_code)) & flag::RESPONSE_CODE_MASK;
        flags
    }

    pub fn set_flags(&mut self, flags: u16) {
        self.query = flags & flag::QUERY == 0;
        self.opcode = Opcode::from(((flags & flag::OPCODE_MASK) >> 11) as u8);
        self.authoritative = flags & flag::AUTHORITATIVE != 0;
        self.truncated = flags & flag::TRUNCATED != 0;
        self.recursion_desired = flags & flag::RECURSION_DESIRED != 0;
        self.recursion_available = flags & flag::RECURSION_AVAILABLE != 0;
        self.response_code = ResponseCode::from((flags & flag::RESPONSE_CODE_MASK) as u8);
    }

    /// Write a header to a buffer
    pub fn write(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u16(self.id)?;
        writer.write_u16(self.flags())?;
        writer.write_u16(self.questions)?;
        writer.write_u16(self.answers)?;
        writer.write_u16(self.nameservers)?;
        writer.write_u16(self.additional)
    }
}
