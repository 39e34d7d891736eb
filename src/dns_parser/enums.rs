use std::fmt;

/// The TYPE value of a resource record or the QTYPE of a question
///
/// Codes that have no variant of their own are kept in `Unknown` so that
/// any question can be decoded and echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// a host address
    A,
    /// an authoritative name server
    NS,
    /// the canonical name for an alias
    CNAME,
    /// marks the start of a zone of authority
    SOA,
    /// a domain name pointer
    PTR,
    /// mail exchange
    MX,
    /// text strings
    TXT,
    /// IPv6 host address (RFC 3596)
    AAAA,
    /// service record (RFC 2782)
    SRV,
    /// EDNS0 pseudo-record (RFC 6891)
    OPT,
    /// incremental zone transfer
    IXFR,
    /// entire zone transfer
    AXFR,
    /// mailbox-related records
    MAILB,
    /// mail agent records
    MAILA,
    /// all records
    All,
    Unknown(u16),
}

impl From<u16> for Type {
    fn from(code: u16) -> Type {
        match code {
            1 => Type::A,
            2 => Type::NS,
            5 => Type::CNAME,
            6 => Type::SOA,
            12 => Type::PTR,
            15 => Type::MX,
            16 => Type::TXT,
            28 => Type::AAAA,
            33 => Type::SRV,
            41 => Type::OPT,
            251 => Type::IXFR,
            252 => Type::AXFR,
            253 => Type::MAILB,
            254 => Type::MAILA,
            255 => Type::All,
            code => Type::Unknown(code),
        }
    }
}

impl From<Type> for u16 {
    fn from(typ: Type) -> u16 {
        match typ {
            Type::A => 1,
            Type::NS => 2,
            Type::CNAME => 5,
            Type::SOA => 6,
            Type::PTR => 12,
            Type::MX => 15,
            Type::TXT => 16,
            Type::AAAA => 28,
            Type::SRV => 33,
            Type::OPT => 41,
            Type::IXFR => 251,
            Type::AXFR => 252,
            Type::MAILB => 253,
            Type::MAILA => 254,
            Type::All => 255,
            Type::Unknown(code) => code,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Type::All => fmt.write_str("*"),
            Type::Unknown(code) => write!(fmt, "TYPE{}", code),
            typ => fmt::Debug::fmt(&typ, fmt),
        }
    }
}

/// The CLASS value of a resource record or the QCLASS of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// the Internet
    IN,
    /// the CSNET class (obsolete)
    CS,
    /// the CHAOS class
    CH,
    /// Hesiod
    HS,
    /// any class
    Any,
    Unknown(u16),
}

impl From<u16> for Class {
    fn from(code: u16) -> Class {
        match code {
            1 => Class::IN,
            2 => Class::CS,
            3 => Class::CH,
            4 => Class::HS,
            255 => Class::Any,
            code => Class::Unknown(code),
        }
    }
}

impl From<Class> for u16 {
    fn from(cls: Class) -> u16 {
        match cls {
            Class::IN => 1,
            Class::CS => 2,
            Class::CH => 3,
            Class::HS => 4,
            Class::Any => 255,
            Class::Unknown(code) => code,
        }
    }
}

/// The OPCODE value according to RFC 1035
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    StandardQuery,
    InverseQuery,
    ServerStatusRequest,
    Notify,
    Update,
    Reserved(u8),
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Opcode {
        match code & 0x0f {
            0 => Opcode::StandardQuery,
            1 => Opcode::InverseQuery,
            2 => Opcode::ServerStatusRequest,
            4 => Opcode::Notify,
            5 => Opcode::Update,
            code => Opcode::Reserved(code),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        match opcode {
            Opcode::StandardQuery => 0,
            Opcode::InverseQuery => 1,
            Opcode::ServerStatusRequest => 2,
            Opcode::Notify => 4,
            Opcode::Update => 5,
            Opcode::Reserved(code) => code & 0x0f,
        }
    }
}

/// The RCODE value according to RFC 1035
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Reserved(u8),
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> ResponseCode {
        match code & 0x0f {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            code => ResponseCode::Reserved(code),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(rcode: ResponseCode) -> u8 {
        match rcode {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Reserved(code) => code & 0x0f,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Class, Opcode, ResponseCode, Type};

    #[test]
    fn type_codes() {
        for code in 0..=u16::max_value() {
            assert_eq!(u16::from(Type::from(code)), code);
        }
        assert_eq!(Type::from(28), Type::AAAA);
        assert_eq!(Type::from(99), Type::Unknown(99));
        assert_eq!(Type::SOA.to_string(), "SOA");
        assert_eq!(Type::Unknown(99).to_string(), "TYPE99");
    }

    #[test]
    fn class_codes() {
        assert_eq!(Class::from(1), Class::IN);
        assert_eq!(u16::from(Class::from(254)), 254);
    }

    #[test]
    fn four_bit_codes() {
        for code in 0..16u8 {
            assert_eq!(u8::from(Opcode::from(code)), code);
            assert_eq!(u8::from(ResponseCode::from(code)), code);
        }
        assert_eq!(ResponseCode::from(4), ResponseCode::NotImplemented);
        assert_eq!(Opcode::from(3), Opcode::Reserved(3));
    }
}
