use std::net::{Ipv4Addr, Ipv6Addr};

use super::cursor::Writer;
use super::{Error, Name, Type};

/// Default SOA refresh interval from RFC 1537, 8 hours
pub const DEFAULT_REFRESH: u32 = 60 * 60 * 8;
/// Default SOA retry interval from RFC 1537, 2 hours
pub const DEFAULT_RETRY: u32 = 60 * 60 * 2;
/// Default SOA expire interval from RFC 1537, 7 days
pub const DEFAULT_EXPIRE: u32 = 60 * 60 * 24 * 7;
/// Default SOA minimum TTL from RFC 1537, 1 day
pub const DEFAULT_MINIMUM: u32 = 60 * 60 * 24;

/// Longest character-string a TXT record can carry in one piece
const MAX_CHARACTER_STRING: usize = 255;

/// Start of authority data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soa {
    /// primary name server for the zone
    pub mname: Name,
    /// mailbox of the person responsible for the zone
    pub rname: Name,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl Soa {
    /// Creates SOA data with the RFC 1537 timer defaults
    pub fn new<M: Into<Name>, R: Into<Name>>(mname: M, rname: R, serial: u32) -> Soa {
        Soa {
            mname: mname.into(),
            rname: rname.into(),
            serial,
            refresh: DEFAULT_REFRESH,
            retry: DEFAULT_RETRY,
            expire: DEFAULT_EXPIRE,
            minimum: DEFAULT_MINIMUM,
        }
    }
}

/// The enumeration that represents known types of DNS resource records data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    CNAME(Name),
    NS(Name),
    PTR(Name),
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    SOA(Soa),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: Name,
    },
    MX {
        preference: u16,
        exchange: Name,
    },
    TXT(Vec<u8>),
    // Anything we can't produce on the wire
    Unknown {
        typ: Type,
        data: Vec<u8>,
    },
}

impl RData {
    pub fn typ(&self) -> Type {
        match *self {
            RData::CNAME(..) => Type::CNAME,
            RData::NS(..) => Type::NS,
            RData::PTR(..) => Type::PTR,
            RData::A(..) => Type::A,
            RData::AAAA(..) => Type::AAAA,
            RData::SOA(..) => Type::SOA,
            RData::SRV { .. } => Type::SRV,
            RData::MX { .. } => Type::MX,
            RData::TXT(..) => Type::TXT,
            RData::Unknown { typ, .. } => typ,
        }
    }

    /// Writes the RDATA part of a record, without the length prefix
    ///
    /// On failure the writer is left where it was.
    pub fn write_to(&self, writer: &mut Writer) -> Result<(), Error> {
        let start = writer.position();
        let result = self.write_payload(writer);
        if result.is_err() {
            writer.truncate(start);
        }
        result
    }

    fn write_payload(&self, writer: &mut Writer) -> Result<(), Error> {
        match *self {
            RData::CNAME(ref name) | RData::NS(ref name) | RData::PTR(ref name) => {
                name.write_to(writer)
            }
            RData::A(ip) => writer.write_bytes(&ip.octets()),
            RData::AAAA(ip) => writer.write_bytes(&ip.octets()),
            RData::SOA(ref soa) => {
                soa.mname.write_to(writer)?;
                soa.rname.write_to(writer)?;
                writer.write_u32(soa.serial)?;
                writer.write_u32(soa.refresh)?;
                writer.write_u32(soa.retry)?;
                writer.write_u32(soa.expire)?;
                writer.write_u32(soa.minimum)
            }
            RData::SRV {
                priority,
                weight,
                port,
                ref target,
            } => {
                writer.write_u16(priority)?;
                writer.write_u16(weight)?;
                writer.write_u16(port)?;
                target.write_to(writer)
            }
            RData::MX {
                preference,
                ref exchange,
            } => {
                writer.write_u16(preference)?;
                exchange.write_to(writer)
            }
            RData::TXT(ref text) => {
                if text.is_empty() {
                    return writer.write_u8(0);
                }
                for chunk in text.chunks(MAX_CHARACTER_STRING) {
                    writer.write_u8(chunk.len() as u8)?;
                    writer.write_bytes(chunk)?;
                }
                Ok(())
            }
            RData::Unknown { typ, .. } => Err(Error::UnsupportedRRType(typ.into())),
        }
    }
}
