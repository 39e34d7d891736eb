use std::net::Ipv4Addr;

use super::cursor::Reader;
use super::{Error, Type};

/// EDNS0 option code of the client subnet option (RFC 7871)
pub const CLIENT_SUBNET: u16 = 8;

/// Address family number of IPv4 in the client subnet option
pub const FAMILY_IPV4: u16 = 1;

/// RDATA needed to hold one client subnet option with an IPv4 address
const MIN_SUBNET_RDLEN: u16 = 12;

/// Option length needed to carry the address after family and masks
const MIN_SUBNET_OPTLEN: u16 = 7;

/// The EDNS0 pseudo-record of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edns {
    /// Largest UDP payload the requester can reassemble (the OPT class)
    pub udp_payload_size: u16,
    pub extended_rcode: u8,
    pub version: u8,
    pub flags: u16,
    pub client_subnet: Option<ClientSubnet>,
}

/// Client network announced in the client subnet option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSubnet {
    /// address family as announced, only `FAMILY_IPV4` carries a real
    /// IPv4 address in `addr`
    pub family: u16,
    pub source_prefix_len: u8,
    pub scope_prefix_len: u8,
    pub addr: Ipv4Addr,
}

impl Edns {
    /// Looks for an OPT record at the reader's position
    ///
    /// This never fails: a missing or cut short OPT record only means that
    /// there is less EDNS0 data to report. Everything read before the data
    /// ran out is kept.
    pub fn probe(reader: &mut Reader) -> Option<Edns> {
        let mut edns = None;
        // Running out of data is the normal way for this to end
        let _ = Edns::scan(reader, &mut edns);
        edns
    }

    fn scan(reader: &mut Reader, edns: &mut Option<Edns>) -> Result<(), Error> {
        let owner = reader.read_u8()?;
        let typ = Type::from(reader.read_u16()?);
        if owner != 0 || typ != Type::OPT {
            return Ok(());
        }

        let udp_payload_size = reader.read_u16()?;
        let extended_rcode = reader.read_u8()?;
        let version = reader.read_u8()?;
        let flags = reader.read_u16()?;
        let rdlen = reader.read_u16()?;
        let edns = edns.get_or_insert(Edns {
            udp_payload_size,
            extended_rcode,
            version,
            flags,
            client_subnet: None,
        });

        if rdlen < MIN_SUBNET_RDLEN {
            return Ok(());
        }
        let code = reader.read_u16()?;
        let optlen = reader.read_u16()?;
        let family = reader.read_u16()?;
        let source_prefix_len = reader.read_u8()?;
        let scope_prefix_len = reader.read_u8()?;
        if code == CLIENT_SUBNET && optlen >= MIN_SUBNET_OPTLEN {
            let addr = Ipv4Addr::from(reader.read_u32()?);
            edns.client_subnet = Some(ClientSubnet {
                family,
                source_prefix_len,
                scope_prefix_len,
                addr,
            });
        }
        Ok(())
    }
}
