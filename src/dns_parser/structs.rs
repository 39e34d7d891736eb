use std::net::Ipv4Addr;

use super::{Class, Edns, Header, Name, RData, Type};

/// DNS message as it travels through the responder
///
/// Built by `Message::parse` from a request, extended in place by the
/// resolver and turned back into bytes with `Message::build`.
#[derive(Debug, Clone, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub nameservers: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
    /// EDNS0 data found after the questions, if any
    pub edns: Option<Edns>,
}

impl Message {
    /// The client subnet announced through EDNS0, if the request had one
    pub fn client_subnet(&self) -> Option<Ipv4Addr> {
        self.edns
            .as_ref()
            .and_then(|edns| edns.client_subnet.as_ref())
            .map(|subnet| subnet.addr)
    }
}

/// A parsed chunk of data in the Query section of the packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: Name,
    pub qtype: Type,
    pub qclass: Class,
}

impl Question {
    pub fn new<N: Into<Name>>(qname: N, qtype: Type, qclass: Class) -> Question {
        Question {
            qname: qname.into(),
            qtype,
            qclass,
        }
    }
}

/// A single DNS record
///
/// The record type is not stored separately, it always follows the
/// variant of `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Name,
    pub cls: Class,
    pub ttl: u32,
    pub data: RData,
}

impl ResourceRecord {
    pub fn new<N: Into<Name>>(name: N, cls: Class, ttl: u32, data: RData) -> ResourceRecord {
        ResourceRecord {
            name: name.into(),
            cls,
            ttl,
            data,
        }
    }

    pub fn typ(&self) -> Type {
        self.data.typ()
    }
}
