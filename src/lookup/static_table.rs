use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};

use multimap::MultiMap;

use crate::dns_parser::{Name, RData, Soa, Type};
use crate::lookup::Lookup;

/// A fixed table of records, built once and then only read
///
/// Records registered for a name answer questions about that name. Records
/// registered with `with_default` answer questions about any name that has
/// no record of that type.
#[derive(Clone, Debug, Default)]
pub struct StaticLookup {
    by_name: MultiMap<Name, RData>,
    defaults: HashMap<Type, RData>,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table this responder has always served
    ///
    /// `foo.bar.com` has an IPv4 and an IPv6 address, and every name is
    /// given the same alias and start of authority.
    pub fn reference() -> Self {
        Self::new()
            .with_record("foo.bar.com", RData::A(Ipv4Addr::new(192, 168, 1, 1)))
            .with_record(
                "foo.bar.com",
                RData::AAAA(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0)),
            )
            .with_default(RData::CNAME(Name::from_str("aa.b.com")))
            .with_default(RData::SOA(Soa::new("ns1.b.com", "root.b.com", 2017182013)))
    }

    pub fn with_record<N: Into<Name>>(mut self, name: N, data: RData) -> Self {
        self.insert(name, data);
        self
    }

    pub fn with_default(mut self, data: RData) -> Self {
        self.defaults.insert(data.typ(), data);
        self
    }

    pub fn insert<N: Into<Name>>(&mut self, name: N, data: RData) {
        self.by_name.insert(name.into(), data);
    }
}

impl Lookup for StaticLookup {
    fn lookup(&self, name: &Name, typ: Type) -> Option<RData> {
        self.by_name
            .get_vec(name)
            .and_then(|records| records.iter().find(|data| data.typ() == typ))
            .or_else(|| self.defaults.get(&typ))
            .cloned()
    }
}
