use std::fmt;

use super::{Message, Question, RData, ResourceRecord};

impl fmt::Display for Question {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} {:?} {}", self.qname, self.qclass, self.qtype)
    }
}

impl fmt::Display for RData {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RData::CNAME(ref name) | RData::NS(ref name) | RData::PTR(ref name) => {
                write!(fmt, "{}", name)
            }
            RData::A(ip) => write!(fmt, "{}", ip),
            RData::AAAA(ip) => write!(fmt, "{}", ip),
            RData::SOA(ref soa) => write!(
                fmt,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
            RData::SRV {
                priority,
                weight,
                port,
                ref target,
            } => write!(fmt, "{} {} {} {}", priority, weight, port, target),
            RData::MX {
                preference,
                ref exchange,
            } => write!(fmt, "{} {}", preference, exchange),
            RData::TXT(ref text) => write!(fmt, "{:?}", String::from_utf8_lossy(text)),
            RData::Unknown { ref data, .. } => write!(fmt, "\\# {}", data.len()),
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{} {} {:?} {} {}",
            self.name,
            self.ttl,
            self.cls,
            self.typ(),
            self.data
        )
    }
}

impl fmt::Display for Message {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let header = &self.header;
        write!(
            fmt,
            "{} id {} {:?} {:?}",
            if header.query { "query" } else { "response" },
            header.id,
            header.opcode,
            header.response_code
        )?;
        for (flag, set) in &[
            ("aa", header.authoritative),
            ("tc", header.truncated),
            ("rd", header.recursion_desired),
            ("ra", header.recursion_available),
        ] {
            if *set {
                write!(fmt, " {}", flag)?;
            }
        }
        if let Some(addr) = self.client_subnet() {
            write!(fmt, " client-subnet {}", addr)?;
        }
        for question in &self.questions {
            write!(fmt, "\n  ? {}", question)?;
        }
        let sections = [
            ("an", &self.answers),
            ("ns", &self.nameservers),
            ("ar", &self.additional),
        ];
        for &(section, records) in sections.iter() {
            for rr in records.iter() {
                write!(fmt, "\n  {} {}", section, rr)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::net::Ipv4Addr;

    use crate::dns_parser::{Class, Message, Question, RData, ResourceRecord, Soa, Type};

    #[test]
    fn render_records() {
        let rr = ResourceRecord::new(
            "foo.bar.com",
            Class::IN,
            3600,
            RData::A(Ipv4Addr::new(192, 168, 1, 1)),
        );
        assert_eq!(rr.to_string(), "foo.bar.com 3600 IN A 192.168.1.1");
        let soa = RData::SOA(Soa::new("ns1.b.com", "root.b.com", 7));
        assert_eq!(
            soa.to_string(),
            "ns1.b.com root.b.com 7 28800 7200 604800 86400"
        );
    }

    #[test]
    fn render_message() {
        let mut message = Message::default();
        message.header.id = 42;
        message.header.recursion_desired = true;
        message
            .questions
            .push(Question::new("foo.bar.com", Type::AAAA, Class::IN));
        assert_eq!(
            message.to_string(),
            "query id 42 StandardQuery NoError rd\n  ? foo.bar.com IN AAAA"
        );
    }
}
