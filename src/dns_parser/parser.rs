use super::cursor::Reader;
use super::{Class, Edns, Error, Header, Message, Name, Question, Type};

impl Message {
    /// Parse a request packet
    ///
    /// Only the header, the questions and an optional trailing OPT record
    /// are decoded. A packet that claims answer or authority records is
    /// rejected, since those never belong in a request.
    pub fn parse(data: &[u8]) -> Result<Message, Error> {
        let mut reader = Reader::new(data);
        let header = Header::parse(&mut reader)?;
        if header.answers != 0 || header.nameservers != 0 {
            return Err(Error::UnexpectedRecords);
        }

        // the smallest question is a root name plus type and class
        let room = reader.remaining() / 5;
        let mut questions = Vec::with_capacity((header.questions as usize).min(room));
        for _ in 0..header.questions {
            questions.push(Question::parse(&mut reader)?);
        }

        let edns = Edns::probe(&mut reader);

        Ok(Message {
            header,
            questions,
            edns,
            ..Message::default()
        })
    }
}

impl Question {
    pub fn parse(reader: &mut Reader) -> Result<Question, Error> {
        let qname = Name::scan(reader)?;
        let qtype = Type::from(reader.read_u16()?);
        let qclass = Class::from(reader.read_u16()?);
        Ok(Question {
            qname,
            qtype,
            qclass,
        })
    }
}

#[cfg(test)]
mod test {
    use std::net::Ipv4Addr;

    use super::{Class, Error, Message, Type};
    use crate::dns_parser::{Opcode, ResponseCode};

    #[test]
    fn parse_example_query() {
        let query = b"\x06%\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x07example\x03com\x00\x00\x01\x00\x01";
        let packet = Message::parse(query).unwrap();
        assert_eq!(packet.header.id, 1573);
        assert!(packet.header.query);
        assert_eq!(packet.header.opcode, Opcode::StandardQuery);
        assert!(packet.header.recursion_desired);
        assert_eq!(packet.header.response_code, ResponseCode::NoError);
        assert_eq!(packet.questions.len(), 1);
        assert_eq!(packet.questions[0].qname.as_str(), "example.com");
        assert_eq!(packet.questions[0].qtype, Type::A);
        assert_eq!(packet.questions[0].qclass, Class::IN);
        assert!(packet.answers.is_empty());
        assert_eq!(packet.edns, None);
    }

    #[test]
    fn questions_keep_wire_order() {
        let query = b"\x00\x07\x01\x00\x00\x02\x00\x00\x00\x00\x00\x00\
                      \x03foo\x03bar\x03com\x00\x00\x01\x00\x01\
                      \x03foo\x03bar\x03com\x00\x00\x1c\x00\x01";
        let packet = Message::parse(query).unwrap();
        assert_eq!(packet.questions.len(), 2);
        assert_eq!(packet.questions[0].qtype, Type::A);
        assert_eq!(packet.questions[1].qtype, Type::AAAA);
    }

    #[test]
    fn unknown_qtype_is_kept() {
        let query = b"\x00\x01\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x01a\x00\x00\x63\x00\x03";
        let packet = Message::parse(query).unwrap();
        assert_eq!(packet.questions[0].qtype, Type::Unknown(99));
        assert_eq!(packet.questions[0].qclass, Class::CH);
    }

    #[test]
    fn answers_in_request() {
        let query = b"\x00\x01\x00\x00\x00\x01\x00\x01\x00\x00\x00\x00\
                      \x01a\x00\x00\x01\x00\x01";
        assert_eq!(Message::parse(query).unwrap_err(), Error::UnexpectedRecords);
        let query = b"\x00\x01\x00\x00\x00\x00\x00\x00\x00\x01\x00\x00";
        assert_eq!(Message::parse(query).unwrap_err(), Error::UnexpectedRecords);
    }

    #[test]
    fn missing_question() {
        let query = b"\x00\x01\x00\x00\x00\x02\x00\x00\x00\x00\x00\x00\
                      \x01a\x00\x00\x01\x00\x01";
        assert_eq!(Message::parse(query).unwrap_err(), Error::Truncated);
    }

    #[test]
    fn question_cut_in_qclass() {
        let query = b"\x00\x01\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x01a\x00\x00\x01\x00";
        assert_eq!(Message::parse(query).unwrap_err(), Error::Truncated);
    }

    #[test]
    fn question_count_beyond_packet() {
        let query = b"\x00\x01\x00\x00\xff\xff\x00\x00\x00\x00\x00\x00";
        assert_eq!(Message::parse(query).unwrap_err(), Error::Truncated);
    }

    #[test]
    fn short_packet() {
        assert_eq!(Message::parse(b"\x00\x01\x00").unwrap_err(), Error::Truncated);
        assert_eq!(Message::parse(b"").unwrap_err(), Error::Truncated);
    }

    #[test]
    fn request_with_client_subnet() {
        let query = b"\x12\x34\x01\x20\x00\x01\x00\x00\x00\x00\x00\x01\
                      \x03foo\x03bar\x03com\x00\x00\x01\x00\x01\
                      \x00\x00\x29\x10\x00\x00\x00\x00\x00\x00\x0c\
                      \x00\x08\x00\x08\x00\x01\x20\x00\xc0\x00\x02\x05";
        let packet = Message::parse(query).unwrap();
        assert_eq!(packet.header.additional, 1);
        assert_eq!(packet.client_subnet(), Some(Ipv4Addr::new(192, 0, 2, 5)));
    }

    #[test]
    fn client_subnet_of_other_family() {
        let query = b"\x12\x34\x01\x20\x00\x01\x00\x00\x00\x00\x00\x01\
                      \x03foo\x03bar\x03com\x00\x00\x01\x00\x01\
                      \x00\x00\x29\x10\x00\x00\x00\x00\x00\x00\x0c\
                      \x00\x08\x00\x08\x00\x02\x20\x00\xc0\x00\x02\x05";
        let packet = Message::parse(query).unwrap();
        let subnet = packet.edns.unwrap().client_subnet.unwrap();
        assert_eq!(subnet.family, 2);
        assert_eq!(subnet.addr, Ipv4Addr::new(192, 0, 2, 5));
    }

    #[test]
    fn opt_with_short_rdata() {
        let query = b"\x12\x34\x01\x20\x00\x01\x00\x00\x00\x00\x00\x01\
                      \x03foo\x03bar\x03com\x00\x00\x01\x00\x01\
                      \x00\x00\x29\x04\xd0\x00\x00\x00\x00\x00\x04\
                      \x00\x08\x00\x00";
        let packet = Message::parse(query).unwrap();
        assert_eq!(packet.edns.as_ref().map(|e| e.udp_payload_size), Some(1232));
        assert_eq!(packet.client_subnet(), None);
    }
}
