use std::sync::Arc;

use log::debug;

use crate::dns_parser::{Message, Question, RData, ResourceRecord, ResponseCode, Type};
use crate::lookup::Lookup;

/// TTL of every answer, in seconds
pub const DEFAULT_TTL: u32 = 60 * 60;

/// Answers questions from a `Lookup`
///
/// Only A, AAAA, CNAME and SOA questions are answered. Any other type turns
/// the response code into `NotImplemented`. A supported question the lookup
/// has nothing for gets no answer and leaves the response code alone, so a
/// response to an unknown name is an empty `NoError`.
#[derive(Clone, Debug)]
pub struct Resolver {
    lookup: Arc<dyn Lookup>,
}

impl Resolver {
    pub fn new(lookup: Arc<dyn Lookup>) -> Resolver {
        Resolver { lookup }
    }

    /// Produces answer records for `questions`, in question order
    pub fn answer(&self, questions: &[Question]) -> (Vec<ResourceRecord>, ResponseCode) {
        let mut answers = Vec::with_capacity(questions.len());
        let mut response_code = ResponseCode::NoError;

        for question in questions {
            debug!("query for {}", question);

            match question.qtype {
                Type::A | Type::AAAA | Type::CNAME | Type::SOA => {
                    if let Some(rr) = self.answer_question(question) {
                        answers.push(rr);
                    }
                }
                typ => {
                    debug!("cannot answer question of type {}", typ);
                    response_code = ResponseCode::NotImplemented;
                }
            }
        }

        (answers, response_code)
    }

    fn answer_question(&self, question: &Question) -> Option<ResourceRecord> {
        let data = match self.lookup.lookup(&question.qname, question.qtype) {
            Some(data) if data.typ() == question.qtype => data,
            Some(data) => {
                debug!(
                    "lookup returned {} data for {} question",
                    data.typ(),
                    question.qtype
                );
                return None;
            }
            None => {
                debug!("no {} record for {}", question.qtype, question.qname);
                return None;
            }
        };

        let ttl = match data {
            RData::SOA(ref soa) => DEFAULT_TTL.min(soa.minimum),
            _ => DEFAULT_TTL,
        };

        Some(ResourceRecord {
            name: question.qname.clone(),
            cls: question.qclass,
            ttl,
            data,
        })
    }

    /// Turns a parsed request into the response for it
    ///
    /// Answers are appended to the message and the header is marked as an
    /// authoritative response without recursion.
    pub fn resolve(&self, message: &mut Message) {
        let (answers, response_code) = self.answer(&message.questions);
        message.answers.extend(answers);

        let header = &mut message.header;
        header.query = false;
        header.authoritative = true;
        header.truncated = false;
        header.recursion_available = false;
        header.response_code = response_code;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns_parser::{Class, Name, Soa};
    use crate::lookup::StaticLookup;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn resolver() -> Resolver {
        Resolver::new(Arc::new(StaticLookup::reference()))
    }

    fn request(questions: Vec<Question>) -> Message {
        let mut message = Message::default();
        message.header.id = 0x1234;
        message.header.recursion_desired = true;
        message.header.questions = questions.len() as u16;
        message.questions = questions;
        message
    }

    #[test]
    fn a_question() {
        let mut message = request(vec![Question::new("foo.bar.com", Type::A, Class::IN)]);
        resolver().resolve(&mut message);

        assert_eq!(message.answers.len(), 1);
        let answer = &message.answers[0];
        assert_eq!(answer.name, Name::from_str("foo.bar.com"));
        assert_eq!(answer.cls, Class::IN);
        assert_eq!(answer.ttl, 3600);
        assert_eq!(answer.data, RData::A(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(message.header.response_code, ResponseCode::NoError);
        assert!(!message.header.query);
        assert!(message.header.authoritative);
        assert!(!message.header.recursion_available);
        assert!(message.header.recursion_desired);
    }

    #[test]
    fn truncation_flag_is_cleared() {
        let mut message = request(vec![Question::new("foo.bar.com", Type::A, Class::IN)]);
        message.header.truncated = true;
        resolver().resolve(&mut message);
        assert!(!message.header.truncated);
        assert_eq!(message.answers.len(), 1);
    }

    #[test]
    fn aaaa_question() {
        let questions = vec![Question::new("foo.bar.com", Type::AAAA, Class::IN)];
        let (answers, response_code) = resolver().answer(&questions);
        assert_eq!(answers.len(), 1);
        assert_eq!(
            answers[0].data,
            RData::AAAA(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0))
        );
        assert_eq!(response_code, ResponseCode::NoError);
    }

    #[test]
    fn unknown_name_is_empty_no_error() {
        let mut message = request(vec![Question::new("unknown.example", Type::A, Class::IN)]);
        resolver().resolve(&mut message);
        assert!(message.answers.is_empty());
        assert_eq!(message.header.response_code, ResponseCode::NoError);
    }

    #[test]
    fn unsupported_type_is_not_implemented() {
        let mut message = request(vec![Question::new("foo.bar.com", Type::MX, Class::IN)]);
        resolver().resolve(&mut message);
        assert!(message.answers.is_empty());
        assert_eq!(message.header.response_code, ResponseCode::NotImplemented);
    }

    #[test]
    fn answers_follow_question_order() {
        let questions = vec![
            Question::new("foo.bar.com", Type::AAAA, Class::IN),
            Question::new("foo.bar.com", Type::TXT, Class::IN),
            Question::new("unknown.example", Type::A, Class::IN),
            Question::new("foo.bar.com", Type::A, Class::IN),
            Question::new("alias.example", Type::CNAME, Class::IN),
        ];
        let (answers, response_code) = resolver().answer(&questions);
        let types: Vec<Type> = answers.iter().map(ResourceRecord::typ).collect();
        assert_eq!(types, vec![Type::AAAA, Type::A, Type::CNAME]);
        assert_eq!(answers[2].name, Name::from_str("alias.example"));
        assert_eq!(response_code, ResponseCode::NotImplemented);
    }

    #[test]
    fn soa_ttl_is_capped_by_minimum() {
        let questions = vec![Question::new("bar.com", Type::SOA, Class::IN)];
        let (answers, _) = resolver().answer(&questions);
        assert_eq!(answers[0].ttl, 3600);

        let mut soa = Soa::new("ns1.b.com", "root.b.com", 1);
        soa.minimum = 300;
        let table = StaticLookup::new().with_default(RData::SOA(soa));
        let (answers, _) = Resolver::new(Arc::new(table)).answer(&questions);
        assert_eq!(answers[0].ttl, 300);
    }

    #[derive(Debug)]
    struct WrongType;

    impl Lookup for WrongType {
        fn lookup(&self, _name: &Name, _typ: Type) -> Option<RData> {
            Some(RData::TXT(b"oops".to_vec()))
        }
    }

    #[test]
    fn mismatched_lookup_data_is_a_miss() {
        let questions = vec![Question::new("foo.bar.com", Type::A, Class::IN)];
        let (answers, response_code) = Resolver::new(Arc::new(WrongType)).answer(&questions);
        assert!(answers.is_empty());
        assert_eq!(response_code, ResponseCode::NoError);
    }
}
