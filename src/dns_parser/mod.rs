//! Wire format of DNS requests and responses
//!
//! Names are written without compression and only the parts of a request
//! a responder needs are decoded: the header, the questions and an EDNS0
//! client subnet option. Responses are encoded from owned records.

mod builder;
pub mod cursor;
mod display;
mod enums;
mod error;
mod header;
mod name;
mod opt;
mod parser;
mod rrdata;
mod structs;

pub use self::builder::MAX_PACKET_SIZE;
pub use self::enums::{Class, Opcode, ResponseCode, Type};
pub use self::error::Error;
pub use self::header::{Header, HEADER_SIZE};
pub use self::name::{Name, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use self::opt::{ClientSubnet, Edns, CLIENT_SUBNET, FAMILY_IPV4};
pub use self::rrdata::{
    RData, Soa, DEFAULT_EXPIRE, DEFAULT_MINIMUM, DEFAULT_REFRESH, DEFAULT_RETRY,
};
pub use self::structs::{Message, Question, ResourceRecord};
