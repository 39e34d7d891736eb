use std::sync::Arc;

use simpledns::{Responder, ResponderConfig, StaticLookup};

/// Serves the reference table on port 9000, try it with
/// `dig @127.0.0.1 -p 9000 foo.bar.com`
pub fn main() {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters("simpledns=debug");
    builder.init();

    let config = ResponderConfig {
        port: 9000,
        ..ResponderConfig::default()
    };
    let _responder = Responder::with_config(config, Arc::new(StaticLookup::reference()))
        .expect("failed to start responder");

    loop {
        ::std::thread::sleep(::std::time::Duration::from_secs(10));
    }
}
