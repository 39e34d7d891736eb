//! A small authoritative DNS responder
//!
//! The interesting part is [`dns_parser`], a bounds-checked codec for the
//! subset of the DNS wire format a simple responder needs, and
//! [`Resolver`], which answers the decoded questions from a [`Lookup`].
//! [`Responder`] ties both to UDP sockets.

use futures_util::{future, FutureExt};
use log::warn;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::thread;
use tokio::{runtime::Handle, sync::mpsc};

mod address_family;
pub mod dns_parser;
mod fsm;
pub mod lookup;
mod resolver;

use crate::address_family::{AddressFamily, Inet, Inet6};
use crate::fsm::{Command, FSM};

pub use crate::lookup::{Lookup, StaticLookup};
pub use crate::resolver::{Resolver, DEFAULT_TTL};

/// Well-known DNS port
pub const DNS_PORT: u16 = 53;

/// Where and how a `Responder` listens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponderConfig {
    /// UDP port to bind on the wildcard address; 0 picks a free port
    pub port: u16,
    /// serve on an IPv4 socket
    pub ipv4: bool,
    /// serve on an IPv6 socket
    pub ipv6: bool,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        ResponderConfig {
            port: DNS_PORT,
            ipv4: true,
            ipv6: true,
        }
    }
}

/// A DNS responder serving answers from a `Lookup`
///
/// The responder keeps running until it is dropped.
pub struct Responder {
    commands: CommandSender,
    local_addrs: Vec<SocketAddr>,
}

/// The future driving every socket of a `Responder`
pub type ResponderTask = Pin<Box<dyn Future<Output = ()> + Send>>;

impl Responder {
    /// Spawn a responder task on an os thread, serving the reference table
    /// on port 53.
    pub fn new() -> io::Result<Responder> {
        Self::with_config(
            ResponderConfig::default(),
            Arc::new(StaticLookup::reference()),
        )
    }

    /// Spawn a responder task on an os thread with its own runtime.
    pub fn with_config(config: ResponderConfig, lookup: Arc<dyn Lookup>) -> io::Result<Responder> {
        let (tx, rx) = std::sync::mpsc::sync_channel(0);
        thread::Builder::new()
            .name("dns-responder".to_owned())
            .spawn(move || {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(err) => {
                        let _ = tx.send(Err(err));
                        return;
                    }
                };
                rt.block_on(async {
                    match Self::with_default_handle(config, lookup) {
                        Ok((responder, task)) => {
                            if tx.send(Ok(responder)).is_ok() {
                                task.await;
                            }
                        }
                        Err(err) => {
                            let _ = tx.send(Err(err));
                        }
                    }
                })
            })?;

        rx.recv().unwrap_or_else(|_| {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "responder thread exited before binding",
            ))
        })
    }

    /// Spawn a `Responder` on the given tokio runtime.
    pub fn spawn(
        handle: &Handle,
        config: ResponderConfig,
        lookup: Arc<dyn Lookup>,
    ) -> io::Result<Responder> {
        let _guard = handle.enter();
        let (responder, task) = Self::with_default_handle(config, lookup)?;
        handle.spawn(task);
        Ok(responder)
    }

    /// Bind the sockets and return the responder together with the task
    /// that serves them. The task does nothing until it is polled.
    ///
    /// Must be called from within a tokio runtime. When both address
    /// families are enabled and only one of them can be bound, the
    /// responder serves on that one.
    pub fn with_default_handle(
        config: ResponderConfig,
        lookup: Arc<dyn Lookup>,
    ) -> io::Result<(Responder, ResponderTask)> {
        let resolver = Resolver::new(lookup);
        let mut sockets = Sockets::default();

        if config.ipv4 {
            sockets.add(FSM::<Inet>::new(&resolver, config.port));
        }
        if config.ipv6 {
            sockets.add(FSM::<Inet6>::new(&resolver, config.port));
        }

        let Sockets {
            tasks,
            commands,
            local_addrs,
            error,
        } = sockets;
        if tasks.is_empty() {
            return Err(error.unwrap_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "no address family enabled")
            }));
        }

        let task: ResponderTask = Box::pin(future::join_all(tasks).map(|_| ()));
        let responder = Responder {
            commands: CommandSender(commands),
            local_addrs,
        };

        Ok((responder, task))
    }

    /// The addresses the responder's sockets are bound to
    pub fn local_addrs(&self) -> &[SocketAddr] {
        &self.local_addrs
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        self.commands.send_shutdown();
    }
}

#[derive(Default)]
struct Sockets {
    tasks: Vec<ResponderTask>,
    commands: Vec<mpsc::UnboundedSender<Command>>,
    local_addrs: Vec<SocketAddr>,
    error: Option<io::Error>,
}

impl Sockets {
    fn add<AF>(&mut self, bound: io::Result<(FSM<AF>, mpsc::UnboundedSender<Command>)>)
    where
        AF: AddressFamily + Unpin + Send + 'static,
    {
        let bound = bound.and_then(|(fsm, tx)| Ok((fsm.local_addr()?, fsm, tx)));
        match bound {
            Ok((addr, fsm, tx)) => {
                self.local_addrs.push(addr);
                self.tasks.push(Box::pin(fsm));
                self.commands.push(tx);
            }
            Err(err) => {
                warn!("failed to bind responder socket: {}", err);
                self.error = Some(err);
            }
        }
    }
}

struct CommandSender(Vec<mpsc::UnboundedSender<Command>>);

impl CommandSender {
    fn send(&mut self, cmd: Command) {
        for tx in self.0.iter_mut() {
            // a task that already stopped has nothing left to shut down
            let _ = tx.send(cmd.clone());
        }
    }

    fn send_shutdown(&mut self) {
        self.send(Command::Shutdown);
    }
}
