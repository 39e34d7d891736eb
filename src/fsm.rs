use crate::dns_parser::Message;
use log::{debug, error, trace, warn};
use std::collections::VecDeque;
use std::io;
use std::io::ErrorKind::WouldBlock;
use std::marker::PhantomData;
use std::net::{IpAddr, SocketAddr};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::{net::UdpSocket, sync::mpsc};

use crate::address_family::AddressFamily;
use crate::resolver::Resolver;

/// Largest datagram accepted from a client
const RECV_BUFFER_SIZE: usize = 65536;

#[derive(Clone, Debug)]
pub enum Command {
    Shutdown,
}

/// Serves requests arriving on one UDP socket
///
/// Every datagram is handled on its own: it is parsed, resolved and the
/// response is queued for the sender. Datagrams that fail to parse or whose
/// response cannot be built are dropped without a reply.
pub struct FSM<AF: AddressFamily> {
    socket: UdpSocket,
    resolver: Resolver,
    commands: mpsc::UnboundedReceiver<Command>,
    outgoing: VecDeque<(Vec<u8>, SocketAddr)>,
    _af: PhantomData<AF>,
}

impl<AF: AddressFamily> FSM<AF> {
    // Will panic if called from outside the context of a runtime
    pub fn new(
        resolver: &Resolver,
        port: u16,
    ) -> io::Result<(FSM<AF>, mpsc::UnboundedSender<Command>)> {
        let std_socket = AF::bind(port)?;
        let socket = UdpSocket::from_std(std_socket)?;

        let (tx, rx) = mpsc::unbounded_channel();

        let fsm = FSM {
            socket,
            resolver: resolver.clone(),
            commands: rx,
            outgoing: VecDeque::new(),
            _af: PhantomData,
        };

        Ok((fsm, tx))
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    fn recv_packets(&mut self, cx: &mut Context) -> io::Result<()> {
        let mut recv_buf = vec![0u8; RECV_BUFFER_SIZE];
        let mut buf = tokio::io::ReadBuf::new(&mut recv_buf);
        loop {
            buf.clear();
            let addr = match self.socket.poll_recv_from(cx, &mut buf) {
                Poll::Ready(Ok(addr)) => addr,
                Poll::Ready(Err(err)) => return Err(err),
                Poll::Pending => break,
            };
            trace!("received packet from {:?}", addr);
            if let Some(response) = Self::respond(&self.resolver, buf.filled(), addr) {
                self.outgoing.push_back((response, addr));
            }
        }

        Ok(())
    }

    /// Builds the response to one datagram, if it deserves one
    fn respond(resolver: &Resolver, buffer: &[u8], addr: SocketAddr) -> Option<Vec<u8>> {
        let mut message = match Message::parse(buffer) {
            Ok(message) => message,
            Err(error) => {
                warn!("couldn't parse packet from {:?}: {}", addr, error);
                return None;
            }
        };

        if !message.header.query {
            trace!("received packet from {:?} with no query", addr);
            return None;
        }

        let client = message.client_subnet().map_or(addr.ip(), IpAddr::V4);
        debug!("request from {}: {}", client, message);

        resolver.resolve(&mut message);
        debug!("response to {}: {}", client, message);

        match message.build() {
            Ok(response) => Some(response),
            Err(error) => {
                warn!("couldn't build response for {:?}: {}", addr, error);
                None
            }
        }
    }
}

impl<AF: Unpin + AddressFamily> Future for FSM<AF> {
    type Output = ();
    fn poll(self: Pin<&mut Self>, cx: &mut Context) -> Poll<()> {
        let pinned = Pin::get_mut(self);
        while let Poll::Ready(cmd) = Pin::new(&mut pinned.commands).poll_recv(cx) {
            match cmd {
                Some(Command::Shutdown) => return Poll::Ready(()),
                None => {
                    warn!("responder disconnected without shutdown");
                    return Poll::Ready(());
                }
            }
        }

        match pinned.recv_packets(cx) {
            Ok(_) => (),
            Err(e) => error!("ResponderRecvPacket Error: {:?}", e),
        }

        while let Some((response, addr)) = pinned.outgoing.pop_front() {
            trace!("sending packet to {:?}", addr);

            match pinned.socket.poll_send_to(cx, &response, addr) {
                Poll::Ready(Ok(bytes_sent)) if bytes_sent == response.len() => (),
                Poll::Ready(Ok(_)) => warn!("failed to send entire packet"),
                Poll::Ready(Err(ref ioerr)) if ioerr.kind() == WouldBlock => (),
                Poll::Ready(Err(err)) => warn!("error sending packet {:?}", err),
                Poll::Pending => {
                    // retried once the socket is writable again
                    pinned.outgoing.push_front((response, addr));
                    break;
                }
            }
        }

        Poll::Pending
    }
}
