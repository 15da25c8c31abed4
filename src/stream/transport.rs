// src/stream/transport.rs
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::{lookup_host, UdpSocket};
use tracing::debug;

use crate::error::{Result, StreamError};

/// Fire-and-forget sink for single datagrams.
#[allow(async_fn_in_trait)]
pub trait DatagramSink {
    /// Port the datagrams are addressed to, for logging.
    fn port(&self) -> u16;

    /// Send `payload` as exactly one datagram. No retry, no acknowledgement.
    async fn send(&mut self, payload: &[u8]) -> Result<usize>;
}

/// Connectionless UDP sender bound to an ephemeral local port.
pub struct UdpSink {
    socket: UdpSocket,
    target: SocketAddr,
    destination: String,
}

impl UdpSink {
    /// Resolve `host:port` once and bind a local socket of the matching family.
    /// IPv4 results win over IPv6 when a name resolves to both.
    pub async fn bind(host: &str, port: u16) -> Result<Self> {
        let destination = format!("{}:{}", host, port);
        let addrs: Vec<SocketAddr> = lookup_host(destination.as_str())
            .await
            .map_err(|source| StreamError::Resolve {
                destination: destination.clone(),
                source,
            })?
            .collect();

        let target = addrs
            .iter()
            .find(|a| a.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| StreamError::NoAddress {
                destination: destination.clone(),
            })?;

        let local: SocketAddr = if target.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local).await.map_err(StreamError::Bind)?;
        debug!(
            "udp socket {:?} ready for {} ({})",
            socket.local_addr().ok(),
            destination,
            target
        );

        Ok(Self {
            socket,
            target,
            destination,
        })
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

impl DatagramSink for UdpSink {
    fn port(&self) -> u16 {
        self.target.port()
    }

    async fn send(&mut self, payload: &[u8]) -> Result<usize> {
        self.socket
            .send_to(payload, self.target)
            .await
            .map_err(|source| StreamError::Send {
                destination: self.destination.clone(),
                source,
            })
    }
}
