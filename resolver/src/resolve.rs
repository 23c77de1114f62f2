use crate::error::ResolveError;
use bytes::BytesMut;
use dns::QueryOptions;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;

// Replies larger than this are cut off by the socket read.
pub const MAX_RESPONSE_SIZE: usize = 1024;

/// Sends a default query for `domain` to `server_addr` (`host:port`) and
/// returns the decoded query names and answer strings.
///
/// Waits for the reply without a deadline.
pub async fn resolve(server_addr: &str, domain: &str) -> Result<(Vec<String>, Vec<String>), ResolveError> {
    resolve_with(server_addr, domain, &QueryOptions::default(), None).await
}

pub async fn resolve_with(
    server_addr: &str,
    domain: &str,
    options: &QueryOptions,
    timeout: Option<Duration>,
) -> Result<(Vec<String>, Vec<String>), ResolveError> {
    tracing::debug!("resolving domain: {} via {}", domain, server_addr);

    let request_bytes = dns::encode_request_with(domain, options)?;
    let response_bytes = exchange(server_addr, &request_bytes, timeout).await?;

    let resp = dns::decode_response(&response_bytes)?;
    let answers = resp.answers()?;
    tracing::debug!("received udp response has {} answers", answers.len());

    Ok((resp.queries(), answers))
}

/// One datagram out, one datagram back.
pub async fn exchange(server_addr: &str, request: &[u8], timeout: Option<Duration>) -> io::Result<BytesMut> {
    let remote_addr = tokio::net::lookup_host(server_addr)
        .await?
        .next()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no address found for {}", server_addr),
            )
        })?;

    let local_addr: SocketAddr = if remote_addr.is_ipv4() {
        (Ipv4Addr::UNSPECIFIED, 0).into()
    } else {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    };
    let sock = UdpSocket::bind(local_addr).await?;
    sock.connect(remote_addr).await?;

    let send_size = sock.send(request).await?;
    tracing::debug!("sent {} bytes to {}", send_size, remote_addr);

    let mut resp_buf = BytesMut::with_capacity(MAX_RESPONSE_SIZE);
    let response_size = match timeout {
        Some(t) => tokio::time::timeout(t, sock.recv_buf(&mut resp_buf))
            .await
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("no reply from {} within {:?}", remote_addr, t),
                )
            })??,
        None => sock.recv_buf(&mut resp_buf).await?,
    };
    resp_buf.truncate(response_size);
    tracing::debug!("received udp response, length: {}, {:?}", response_size, &resp_buf[..]);

    Ok(resp_buf)
}
