//! The TCP accept loop and per-connection workers.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Instant;

use lift_sim::SharedWorld;

use crate::error::{HttpError, HttpResult};

/// Bytes read from a request.  Everything route matching needs fits in the
/// first packet; the rest of the request is ignored.
const REQUEST_BUF_BYTES: usize = 4096;

const NOT_FOUND_BODY: &str = r#"{"error":"not found"}"#;

// ── Routing ───────────────────────────────────────────────────────────────────

/// Which document a request resolves to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    State,
    Stats,
    NotFound,
}

pub(crate) fn route(request: &str) -> Route {
    if request.contains("GET /state") {
        Route::State
    } else if request.contains("GET /stats") {
        // Also covers the historical `/stats/daily` alias.
        Route::Stats
    } else {
        Route::NotFound
    }
}

/// Wrap `body` in a minimal HTTP/1.1 response.  Unknown routes still get a
/// `200` carrying an error body; clients key off the JSON, not the status.
pub(crate) fn http_ok(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

// ── Server ────────────────────────────────────────────────────────────────────

/// The read-only endpoint server.
pub struct HttpServer {
    addr: String,
    world: SharedWorld,
}

impl HttpServer {
    pub fn new(addr: impl Into<String>, world: SharedWorld) -> Self {
        Self {
            addr: addr.into(),
            world,
        }
    }

    /// Bind the listener.  Separate from [`serve`](Self::serve) so tests
    /// can bind port 0 and learn the chosen port before serving.
    pub fn bind(&self) -> HttpResult<TcpListener> {
        TcpListener::bind(&self.addr).map_err(|source| HttpError::Bind {
            addr: self.addr.clone(),
            source,
        })
    }

    /// Accept connections forever, one worker thread each.  A failed
    /// accept is logged and the loop keeps going.
    pub fn serve(&self, listener: TcpListener) {
        loop {
            match listener.accept() {
                Ok((stream, peer)) => {
                    let world = self.world.clone();
                    thread::spawn(move || handle_connection(stream, world, peer));
                }
                Err(e) => log::warn!("accept failed: {e}"),
            }
        }
    }

    /// Bind and serve forever.  Returns only if binding fails.
    pub fn run(self) -> HttpResult<()> {
        let listener = self.bind()?;
        log::info!("observability endpoints at http://{}/", self.addr);
        self.serve(listener);
        Ok(())
    }
}

// ── Connection worker ─────────────────────────────────────────────────────────

fn handle_connection(mut stream: TcpStream, world: SharedWorld, peer: SocketAddr) {
    let mut buf = [0u8; REQUEST_BUF_BYTES];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(e) => {
            log::debug!("recv from {peer} failed: {e}");
            return;
        }
    };
    let request = String::from_utf8_lossy(&buf[..n]);

    let body = match route(&request) {
        Route::State => world.state_json(Instant::now()),
        Route::Stats => world.stats_json(),
        Route::NotFound => NOT_FOUND_BODY.to_string(),
    };
    log::trace!(
        "{peer}: {:?} -> {} bytes",
        request.lines().next().unwrap_or(""),
        body.len()
    );

    if let Err(e) = stream.write_all(http_ok(&body).as_bytes()) {
        log::debug!("send to {peer} failed: {e}");
    }
    // Connection: close — dropping the stream closes the socket.
}
