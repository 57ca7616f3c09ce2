//! `lift-http` — read-only observability endpoints for the simulator.
//!
//! # Protocol
//!
//! One `TcpListener`, one worker thread per accepted connection, one read,
//! one response, close.  Requests are matched by first substring:
//!
//! | Request contains                      | Response body            |
//! |---------------------------------------|--------------------------|
//! | `GET /state`                          | state snapshot           |
//! | `GET /stats` (incl. `/stats/daily`)   | statistics snapshot      |
//! | anything else                         | `{"error":"not found"}`  |
//!
//! Every reply is `200 OK` with `Content-Type: application/json` and
//! `Connection: close`.  There is no keep-alive, no request-body parsing,
//! and no backpressure; a slow client blocks only its own worker thread.
//! The simulation lock is held while a snapshot string is built, never
//! while bytes move on a socket.

pub mod error;
pub mod server;


pub use error::{HttpError, HttpResult};
pub use server::HttpServer;
