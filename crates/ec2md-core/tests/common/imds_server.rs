//! Minimal HTTP/1.1 server standing in for the metadata service in tests.
//!
//! Serves a fixed table of `path -> response`. Unknown paths get 404. A
//! `Reply::Hang` route reads the request and never answers; it reports on
//! the returned channel once the client closes the connection.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with this status and body.
    Status(u16, &'static str),
    /// Never respond; signal when the peer hangs up.
    Hang,
}

pub struct ImdsServer {
    /// e.g. "http://127.0.0.1:12345/latest/"
    pub base_url: String,
    /// Receives the request path each time a hanging connection is closed by the client.
    pub closed: mpsc::Receiver<String>,
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(routes: &[(&'static str, Reply)]) -> ImdsServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<&'static str, Reply>> = Arc::new(routes.iter().cloned().collect());
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let tx = tx.clone();
            thread::spawn(move || handle(stream, &routes, tx));
        }
    });
    ImdsServer {
        base_url: format!("http://127.0.0.1:{}/latest/", port),
        closed: rx,
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<&'static str, Reply>, closed: mpsc::Sender<String>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(10)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]).into_owned();
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    match routes.get(path.as_str()) {
        Some(Reply::Hang) => {
            // Block until the client aborts (read returns EOF or reset).
            loop {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => continue,
                }
            }
            let _ = closed.send(path);
        }
        Some(Reply::Status(code, body)) => respond(&mut stream, *code, body),
        None => respond(&mut stream, 404, "Not Found"),
    }
}

fn respond(stream: &mut TcpStream, code: u16, body: &str) {
    let reason = match code {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        code,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
