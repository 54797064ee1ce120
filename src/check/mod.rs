pub mod install;
pub mod probe;
pub mod result;
pub mod settings;
pub mod target;

use std::fmt::Write;

/// Renders an error with its source chain for console output.
pub fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, "\n\nCaused by: {}", src);
        err = src;
    }
    s
}

#[cfg(test)]
pub mod testing {
    //! Minimal HTTP/1.1 stub for probe tests: every request on the socket
    //! gets the configured status line and an empty body.

    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;
    use std::time::Duration;

    /// Serves `status_line` (e.g. "200 OK") on a fresh local port until the
    /// test process exits. Returns the "host:port" to probe.
    pub fn serve_status(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("local addr").port();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                thread::spawn(move || {
                    let mut stream = stream;
                    read_request(&mut stream);
                    let response = format!(
                        "HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    );
                    let _ = stream.write_all(response.as_bytes());
                });
            }
        });
        format!("127.0.0.1:{port}")
    }

    /// A "host:port" nothing listens on; connecting to it is refused.
    pub fn refused_addr() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = format!(
            "127.0.0.1:{}",
            listener.local_addr().expect("local addr").port()
        );
        drop(listener);
        addr
    }

    /// Reads until the header terminator and any Content-Length body have
    /// arrived, so the client never sees the connection close mid-request.
    fn read_request(stream: &mut TcpStream) {
        let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => return,
                Ok(n) => data.extend_from_slice(&buf[..n]),
            }
            if let Some(headers_end) = find_header_end(&data) {
                if data.len() >= headers_end + content_length(&data[..headers_end]) {
                    return;
                }
            }
        }
    }

    fn find_header_end(data: &[u8]) -> Option<usize> {
        data.windows(4)
            .position(|window| window == b"\r\n\r\n")
            .map(|pos| pos + 4)
    }

    fn content_length(headers: &[u8]) -> usize {
        let headers = String::from_utf8_lossy(headers);
        headers
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.trim()
                    .eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse().ok())?
            })
            .unwrap_or(0)
    }
}
