//! A one-request-per-connection HTTP server for exercising the real client.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// A request as the server received it.
#[derive(Debug)]
pub struct Recorded {
    pub request_line: String,
    headers: Vec<(String, String)>,
}

impl Recorded {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Serves `replies` in order, one per connection, then stops.
pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<Vec<Recorded>>,
}

impl TestServer {
    pub fn start(replies: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let mut recorded = Vec::new();
            for (status, body) in replies {
                let (mut stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();

                let mut headers = Vec::new();
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                        break;
                    }
                    if let Some((name, value)) = line.trim_end().split_once(':') {
                        headers.push((name.trim().to_string(), value.trim().to_string()));
                    }
                }

                write!(
                    stream,
                    "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                )
                .unwrap();
                stream.flush().unwrap();

                recorded.push(Recorded {
                    request_line: request_line.trim_end().to_string(),
                    headers,
                });
            }
            recorded
        });

        Self { base_url, handle }
    }

    /// Wait for every reply to be served and return what was received.
    pub fn finish(self) -> Vec<Recorded> {
        self.handle.join().unwrap()
    }
}

pub const PAGE_ONE: &str = r#"[
    {"name": "spoon-knife", "full_name": "octocat/spoon-knife", "description": "A fork",
     "html_url": "https://github.com/octocat/spoon-knife", "private": false, "fork": true},
    {"name": "linguist", "full_name": "octocat/linguist", "description": null,
     "html_url": "https://github.com/octocat/linguist", "private": true, "fork": false}
]"#;
