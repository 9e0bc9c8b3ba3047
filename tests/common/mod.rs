//! Shared test helpers: an in-process collector that speaks the sender
//! protocol on 127.0.0.1.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use zbxsend::protocol::{encode_frame, HEADER_SIZE, SIGNATURE_SIZE};

/// How the collector answers each request
#[derive(Debug, Clone)]
pub enum Reply {
    /// Write the bytes in one go
    Whole(Vec<u8>),

    /// Write the bytes one at a time
    Trickle(Vec<u8>),

    /// Say nothing for the given time, then close
    Silent(Duration),
}

/// A well-formed success reply carrying `info`
pub fn reply_with_info(info: &str) -> Vec<u8> {
    let body = serde_json::json!({ "response": "success", "info": info });
    encode_frame(body.to_string().as_bytes()).to_vec()
}

/// Bind a collector on an ephemeral port that serves `connections` requests
///
/// The handle yields the JSON body of every request received.
pub fn spawn_collector(reply: Reply, connections: usize) -> (u16, JoinHandle<Vec<serde_json::Value>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let mut requests = Vec::with_capacity(connections);
        for _ in 0..connections {
            let (mut stream, _) = listener.accept().unwrap();
            requests.push(read_request(&mut stream));
            answer(&mut stream, &reply);
        }
        requests
    });

    (port, handle)
}

/// A port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn read_request(stream: &mut TcpStream) -> serde_json::Value {
    let mut header = [0u8; HEADER_SIZE];
    stream.read_exact(&mut header).unwrap();
    assert_eq!(&header[..SIGNATURE_SIZE], b"ZBXD\x01");

    let length = u64::from_le_bytes(header[SIGNATURE_SIZE..].try_into().unwrap());
    let mut body = vec![0u8; length as usize];
    stream.read_exact(&mut body).unwrap();

    serde_json::from_slice(&body).unwrap()
}

fn answer(stream: &mut TcpStream, reply: &Reply) {
    // The client may hang up early on a bad header; ignore write errors
    match reply {
        Reply::Whole(bytes) => {
            let _ = stream.write_all(bytes);
        }
        Reply::Trickle(bytes) => {
            stream.set_nodelay(true).unwrap();
            for byte in bytes {
                if stream.write_all(&[*byte]).is_err() {
                    break;
                }
                let _ = stream.flush();
                thread::sleep(Duration::from_millis(1));
            }
        }
        Reply::Silent(duration) => thread::sleep(*duration),
    }
}
