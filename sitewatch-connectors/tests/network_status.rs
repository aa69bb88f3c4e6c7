//! Network status client against a throwaway local HTTP server

#![cfg(feature = "http")]

use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    thread,
};

use sitewatch_connectors::{
    http::{NetworkStatusClient, NetworkStatusConfig},
    NetworkError,
};

/// Serve exactly one canned response and return the endpoint URL
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        // Drain request headers
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
        .unwrap();
        stream.flush().unwrap();
    });

    format!("http://{}/network", addr)
}

fn client(url: String) -> NetworkStatusClient {
    NetworkStatusClient::new(NetworkStatusConfig::new(url).timeout_secs(5)).unwrap()
}

#[test]
fn fetches_device_reading() {
    let url = serve_once("200 OK", r#"{"rssi": -65, "quality": 78, "timestamp": 1700000000}"#);
    let reading = client(url).fetch().unwrap();
    assert_eq!(reading.rssi, -65);
    assert_eq!(reading.quality, 78);
    assert_eq!(reading.timestamp, 1_700_000_000);
}

#[test]
fn missing_timestamp_uses_local_clock() {
    let url = serve_once("200 OK", r#"{"rssi": -70, "quality": 60}"#);
    let reading = client(url).fetch().unwrap();
    assert!(reading.timestamp > 1_577_836_800);
}

#[test]
fn server_error_is_reported() {
    let url = serve_once("503 Service Unavailable", "{}");
    assert!(matches!(
        client(url).fetch(),
        Err(NetworkError::UnexpectedStatus { status: 503 })
    ));
}

#[test]
fn non_200_success_is_rejected() {
    let url = serve_once("202 Accepted", r#"{"rssi": -60}"#);
    assert!(matches!(
        client(url).fetch(),
        Err(NetworkError::UnexpectedStatus { status: 202 })
    ));
}

#[test]
fn garbage_body_falls_back_to_simulation() {
    let url = serve_once("200 OK", "<html>captive portal</html>");
    let c = client(url);
    let reading = c.fetch_or_simulate();
    assert!((-86..=-54).contains(&reading.rssi));
}

#[test]
fn unreachable_device_falls_back_to_simulation() {
    // Bind then drop so the port is closed
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let c = client(format!("http://127.0.0.1:{}/network", port));

    assert!(matches!(c.fetch(), Err(NetworkError::Request(_))));

    let reading = c.fetch_or_simulate();
    assert!((-86..=-54).contains(&reading.rssi));
    assert_eq!(reading.quality, sitewatch_core::signal::signal_quality_percent(reading.rssi));
}
