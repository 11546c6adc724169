//! End-to-end tests: a real listener on an ephemeral port, driven through
//! the companion raw-bytes client.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use tokio::net::TcpListener;
use webroot::client;
use webroot::config::Config;
use webroot::server;

fn fixture_webroot() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a_web_page.html"), "<html><h1>North Carolina</h1></html>").unwrap();
    fs::write(dir.path().join("notes.txt"), "plain text notes\n").unwrap();
    fs::create_dir(dir.path().join("images")).unwrap();
    fs::write(dir.path().join("images").join("cat.png"), b"\x89PNG\r\n\x1a\nfakepixels").unwrap();
    dir
}

/// Binds port 0, spawns the sequential accept loop, returns the address.
async fn start_server(webroot: PathBuf) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let cfg = Config {
        listen_addr: addr.clone(),
        webroot,
        read_buf_size: 1024,
    };

    tokio::spawn(async move {
        let _ = server::listener::serve(listener, &cfg).await;
    });

    addr
}

#[tokio::test]
async fn test_get_root_returns_directory_listing() {
    let webroot = fixture_webroot();
    let addr = start_server(webroot.path().to_path_buf()).await;

    let reply = client::fetch(&addr, b"GET / HTTP/1.1\r\n\r\n").await.unwrap();
    let text = String::from_utf8(reply).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n"));
    assert!(text.contains("<li><a href=\"/a_web_page.html\">a_web_page.html</a></li>"));
    assert!(text.contains("<li><a href=\"/notes.txt\">notes.txt</a></li>"));
    assert!(text.contains("<li><a href=\"/images\">images</a></li>"));
}

#[tokio::test]
async fn test_post_returns_405_with_canned_body() {
    let webroot = fixture_webroot();
    let addr = start_server(webroot.path().to_path_buf()).await;

    let reply = client::fetch(&addr, b"POST /x.html HTTP/1.1\r\n\r\n").await.unwrap();

    assert_eq!(
        reply,
        b"HTTP/1.1 405 Method Not Allowed\r\nContent-Type: text/html\r\n\r\n\
          <html><h1>Method Not Allowed</h1></html>"
    );
}

#[tokio::test]
async fn test_malformed_request_line_also_returns_405() {
    let webroot = fixture_webroot();
    let addr = start_server(webroot.path().to_path_buf()).await;

    let reply = client::fetch(&addr, b"GARBAGE\r\n\r\n").await.unwrap();
    let text = String::from_utf8(reply).unwrap();

    assert!(text.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
}

#[tokio::test]
async fn test_missing_path_returns_bare_404() {
    let webroot = fixture_webroot();
    let addr = start_server(webroot.path().to_path_buf()).await;

    let reply = client::fetch(&addr, b"GET /ghost.html HTTP/1.1\r\n\r\n").await.unwrap();
    let text = String::from_utf8(reply).unwrap();

    assert!(text.starts_with("HTTP/1.1 404\r\n"));
    assert!(text.ends_with("<html><h1>Path '/ghost.html' not found</h1></html>"));
}

#[tokio::test]
async fn test_html_file_served_byte_identical() {
    let webroot = fixture_webroot();
    let on_disk = fs::read(webroot.path().join("a_web_page.html")).unwrap();
    let addr = start_server(webroot.path().to_path_buf()).await;

    let reply = client::fetch(&addr, b"GET /a_web_page.html HTTP/1.1\r\n\r\n")
        .await
        .unwrap();
    let text = String::from_utf8(reply).unwrap();

    let (head, body) = text.split_once("\r\n\r\n").unwrap();
    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert!(head.contains("Content-Type: text/html"));
    assert_eq!(body.as_bytes(), &on_disk[..]);
}

#[tokio::test]
async fn test_image_served_with_image_content_type() {
    let webroot = fixture_webroot();
    let on_disk = fs::read(webroot.path().join("images").join("cat.png")).unwrap();
    let addr = start_server(webroot.path().to_path_buf()).await;

    let reply = client::fetch(&addr, b"GET /images/cat.png HTTP/1.1\r\n\r\n")
        .await
        .unwrap();

    let header_end = reply.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    let head = std::str::from_utf8(&reply[..header_end]).unwrap();
    let body = &reply[header_end + 4..];

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert!(head.contains("Content-Type: image/png"));
    assert_eq!(body, &on_disk[..]);
}

#[tokio::test]
async fn test_trailing_slash_normalized_before_resolution() {
    let webroot = fixture_webroot();
    let addr = start_server(webroot.path().to_path_buf()).await;

    let reply = client::fetch(&addr, b"GET /images/ HTTP/1.1\r\n\r\n").await.unwrap();
    let text = String::from_utf8(reply).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.ends_with("</ul><a href=\"/\">Home</a></html>"));
}

#[tokio::test]
async fn test_repeated_get_is_idempotent() {
    let webroot = fixture_webroot();
    let addr = start_server(webroot.path().to_path_buf()).await;

    let first = client::fetch(&addr, b"GET / HTTP/1.1\r\n\r\n").await.unwrap();
    let second = client::fetch(&addr, b"GET / HTTP/1.1\r\n\r\n").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_connections_are_served_one_after_another() {
    let webroot = fixture_webroot();
    let addr = start_server(webroot.path().to_path_buf()).await;

    // Sequential accept loop: each request only goes out once the previous
    // connection has fully closed.
    for _ in 0..5 {
        let reply = client::fetch(&addr, b"GET /notes.txt HTTP/1.1\r\n\r\n")
            .await
            .unwrap();
        let text = String::from_utf8(reply).unwrap();
        assert!(text.ends_with("plain text notes\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
    }
}
