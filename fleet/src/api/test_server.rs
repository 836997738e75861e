use commons::Arm;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// `("GET /api/telemetry/latest", "200 OK", body)`
pub type Route = (&'static str, &'static str, &'static str);

/// Serves `routes` until the test ends. Unknown requests get a 404.
/// Returns the base url and the raw requests received so far.
pub async fn serve(routes: Vec<Route>) -> (String, Arm<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api", listener.local_addr().unwrap());
    let requests: Arm<Vec<String>> = Arc::new(Mutex::new(vec![]));
    let received = requests.clone();
    tokio::spawn(async move {
        loop {
            let (mut socket, _) = listener.accept().await.unwrap();
            let routes = routes.clone();
            let received = received.clone();
            tokio::spawn(async move {
                let request = read_request(&mut socket).await;
                let target = request
                    .split_whitespace()
                    .take(2)
                    .collect::<Vec<_>>()
                    .join(" ");
                received.lock().unwrap().push(request);
                let (status, body) = routes
                    .iter()
                    .find(|(route, _, _)| *route == target)
                    .map(|(_, status, body)| (*status, *body))
                    .unwrap_or(("404 Not Found", r#"{"message": "Not found"}"#));
                respond(&mut socket, status, body).await;
            });
        }
    });
    (base_url, requests)
}

pub async fn respond(socket: &mut TcpStream, status: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

pub async fn read_request(socket: &mut TcpStream) -> String {
    let mut received = vec![];
    let mut buffer = [0u8; 1024];
    loop {
        let read = match socket.read(&mut buffer).await {
            Ok(0) | Err(_) => break,
            Ok(read) => read,
        };
        received.extend_from_slice(&buffer[..read]);
        let text = String::from_utf8_lossy(&received).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if received.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&received).to_string()
}
