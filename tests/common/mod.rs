// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Body served by a healthy offer endpoint.
pub const OFFERS_BODY: &str = r#"{
    "data": [
        {
            "nombre": "Classic",
            "institucion": "Banco Uno",
            "ingresoMinimo": "$100",
            "tasaInteres": "32%",
            "beneficios": "No annual fee",
            "img": "https://example.com/classic.png"
        },
        {
            "nombre": "Gold",
            "institucion": "Banco Dos",
            "ingresoMinimo": "$2,000",
            "tasaInteres": "28%",
            "beneficios": "Airport lounges",
            "img": "https://example.com/gold.png"
        },
        {
            "nombre": "Platinum",
            "institucion": "Banco Tres",
            "ingresoMinimo": "$15,000",
            "tasaInteres": "22%",
            "beneficios": "Concierge",
            "img": "https://example.com/platinum.png"
        }
    ]
}"#;

/// Serve a single canned HTTP response on a local port and return its URL.
pub async fn serve_once(status: &'static str, body: &'static str) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    Ok(format!("http://{}/offers", addr))
}

/// Accept one connection and never answer it.
pub async fn serve_hanging() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        }
    });

    Ok(format!("http://{}/offers", addr))
}
