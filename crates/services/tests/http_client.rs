use services::{ContentClient, GenerationError, HttpContentClient, StudyBotConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serve exactly one canned HTTP response and hand back the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;
        request
    });
    (format!("http://{addr}/api"), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let body_len = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn client_for(base: &str) -> HttpContentClient {
    let config = StudyBotConfig::default()
        .with_api_base(base)
        .expect("base url")
        .with_timeout_secs(5)
        .expect("timeout");
    HttpContentClient::new(config).expect("client")
}

#[tokio::test]
async fn flashcards_post_notes_and_parse_deck() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"flashcards":[{"front":"Mitochondria","back":"Powerhouse"},{"front":"Ribosome","back":"Protein synthesis"}]}"#,
    )
    .await;
    let client = client_for(&base);

    let deck = client.generate_flashcards("cell parts").await.unwrap();

    assert_eq!(deck.len(), 2);
    assert_eq!(deck[0].front(), "Mitochondria");
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/flashcards "), "{request}");
    assert!(request.ends_with(r#"{"notes":"cell parts"}"#), "{request}");
}

#[tokio::test]
async fn quiz_posts_text_key() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"quiz":[{"question":"Largest planet?","options":["Mars","Jupiter"],"correct":1,"explanation":"Gas giant."}]}"#,
    )
    .await;
    let client = client_for(&base);

    let quiz = client.generate_quiz("planets").await.unwrap();

    assert_eq!(quiz.len(), 1);
    assert_eq!(quiz[0].correct_index(), 1);
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/quiz "), "{request}");
    assert!(request.ends_with(r#"{"text":"planets"}"#), "{request}");
}

#[tokio::test]
async fn study_buddy_posts_question_key() {
    let (base, server) = serve_once("200 OK", r#"{"answer":"About 8 minutes."}"#).await;
    let client = client_for(&base);

    let answer = client
        .ask_question("How long does sunlight take?")
        .await
        .unwrap();

    assert_eq!(answer, "About 8 minutes.");
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/study-buddy "), "{request}");
    assert!(
        request.ends_with(r#"{"question":"How long does sunlight take?"}"#),
        "{request}"
    );
}

#[tokio::test]
async fn error_status_is_a_generation_error() {
    let (base, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let client = client_for(&base);

    let err = client.generate_flashcards("notes").await.unwrap_err();

    assert!(
        matches!(err, GenerationError::HttpStatus(status) if status.as_u16() == 500),
        "{err:?}"
    );
    server.await.unwrap();
}

#[tokio::test]
async fn missing_key_is_a_generation_error() {
    let (base, server) = serve_once("200 OK", r#"{"cards":[]}"#).await;
    let client = client_for(&base);

    let err = client.generate_flashcards("notes").await.unwrap_err();

    assert!(matches!(err, GenerationError::MissingField("flashcards")), "{err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn non_json_body_is_a_generation_error() {
    let (base, server) = serve_once("200 OK", "<html>oops</html>").await;
    let client = client_for(&base);

    let err = client.ask_question("?").await.unwrap_err();

    assert!(matches!(err, GenerationError::Decode(_)), "{err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_backend_is_a_generation_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(&format!("http://{addr}/api"));

    let err = client.generate_quiz("text").await.unwrap_err();

    assert!(matches!(err, GenerationError::Http(_)), "{err:?}");
}
