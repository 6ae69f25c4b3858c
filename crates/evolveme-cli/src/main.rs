//! EvolveMe CLI - talk to the AI coach from a terminal.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use evolveme_client::{ApiClient, ClientConfig, ClientError, FileTokenStore};
use evolveme_core::{text, ChatMessage, ChatRole, ChatSession, Credentials};

type Client = ApiClient<FileTokenStore>;

/// EvolveMe CLI - AI coach chat client
#[derive(Parser)]
#[command(name = "evolveme")]
#[command(about = "Terminal client for the EvolveMe AI coach", long_about = None)]
struct Cli {
    /// API base URL including the /api prefix [env: EVOLVEME_API_URL]
    #[arg(short, long)]
    api_url: Option<String>,

    /// Request timeout in seconds [env: EVOLVEME_TIMEOUT_SECS]
    #[arg(long)]
    timeout: Option<u64>,

    /// File holding the access token
    #[arg(long, env = "EVOLVEME_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Log in and save the access token
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Forget the saved access token
    Logout,

    /// Print the conversation history
    History,

    /// Send one message and print the reply
    Send {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Interactive chat (/quit to exit, /logout to log out)
    Chat,

    /// Check that the backend is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("evolveme=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config.base_url = url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let token_path = cli.token_file.unwrap_or_else(default_token_path);
    debug!(api = %config.base_url, token_file = %token_path.display(), "Starting");
    let client = ApiClient::new(&config, FileTokenStore::new(token_path))?;

    let result = match cli.command {
        Commands::Register { email, password } => register(&client, email, password).await,
        Commands::Login { email, password } => login(&client, email, password).await,
        Commands::Logout => logout(&client),
        Commands::History => history(&client).await,
        Commands::Send { text } => send(&client, text.join(" ")).await,
        Commands::Chat => chat(&client, BufReader::new(tokio::io::stdin())).await,
        Commands::Health => health(&client).await,
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }

    Ok(())
}

/// `<config dir>/evolveme/token`, or `.evolveme-token` in the working directory.
fn default_token_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("evolveme").join("token"))
        .unwrap_or_else(|| PathBuf::from(".evolveme-token"))
}

async fn register(client: &Client, email: String, password: String) -> Result<(), String> {
    let response = client
        .register(&Credentials::new(email, password))
        .await
        .map_err(|e| e.user_message(text::REGISTER_FAILED))?;

    println!("{}", response.message.as_deref().unwrap_or(text::REGISTERED));
    Ok(())
}

async fn login(client: &Client, email: String, password: String) -> Result<(), String> {
    client
        .login(&Credentials::new(email.clone(), password))
        .await
        .map_err(|e| e.user_message(text::LOGIN_FAILED))?;

    println!("Logged in as {}", email);
    Ok(())
}

fn logout(client: &Client) -> Result<(), String> {
    client.logout().map_err(|e| e.to_string())?;
    println!("Logged out");
    Ok(())
}

async fn history(client: &Client) -> Result<(), String> {
    require_login(client)?;
    let messages = client
        .conversations()
        .await
        .map_err(|e| e.user_message(text::HISTORY_FAILED))?;

    if messages.is_empty() {
        println!("No messages yet");
    }
    for message in &messages {
        print_message(message);
    }
    Ok(())
}

async fn send(client: &Client, content: String) -> Result<(), String> {
    require_login(client)?;
    let reply = client
        .post_message(&content)
        .await
        .map_err(|e| e.user_message(text::SEND_FAILED))?;

    print_message(&reply);
    Ok(())
}

/// Interactive loop over `input`, one message per line.
async fn chat<R: AsyncBufRead + Unpin>(client: &Client, input: R) -> Result<(), String> {
    require_login(client)?;

    let mut session = ChatSession::new();
    session.load_history(
        client
            .conversations()
            .await
            .map_err(|e| e.user_message(text::HISTORY_FAILED)),
    );
    for message in &session.messages {
        print_message(message);
    }
    report_error(&mut session);

    println!("Type a message and press Enter. /quit exits, /logout logs out.");
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/logout" => return logout(client),
            _ => {}
        }

        session.input = line;
        let Some(content) = session.begin_send() else {
            continue;
        };

        println!("... thinking");
        let result = client
            .post_message(&content)
            .await
            .map_err(|e| e.user_message(text::SEND_FAILED));
        session.finish_send(result);

        if session.error.is_none() {
            if let Some(reply) = session.messages.last() {
                print_message(reply);
            }
        }
        report_error(&mut session);
    }

    Ok(())
}

async fn health(client: &Client) -> Result<(), String> {
    match client.health().await {
        Ok(true) => {
            println!("Backend is healthy");
            Ok(())
        }
        Ok(false) => Err("Backend reported unhealthy status".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn require_login(client: &Client) -> Result<(), String> {
    if client.is_authenticated() {
        Ok(())
    } else {
        Err(ClientError::NotAuthenticated.user_message(text::NOT_LOGGED_IN)
            + " (run `evolveme login` first)")
    }
}

/// Print and clear the session's error, if any.
fn report_error(session: &mut ChatSession) {
    if let Some(error) = session.error.take() {
        eprintln!("! {}", error);
    }
}

fn print_message(message: &ChatMessage) {
    let label = match &message.role {
        ChatRole::User => "you",
        ChatRole::Ai => "coach",
        other => other.as_str(),
    };
    println!("[{}] {}:", message.local_time(), label);
    for line in message.content.lines() {
        println!("  {}", line);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::extract::State;
    use axum::routing::get;
    use axum::{Json, Router};
    use clap::CommandFactory;
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use evolveme_client::TokenStore;
    use evolveme_core::AuthToken;

    use super::*;

    /// Requests the fake backend has served, by kind.
    #[derive(Clone, Default)]
    struct Hits {
        history: Arc<AtomicUsize>,
        posts: Arc<AtomicUsize>,
    }

    impl Hits {
        fn history(&self) -> usize {
            self.history.load(Ordering::SeqCst)
        }

        fn posts(&self) -> usize {
            self.posts.load(Ordering::SeqCst)
        }
    }

    async fn list(State(hits): State<Hits>) -> Json<Value> {
        hits.history.fetch_add(1, Ordering::SeqCst);
        Json(json!({"conversations": []}))
    }

    async fn reply(State(hits): State<Hits>, Json(body): Json<Value>) -> Json<Value> {
        hits.posts.fetch_add(1, Ordering::SeqCst);
        Json(json!({
            "role": "ai",
            "content": format!("echo: {}", body["content"].as_str().unwrap_or_default()),
            "timestamp": "2024-05-01T10:00:00"
        }))
    }

    /// Client against a fake backend, with its token file in a temp dir.
    async fn setup(logged_in: bool) -> (Client, Hits, tempfile::TempDir) {
        let hits = Hits::default();
        let app = Router::new()
            .route("/api/conversations", get(list).post(reply))
            .with_state(hits.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        if logged_in {
            store.set(&AuthToken::new("tok-123")).unwrap();
        }
        let config = ClientConfig::default().with_base_url(format!("http://{}/api", addr));
        let client = ApiClient::new(&config, store).unwrap();
        (client, hits, dir)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_send_joins_words() {
        let cli = Cli::try_parse_from(["evolveme", "send", "how", "are", "you"]).unwrap();
        match cli.command {
            Commands::Send { text } => assert_eq!(text.join(" "), "how are you"),
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_send_requires_text() {
        assert!(Cli::try_parse_from(["evolveme", "send"]).is_err());
    }

    #[tokio::test]
    async fn test_chat_requires_login() {
        let (client, hits, _dir) = setup(false).await;

        let err = chat(&client, "hello\n".as_bytes()).await.unwrap_err();
        assert!(err.starts_with(text::NOT_LOGGED_IN));
        assert_eq!(hits.history(), 0);
        assert_eq!(hits.posts(), 0);
    }

    #[tokio::test]
    async fn test_history_requires_login() {
        let (client, hits, _dir) = setup(false).await;

        assert!(history(&client).await.is_err());
        assert_eq!(hits.history(), 0);
    }

    #[tokio::test]
    async fn test_chat_blank_lines_then_logout() {
        let (client, hits, dir) = setup(true).await;

        chat(&client, "\n   \n/logout\n".as_bytes()).await.unwrap();
        assert_eq!(hits.history(), 1);
        assert_eq!(hits.posts(), 0);
        assert!(!dir.path().join("token").exists());
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn test_chat_quit_keeps_token() {
        let (client, hits, dir) = setup(true).await;

        chat(&client, "/quit\nnever sent\n".as_bytes()).await.unwrap();
        assert_eq!(hits.posts(), 0);
        assert!(dir.path().join("token").exists());
        assert!(client.is_authenticated());
    }

    #[tokio::test]
    async fn test_chat_sends_each_message_line() {
        let (client, hits, _dir) = setup(true).await;

        chat(&client, "how do I start?\n\nand then?".as_bytes()).await.unwrap();
        assert_eq!(hits.posts(), 2);
    }
}
