// Application configuration, loaded from environment variables and CLI flags.

use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database URL (SQLite connection string).
    pub database_url: String,
    /// Host to bind the HTTP server to.
    pub host: String,
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Directory containing the game pages to serve.
    pub games_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables and CLI arguments.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - SQLite connection string (default: `sqlite:game_clicks.db?mode=rwc`)
    /// - `HOST` - Bind address (default: `127.0.0.1`)
    /// - `PORT` - HTTP server port (default: 5000)
    /// - `GAMES_DIR` - Path to the games directory (default: `.`)
    ///
    /// CLI flags:
    /// - `--port <PORT>` - Override the port
    /// - `--games-dir <DIR>` - Override the games directory
    pub fn load() -> Self {
        let args: Vec<String> = std::env::args().collect();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:game_clicks.db?mode=rwc".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        // Port: CLI flag --port takes precedence, then env var, then default
        let port = Self::parse_cli_value(&args, "--port")
            .and_then(|v| v.parse().ok())
            .or_else(|| std::env::var("PORT").ok().and_then(|v| v.parse().ok()))
            .unwrap_or(5000);

        let games_dir = Self::parse_cli_value(&args, "--games-dir")
            .map(PathBuf::from)
            .or_else(|| std::env::var("GAMES_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        Config {
            database_url,
            host,
            port,
            games_dir,
        }
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse a CLI flag value like `--port 8080`.
    fn parse_cli_value(args: &[String], flag: &str) -> Option<String> {
        args.windows(2).find_map(|pair| {
            if pair[0] == flag {
                Some(pair[1].clone())
            } else {
                None
            }
        })
    }
}
