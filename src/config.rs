use clap::Parser;

/// Command-line surface: a single required positional argument, the port
/// to listen on. Files are always served from the directory the process
/// was started in.
#[derive(Debug, Clone, Parser)]
#[command(name = "tinyserve")]
#[command(about = "Minimal static file server, one request per connection")]
pub struct Config {
    /// Port to listen on (binds all interfaces)
    pub port: u16,
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
