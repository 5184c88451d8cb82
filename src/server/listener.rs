use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::Config;
use crate::files::ServedRoot;
use crate::http::connection::Connection;

/// Trace marker emitted around each request.
const SEPARATOR: &str = "========================================";

/// Binds the listening socket with address reuse enabled.
pub fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let socket = TcpSocket::new_v4()?;
    socket.set_reuseaddr(true)?;
    socket.bind(addr.parse()?)?;
    let listener = socket.listen(1024)?;
    Ok(listener)
}

/// Accept loop: one task per connection, one request per connection.
///
/// Failures after accept belong to the connection's task and are logged
/// there; a failed accept is logged and the loop keeps going. Nothing past
/// bind can take the server down.
pub async fn serve(listener: TcpListener, root: ServedRoot) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let root = root.clone();
        tokio::spawn(async move {
            info!("{}", SEPARATOR);
            let mut conn = Connection::new(socket, root);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
            info!("{}", SEPARATOR);
        });
    }
}

pub async fn run(cfg: &Config, root: ServedRoot) -> anyhow::Result<()> {
    let addr = cfg.listen_addr();
    let listener = bind(&addr)?;
    info!("Serving {} on {}", root.base().display(), addr);

    serve(listener, root).await
}
