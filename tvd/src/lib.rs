pub const SOCKET_PATH: &str = "/run/tvd/socket";

/// One remote-control command sent over the socket.
#[derive(Debug, serde::Deserialize, serde::Serialize, clap::Parser)]
pub struct SocketPayload {
    /// Daemon socket path (defaults to /run/tvd/socket)
    #[clap(long)]
    pub socket: Option<String>,

    #[clap(subcommand)]
    pub cmd: tvremote::Command,
}

/// Dispatch result sent back to the client. `output` is empty for every
/// command except `OptionsShow`.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct SocketResponse {
    pub output: String,
}
