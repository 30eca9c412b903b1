use futures::stream::TryStreamExt;
use futures::SinkExt;
use tvd::*;
use tvremote::RemoteController;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

async fn handle_client(
    remote: &mut RemoteController,
    stream: tokio::net::UnixStream,
) -> Result<(), Error> {
    let (read_half, write_half) = stream.into_split();

    let frames = tokio_util::codec::FramedRead::new(
        read_half,
        tokio_util::codec::LengthDelimitedCodec::new(),
    );
    let mut payloads = tokio_serde::SymmetricallyFramed::new(
        frames,
        tokio_serde::formats::SymmetricalBincode::<SocketPayload>::default(),
    );

    let sink = tokio_util::codec::FramedWrite::new(
        write_half,
        tokio_util::codec::LengthDelimitedCodec::new(),
    );
    let mut responses = tokio_serde::SymmetricallyFramed::new(
        sink,
        tokio_serde::formats::SymmetricalBincode::<SocketResponse>::default(),
    );

    while let Some(payload) = payloads.try_next().await? {
        tracing::debug!("dispatch cmd={:?}", payload.cmd);
        let output = remote.execute(payload.cmd);
        responses.send(SocketResponse { output }).await?;
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut listenfd = listenfd::ListenFd::from_env();
    let listener = listenfd
        .take_unix_listener(0)
        .expect("invalid fd type")
        .expect("can't get unix listener");
    let listener = tokio::net::UnixListener::from_std(listener).unwrap();

    // One controller per daemon session. The accept loop holds the only
    // mutable reference, so clients are served one at a time and every
    // OptionsShow reflects all previously dispatched commands.
    let mut remote = RemoteController::new();
    tracing::info!("tvd ready");

    loop {
        match listener.accept().await {
            Ok((stream, _addr)) => {
                if let Err(e) = handle_client(&mut remote, stream).await {
                    tracing::error!("handle_client: {}", e);
                }
            }
            Err(e) => tracing::error!("listener error: {}", e),
        }
    }
}
