use clap::Parser;
use futures::stream::TryStreamExt;
use futures::SinkExt;
use tvd::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let payload = SocketPayload::parse();
    let socket = payload
        .socket
        .clone()
        .unwrap_or_else(|| SOCKET_PATH.to_string());

    let stream = tokio::net::UnixStream::connect(&socket)
        .await
        .expect("can't connect to tvd socket");
    let (read_half, write_half) = stream.into_split();

    let sink = tokio_util::codec::FramedWrite::new(
        write_half,
        tokio_util::codec::LengthDelimitedCodec::new(),
    );
    let mut payloads = tokio_serde::SymmetricallyFramed::new(
        sink,
        tokio_serde::formats::SymmetricalBincode::<SocketPayload>::default(),
    );

    let frames = tokio_util::codec::FramedRead::new(
        read_half,
        tokio_util::codec::LengthDelimitedCodec::new(),
    );
    let mut responses = tokio_serde::SymmetricallyFramed::new(
        frames,
        tokio_serde::formats::SymmetricalBincode::<SocketResponse>::default(),
    );

    payloads.send(payload).await.expect("can't send command");

    let response = responses
        .try_next()
        .await
        .expect("can't read response")
        .expect("connection closed before response");

    if !response.output.is_empty() {
        println!("{}", response.output);
    }
}
