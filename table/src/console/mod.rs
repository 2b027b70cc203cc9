mod render;

use log::warn;
use protocol::{JsonMessage, PlayerRequest, PlayerResponse};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::table::Request;

/// Terminal front end: stdin commands in, rendered events out.
#[derive(Debug)]
pub struct Console {
    pub(crate) _rx_handle: JoinHandle<()>,
    pub(crate) _tx_handle: JoinHandle<()>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Player(PlayerRequest),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if let Ok(req) = PlayerRequest::deser(line) {
        return Some(Command::Player(req));
    }
    let cmd = match line.to_lowercase().as_str() {
        "start" | "s" => Command::Player(PlayerRequest::StartRound),
        "again" | "a" => Command::Player(PlayerRequest::PlayAgain),
        "spin" => Command::Player(PlayerRequest::Spin),
        "next" | "n" => Command::Player(PlayerRequest::NextRound),
        "quit" | "q" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

impl Console {
    pub(crate) fn new(table_tx: mpsc::Sender<Request>, mut events: mpsc::Receiver<PlayerResponse>, json: bool) -> Self {
        let _rx_handle = tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                match parse_command(&line) {
                    Some(Command::Player(req)) => {
                        table_tx.send(Request::Player(req)).await.unwrap_or_default();
                    }
                    Some(Command::Quit) => break,
                    None if line.trim().is_empty() => {}
                    None => warn!("unknown command {:?}", line.trim()),
                }
            }
            table_tx.send(Request::Shutdown).await.unwrap_or_default();
        });

        let _tx_handle = tokio::spawn(async move {
            let mut stdout = tokio::io::stdout();
            while let Some(resp) = events.recv().await {
                let text = if json { resp.ser().ok() } else { render::render(&resp) };
                if let Some(text) = text {
                    if stdout.write_all(format!("{}\n", text).as_bytes()).await.is_err() {
                        break;
                    }
                    stdout.flush().await.unwrap_or_default();
                }
            }
        });

        Self { _rx_handle, _tx_handle }
    }

    /// Stops reading and waits for the already queued events to be printed.
    /// The event channel must be closed first.
    pub(crate) async fn close(self) {
        self._rx_handle.abort();
        self._tx_handle.await.unwrap_or_default();
    }
}
