use crossbeam_channel::{Receiver, Sender};
use std::thread::{self, JoinHandle};

#[derive(Clone, Debug)]
pub enum ControlMessage {
    Copy(String),
    Stop,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

pub struct ClipboardHandle {
    pub sender: Sender<ControlMessage>,
    pub join: Option<JoinHandle<()>>,
}

impl ClipboardHandle {
    pub fn shutdown(&mut self) {
        let _ = self.sender.send(ControlMessage::Stop);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawn the thread that owns the platform clipboard. Copy requests go in
/// over the returned handle; outcomes come back over `outcome_tx` and are
/// drained by the UI loop. No retry, timeout or cancellation.
pub fn spawn_clipboard_worker(outcome_tx: Sender<CopyOutcome>) -> ClipboardHandle {
    let (tx, rx) = crossbeam_channel::unbounded();
    let join = thread::spawn(move || run_worker(rx, outcome_tx));
    ClipboardHandle {
        sender: tx,
        join: Some(join),
    }
}

fn run_worker(control_rx: Receiver<ControlMessage>, outcome_tx: Sender<CopyOutcome>) {
    // Created on first use; on headless hosts the constructor itself fails,
    // which surfaces as a failed copy rather than a startup error.
    let mut clipboard: Option<arboard::Clipboard> = None;

    loop {
        match control_rx.recv() {
            Ok(ControlMessage::Copy(text)) => {
                let outcome = write_clipboard(&mut clipboard, text);
                if let CopyOutcome::Failed(reason) = &outcome {
                    tracing::warn!(%reason, "clipboard write failed");
                }
                let _ = outcome_tx.send(outcome);
            }
            Ok(ControlMessage::Stop) | Err(_) => break,
        }
    }
}

fn write_clipboard(slot: &mut Option<arboard::Clipboard>, text: String) -> CopyOutcome {
    if slot.is_none() {
        match arboard::Clipboard::new() {
            Ok(handle) => *slot = Some(handle),
            Err(err) => return CopyOutcome::Failed(err.to_string()),
        }
    }
    let Some(clipboard) = slot.as_mut() else {
        return CopyOutcome::Failed("clipboard unavailable".to_string());
    };

    match clipboard.set_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(err) => CopyOutcome::Failed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_stops_on_stop_message() {
        let (outcome_tx, _outcome_rx) = crossbeam_channel::unbounded();
        let mut handle = spawn_clipboard_worker(outcome_tx);
        handle.shutdown();
        assert!(handle.join.is_none());
    }

    #[test]
    fn worker_stops_when_control_channel_closes() {
        let (outcome_tx, _outcome_rx) = crossbeam_channel::unbounded();
        let handle = spawn_clipboard_worker(outcome_tx);
        drop(handle.sender);
        handle
            .join
            .expect("join handle")
            .join()
            .expect("worker should exit cleanly");
    }
}
