/// Central dispatcher for the flux architecture.
/// Receives Actions and hands them to the app loop, which routes them to Stores.
use crate::actions::Action;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a new Dispatcher with a receiver for processing actions
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// The only entry point for state changes
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::error!("Failed to dispatch action {:?}: receiver dropped", e.0);
        }
    }
}

pub struct ActionReceiver {
    rx: mpsc::UnboundedReceiver<Action>,
}

impl ActionReceiver {
    pub fn new(rx: mpsc::UnboundedReceiver<Action>) -> Self {
        Self { rx }
    }

    /// Wait for the next action
    pub async fn recv(&mut self) -> Option<Action> {
        self.rx.recv().await
    }
}
