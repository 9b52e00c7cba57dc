use serde::{Deserialize, Serialize};

use crate::{models::GameSnapshot, session::SessionEvent};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The text in the word box changed
    AttemptChanged {
        text: String,
    },
    Submit {
        word: String,
    },
    StartGame,
}

impl From<ClientMessage> for SessionEvent {
    fn from(msg: ClientMessage) -> Self {
        match msg {
            ClientMessage::AttemptChanged { text } => SessionEvent::AttemptChanged(text),
            ClientMessage::Submit { word } => SessionEvent::Submit(word),
            ClientMessage::StartGame => SessionEvent::StartNewGame,
        }
    }
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full state of the game, sent after every change
    GameState(GameSnapshot),
    Error {
        message: String,
    },
}
