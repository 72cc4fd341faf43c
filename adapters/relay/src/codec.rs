//! Topic scheme codec.
//!
//! Parses inbound broker messages into [`Command`] values in a single pass
//! over the topic, and renders world [`Event`] values onto their outbound
//! topics. Join payloads are JSON, start and move payloads are plain
//! literals, published views and scores are JSON, notices are plain text.

use coin_clash_core::{
    Command, Direction, Event, JoinRequest, ScoreBoard, ViewData, MAX_NAME_LENGTH,
};
use thiserror::Error;

use crate::Message;

/// Topic on which join requests arrive.
pub const JOIN_TOPIC: &str = "new_game";

/// Subscription filters covering every inbound topic of the scheme.
pub const SUBSCRIPTION_FILTERS: [&str; 3] = [JOIN_TOPIC, "games/+/start", "games/+/+/move"];

/// Reasons an inbound message cannot be turned into a command.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The topic does not belong to the inbound scheme.
    #[error("topic {0:?} does not match the inbound scheme")]
    UnknownTopic(String),
    /// A JSON payload failed to parse into its expected shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    /// A join request carried an empty or oversized name.
    #[error("{field} must be 1 to {MAX_NAME_LENGTH} characters")]
    InvalidName {
        /// The offending join request field.
        field: &'static str,
    },
    /// A start topic carried something other than `START` or `STOP`.
    #[error("start payload must be START or STOP")]
    InvalidStartSignal,
    /// A move topic carried something other than a direction token.
    #[error("move payload {0:?} is not a direction")]
    InvalidDirection(String),
    /// A textual payload was not valid UTF-8.
    #[error("payload is not valid UTF-8")]
    NotUtf8,
}

/// Parses an inbound topic and payload into a command.
pub fn decode(topic: &str, payload: &[u8]) -> Result<Command, DecodeError> {
    let segments: Vec<&str> = topic.split('/').collect();
    match segments.as_slice() {
        ["new_game"] => {
            let request: JoinRequest = serde_json::from_slice(payload)?;
            validate_name(&request.lobby_name, "lobby_name")?;
            validate_name(&request.team_name, "team_name")?;
            validate_name(&request.player_name, "player_name")?;
            Ok(Command::Join {
                lobby_name: request.lobby_name,
                team_name: request.team_name,
                player_name: request.player_name,
            })
        }
        ["games", lobby_name, "start"] if !lobby_name.is_empty() => match payload {
            b"START" => Ok(Command::Start {
                lobby_name: (*lobby_name).to_owned(),
            }),
            b"STOP" => Ok(Command::Stop {
                lobby_name: (*lobby_name).to_owned(),
            }),
            _ => Err(DecodeError::InvalidStartSignal),
        },
        ["games", lobby_name, player_name, "move"]
            if !lobby_name.is_empty() && !player_name.is_empty() =>
        {
            let token = std::str::from_utf8(payload).map_err(|_| DecodeError::NotUtf8)?;
            let direction =
                Direction::from_token(token).ok_or_else(|| DecodeError::InvalidDirection(token.to_owned()))?;
            Ok(Command::Move {
                lobby_name: (*lobby_name).to_owned(),
                player_name: (*player_name).to_owned(),
                direction,
            })
        }
        _ => Err(DecodeError::UnknownTopic(topic.to_owned())),
    }
}

fn validate_name(name: &str, field: &'static str) -> Result<(), DecodeError> {
    let length = name.chars().count();
    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(DecodeError::InvalidName { field });
    }
    Ok(())
}

/// Renders a world event into the message published for it.
pub fn encode(event: &Event) -> Message {
    match event {
        Event::ViewUpdated {
            lobby_name,
            player_name,
            view,
        } => Message {
            topic: game_state_topic(lobby_name, player_name),
            payload: serde_json::to_vec(view).expect("view serialization never fails"),
        },
        Event::ScoresUpdated { lobby_name, scores } => Message {
            topic: scores_topic(lobby_name),
            payload: serde_json::to_vec(scores).expect("score serialization never fails"),
        },
        Event::NoticePosted { lobby_name, notice } => Message {
            topic: lobby_topic(lobby_name),
            payload: notice.to_string().into_bytes(),
        },
    }
}

/// Parses a published per-player view payload back into [`ViewData`].
pub fn decode_view(payload: &[u8]) -> Result<ViewData, DecodeError> {
    Ok(serde_json::from_slice(payload)?)
}

/// Parses a published score payload back into a [`ScoreBoard`].
pub fn decode_scores(payload: &[u8]) -> Result<ScoreBoard, DecodeError> {
    Ok(serde_json::from_slice(payload)?)
}

/// Outbound topic carrying one player's view of a lobby's grid.
#[must_use]
pub fn game_state_topic(lobby_name: &str, player_name: &str) -> String {
    format!("games/{lobby_name}/{player_name}/game_state")
}

/// Outbound topic carrying a lobby's team scores.
#[must_use]
pub fn scores_topic(lobby_name: &str) -> String {
    format!("games/{lobby_name}/scores")
}

/// Outbound topic carrying a lobby's human-readable notices.
#[must_use]
pub fn lobby_topic(lobby_name: &str) -> String {
    format!("games/{lobby_name}/lobby")
}

/// Inbound topic carrying one player's move submissions.
#[must_use]
pub fn move_topic(lobby_name: &str, player_name: &str) -> String {
    format!("games/{lobby_name}/{player_name}/move")
}

/// Inbound topic carrying a lobby's start and stop signals.
#[must_use]
pub fn start_topic(lobby_name: &str) -> String {
    format!("games/{lobby_name}/start")
}
