#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a bot-driven Coin Clash match over the
//! in-process broker, exercising the full message flow end to end.

use anyhow::Context;
use clap::Parser;
use coin_clash_core::{JoinRequest, ScoreBoard};
use coin_clash_relay::{
    decode_scores, decode_view, game_state_topic, lobby_topic, move_topic, scores_topic,
    start_topic, Dispatcher, MemoryBroker, Message, Publisher, JOIN_TOPIC,
};
use coin_clash_system_bot::Bot;
use coin_clash_world::grid::GridConfig;
use coin_clash_world::{World, WorldConfig};
use tracing_subscriber::EnvFilter;

const LOBBY_NAME: &str = "demo";

/// Runs a complete bot-driven match and prints the final standings.
#[derive(Debug, Parser)]
#[command(name = "coin-clash", about = "Coin Clash demo match runner")]
struct Args {
    /// Number of rows in the generated grid.
    #[arg(long, default_value_t = 10)]
    height: u32,

    /// Number of columns in the generated grid.
    #[arg(long, default_value_t = 10)]
    width: u32,

    /// Number of competing teams.
    #[arg(long, default_value_t = 2)]
    teams: u32,

    /// Number of bot players per team.
    #[arg(long, default_value_t = 2)]
    players_per_team: u32,

    /// Chebyshev radius of each player's vision window.
    #[arg(long, default_value_t = 2)]
    radius: u32,

    /// Seed shared by map generation and the bots' random walks.
    #[arg(long, default_value_t = 2024)]
    seed: u64,

    /// Stop the match after this many resolved turns.
    #[arg(long, default_value_t = 500)]
    max_turns: u32,
}

struct Seat {
    player_name: String,
    state_topic: String,
    bot: Bot,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.teams > 0, "at least one team is required");
    anyhow::ensure!(
        args.players_per_team > 0,
        "at least one player per team is required"
    );

    let config = WorldConfig {
        grid: GridConfig {
            height: args.height,
            width: args.width,
            ..GridConfig::default()
        },
        vision_radius: args.radius,
        rng_seed: args.seed,
    };
    let mut dispatcher = Dispatcher::new(World::with_config(config));
    let mut broker = MemoryBroker::new();

    let mut seats = Vec::new();
    for team in 0..args.teams {
        let team_name = format!("team-{team}");
        for slot in 0..args.players_per_team {
            let player_name = format!("bot-{team}-{slot}");
            let request = JoinRequest {
                lobby_name: LOBBY_NAME.to_owned(),
                team_name: team_name.clone(),
                player_name: player_name.clone(),
            };
            broker.publish(Message {
                topic: JOIN_TOPIC.to_owned(),
                payload: serde_json::to_vec(&request).context("serialize join request")?,
            });
            seats.push(Seat {
                state_topic: game_state_topic(LOBBY_NAME, &player_name),
                bot: Bot::new(args.seed ^ (u64::from(team) << 16) ^ u64::from(slot)),
                player_name,
            });
        }
    }

    publish_text(&mut broker, start_topic(LOBBY_NAME), "START");
    tracing::info!(
        teams = args.teams,
        players_per_team = args.players_per_team,
        seed = args.seed,
        "match starting"
    );

    let scores_channel = scores_topic(LOBBY_NAME);
    let lobby_channel = lobby_topic(LOBBY_NAME);
    let mut turns = 0u32;
    let mut stop_sent = false;
    let mut final_scores = ScoreBoard::new();

    while let Some(message) = broker.pop() {
        if dispatcher.wants(&message.topic) {
            dispatcher.handle(&message.topic, &message.payload, &mut broker);
            continue;
        }

        if let Some(seat) = seats
            .iter_mut()
            .find(|seat| seat.state_topic == message.topic)
        {
            let view = decode_view(&message.payload).context("decode published view")?;
            let direction = seat.bot.decide(&view);
            publish_text(
                &mut broker,
                move_topic(LOBBY_NAME, &seat.player_name),
                direction.token(),
            );
        } else if message.topic == scores_channel {
            final_scores = decode_scores(&message.payload).context("decode published scores")?;
            turns += 1;
            tracing::debug!(turn = turns, ?final_scores, "turn resolved");
            if turns >= args.max_turns && !stop_sent {
                stop_sent = true;
                tracing::info!(turns, "turn cap reached, stopping the match");
                publish_text(&mut broker, start_topic(LOBBY_NAME), "STOP");
            }
        } else if message.topic == lobby_channel {
            let notice =
                String::from_utf8(message.payload).context("notices are human-readable text")?;
            tracing::info!(%notice);
        }
    }

    println!("match over after {turns} turns");
    for (team, score) in &final_scores {
        println!("  {team}: {score}");
    }

    Ok(())
}

fn publish_text(broker: &mut MemoryBroker, topic: String, payload: &str) {
    broker.publish(Message {
        topic,
        payload: payload.as_bytes().to_vec(),
    });
}
