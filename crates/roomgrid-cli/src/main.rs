//! `roomgrid` CLI — query room availability and daily schedules from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # List the resolved rooms of a shared map
//! roomgrid rooms --sharing-id e8fdDx
//!
//! # Per-room availability for an explicit window
//! roomgrid availability --sharing-id e8fdDx --date 2026-03-16 --start 10:00 --end 11:00
//!
//! # Full daily schedule as JSON
//! roomgrid schedule --sharing-id e8fdDx --date 2026-03-16
//!
//! # Plan a one-hour booking starting at a slot
//! roomgrid pick --sharing-id e8fdDx --date 2026-03-16 --room Venus --at 11:00
//! ```
//!
//! Set `RUST_LOG=roomgrid_client=debug` to trace provider calls.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::process;

use roomgrid_client::{AvailabilityRequest, ProviderClient, ProviderConfig, ScheduleRequest};
use roomgrid_engine::autopick;
use roomgrid_engine::catalog::RoomCatalog;
use roomgrid_engine::clock;

#[derive(Parser)]
#[command(name = "roomgrid", version, about = "Meeting-room schedule overlay toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Sharing id of the target map
    #[arg(long, global = true, default_value = "")]
    sharing_id: String,

    /// Override the provider base URL
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the curated rooms resolved from the map's space list
    Rooms,
    /// Show per-room availability for an explicit time window
    Availability {
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Window start, HH:MM on a 10-minute grid
        #[arg(long)]
        start: String,
        /// Window end, HH:MM, strictly after the start
        #[arg(long)]
        end: String,
    },
    /// Print the assembled daily schedule as JSON
    Schedule {
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// Plan a one-hour booking starting at a timeline slot
    Pick {
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Room name as the provider knows it
        #[arg(long)]
        room: String,
        /// Slot start, HH:MM
        #[arg(long)]
        at: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(cli.base_url.clone())?;
    let sharing_id = cli.sharing_id.clone();

    match cli.command {
        Commands::Rooms => {
            let context = client.resolve_map_context(&sharing_id).await?;
            println!("{} (map {})", context.map_name, context.map_id);
            for room in &context.rooms {
                let window = match (room.window_start_minute, room.window_end_minute) {
                    (Some(start), Some(end)) => format!(
                        "{}–{}",
                        clock::minute_to_clock(i64::from(start)),
                        clock::minute_to_clock(i64::from(end))
                    ),
                    _ => "no operating window".to_string(),
                };
                println!("  {:>4}  {}  [{}]  {}", room.id, room.name, room.floor_label, window);
            }
        }
        Commands::Availability { date, start, end } => {
            let view = client
                .fetch_availability(&AvailabilityRequest {
                    sharing_map_id: sharing_id,
                    date,
                    start_time: start,
                    end_time: end,
                })
                .await?;
            println!(
                "{} {}–{}: {} available / {} occupied of {}",
                view.window.date,
                view.window.start_time,
                view.window.end_time,
                view.counts.available,
                view.counts.occupied,
                view.counts.total
            );
            for room in &view.rooms {
                let mark = if room.is_available { "free" } else { "busy" };
                println!("  [{mark}] {} ({})", room.name, room.floor_label);
            }
        }
        Commands::Schedule { date } => {
            let view = client
                .fetch_daily_schedule(&ScheduleRequest {
                    sharing_map_id: sharing_id,
                    date,
                })
                .await?;
            let pretty = serde_json::to_string_pretty(&view)
                .context("failed to serialize the schedule")?;
            println!("{pretty}");
        }
        Commands::Pick { date, room, at } => {
            let start_minute = match clock::parse_clock(&at) {
                Some(minute) => minute,
                None => bail!("--at must look like HH:MM"),
            };
            let view = client
                .fetch_daily_schedule(&ScheduleRequest {
                    sharing_map_id: sharing_id,
                    date,
                })
                .await?;
            let schedule = &view.schedule;

            let Some(target) = schedule.rooms.iter().find(|r| r.name == room) else {
                bail!("room '{room}' is not in the resolved room set");
            };
            let Some(slot) = schedule
                .timeline
                .iter()
                .find(|slot| slot.start_minute == start_minute)
            else {
                bail!(
                    "{at} is outside the timeline range {}–{}",
                    schedule.range.start_time,
                    schedule.range.end_time
                );
            };

            match autopick::plan_auto_pick(schedule, target, slot, Utc::now()) {
                Ok(pick) => {
                    println!(
                        "{} {} {}~{}",
                        pick.date,
                        target.name,
                        pick.start_time(),
                        pick.end_time()
                    );
                }
                Err(rejection) => {
                    println!("rejected: {rejection}");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn build_client(base_url: Option<String>) -> Result<ProviderClient> {
    let config = match base_url {
        Some(base_url) => ProviderConfig {
            base_url,
            ..ProviderConfig::default()
        },
        None => ProviderConfig::default(),
    };
    ProviderClient::with_config(config, RoomCatalog::production_default())
        .context("failed to build the provider client")
}
