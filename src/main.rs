// SPDX-License-Identifier: MPL-2.0
//! Demo: plays a simulated clip through a player session until it ends.
//!
//! ```text
//! player_sync [--fps N] [--duration SECS] [--width W] [--height H] [--config PATH]
//! ```

use player_sync::config::{self, Config};
use player_sync::error::{Error, Result};
use player_sync::infrastructure::SimulatedBackend;
use player_sync::ui::layout::ContainerBounds;
use player_sync::ui::time_display::format_time;
use player_sync::video_player::{
    frame_mailbox, session_channel, FramePresenter, PixelSurface, PlaybackController,
    PlaybackSettings, PlayerInput, Session, Timeline,
};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_DURATION_SECS: f64 = 5.0;

/// Viewport the demo lays frames out in.
const DEMO_VIEWPORT: ContainerBounds = ContainerBounds {
    width: 1280.0,
    height: 720.0,
};

struct Flags {
    fps: Option<u32>,
    duration_secs: f64,
    width: Option<u32>,
    height: Option<u32>,
    config_path: Option<PathBuf>,
}

fn parse_flags() -> Result<Flags> {
    let mut args = pico_args::Arguments::from_env();
    let arg_error = |e: pico_args::Error| Error::Config(e.to_string());

    let flags = Flags {
        fps: args.opt_value_from_str("--fps").map_err(arg_error)?,
        duration_secs: args
            .opt_value_from_str("--duration")
            .map_err(arg_error)?
            .unwrap_or(DEFAULT_DURATION_SECS),
        width: args.opt_value_from_str("--width").map_err(arg_error)?,
        height: args.opt_value_from_str("--height").map_err(arg_error)?,
        config_path: args.opt_value_from_str("--config").map_err(arg_error)?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::Config(format!("unexpected arguments: {rest:?}")));
    }
    if !(flags.duration_secs.is_finite() && flags.duration_secs > 0.0) {
        return Err(Error::Config(format!(
            "--duration must be a positive number of seconds, got {}",
            flags.duration_secs
        )));
    }
    Ok(flags)
}

fn resolve_settings(flags: &Flags) -> Result<PlaybackSettings> {
    let mut config: Config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if flags.fps.is_some() {
        config.frame_rate = flags.fps;
    }
    if flags.width.is_some() {
        config.output_width = flags.width;
    }
    if flags.height.is_some() {
        config.output_height = flags.height;
    }
    Ok(config.playback_settings())
}

/// A clip no longer than the end tolerance is over before it starts, so the
/// session would never leave `EndReached`.
fn check_duration(duration_secs: f64, settings: &PlaybackSettings) -> Result<()> {
    if duration_secs <= settings.end_tolerance_secs {
        return Err(Error::Config(format!(
            "--duration must exceed the end tolerance of {}s, got {duration_secs}",
            settings.end_tolerance_secs
        )));
    }
    Ok(())
}

async fn play(settings: PlaybackSettings, duration_secs: f64) -> Result<()> {
    let fps = settings.frame_rate.value();
    let (frames_tx, frames_rx) = frame_mailbox();
    let (handle, inbox) = session_channel();

    let backend = SimulatedBackend::new(frames_tx, handle.clone(), duration_secs, settings.frame_rate);
    let controller = PlaybackController::new(backend, Timeline::new(duration_secs), settings);
    let presenter = FramePresenter::new(frames_rx, PixelSurface::new());
    let (session, mut snapshots) = Session::new(controller, presenter, inbox);
    let task = tokio::spawn(session.run());

    handle.send(PlayerInput::Resize(DEMO_VIEWPORT))?;
    handle.send(PlayerInput::Play)?;

    let mut last_state = snapshots.borrow().state;
    let mut last_whole_second = None;
    while snapshots.changed().await.is_ok() {
        let snapshot = *snapshots.borrow_and_update();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole_second = snapshot.current_time.floor() as u64;
        if last_whole_second != Some(whole_second) {
            last_whole_second = Some(whole_second);
            log::info!(
                "{} / {}",
                format_time(snapshot.current_time, fps),
                format_time(snapshot.total_duration, fps)
            );
        }

        if snapshot.state != last_state {
            log::info!("state: {:?} -> {:?}", last_state, snapshot.state);
            last_state = snapshot.state;
            if snapshot.state.is_end_reached() {
                break;
            }
        }
    }

    handle.send(PlayerInput::Shutdown)?;
    let session = task.await.map_err(|_| Error::SessionClosed)?;
    let snapshot = session.snapshot();
    log::info!(
        "presented {} frames, last frame {:?} laid out at {:?}",
        snapshot.frames_presented,
        snapshot.frame_size,
        snapshot.layout
    );
    Ok(())
}

fn run() -> Result<()> {
    let flags = parse_flags()?;
    let settings = resolve_settings(&flags)?;
    check_duration(flags.duration_secs, &settings)?;
    log::info!(
        "playing {:.2}s at {} fps, {}x{}",
        flags.duration_secs,
        settings.frame_rate.value(),
        settings.output_size.width(),
        settings.output_size.height()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(play(settings, flags.duration_secs))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
