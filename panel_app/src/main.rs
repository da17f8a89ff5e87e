// main.rs - LED panel Game of Life, in a window or on the terminal

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eframe::egui;
use led_panel::{Diagnostic, EffectKind, FrameBuffer, play_blocking};
use panel_app::{AppConfig, Show, ascii, draw_board};
use tracing::info;

mod ui;

#[derive(Parser, Debug)]
#[command(name = "panel_app", about = "Conway's Game of Life on a chain of 8x8 LED tiles")]
struct Cli {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    devices_wide: Option<u8>,

    #[arg(long)]
    devices_high: Option<u8>,

    /// Bounded board instead of a torus.
    #[arg(long)]
    no_wrap: bool,

    #[arg(long)]
    max_generations: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Print frames to the terminal instead of opening a window.
    #[arg(long)]
    headless: bool,

    /// Stop a headless run after this many ticks.
    #[arg(long)]
    frames: Option<u64>,

    /// Show a wiring diagnostic instead of the game.
    #[arg(long, value_enum)]
    diagnostic: Option<DiagnosticArg>,

    /// Play one end effect over the first board on this thread, then exit.
    #[arg(long, value_enum)]
    effect: Option<EffectArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EffectArg {
    SpiralIn,
    SpiralOut,
    Wave,
    Flash,
}

impl From<EffectArg> for EffectKind {
    fn from(arg: EffectArg) -> Self {
        match arg {
            EffectArg::SpiralIn => EffectKind::SpiralIn,
            EffectArg::SpiralOut => EffectKind::SpiralOut,
            EffectArg::Wave => EffectKind::Wave,
            EffectArg::Flash => EffectKind::Flash,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DiagnosticArg {
    Border,
    Identify,
    SpotRun,
}

impl From<DiagnosticArg> for Diagnostic {
    fn from(arg: DiagnosticArg) -> Self {
        match arg {
            DiagnosticArg::Border => Diagnostic::Border,
            DiagnosticArg::Identify => Diagnostic::Identify,
            DiagnosticArg::SpotRun => Diagnostic::SpotRun,
        }
    }
}

impl Cli {
    fn app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => AppConfig::default(),
        };
        if let Some(wide) = self.devices_wide {
            config.panel.devices_wide = wide;
        }
        if let Some(high) = self.devices_high {
            config.panel.devices_high = high;
        }
        if self.no_wrap {
            config.life.wrap = false;
        }
        if let Some(max) = self.max_generations {
            config.life.max_generations = max;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(diagnostic) = self.diagnostic {
            config.diagnostic = Some(diagnostic.into());
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.app_config()?;

    let mut show = Show::new(&config).context("building the panel show")?;
    let mut frame = FrameBuffer::new(show.panel().column_count());
    if let Some(effect) = cli.effect {
        play_once(&show, &mut frame, effect.into());
        return Ok(());
    }
    if let Some(diagnostic) = config.diagnostic {
        show.diagnostic(diagnostic, &mut frame);
    }

    if cli.headless {
        run_headless(show, frame, cli.frames)
    } else {
        run_window(show, frame)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn run_window(show: Show, frame: FrameBuffer) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LED Panel Life",
        options,
        Box::new(|_cc| Box::new(ui::PanelViewer::new(show, frame))),
    )
    .map_err(|err| anyhow::anyhow!("panel window failed: {err}"))
}

/// Draw the first board, then run `kind` to its end, sleeping out each
/// frame's hold on this thread.
fn play_once(show: &Show, frame: &mut FrameBuffer, kind: EffectKind) {
    let panel = show.panel();
    draw_board(panel, show.life(), frame);
    let mut effect = kind.build(panel);
    let frames = play_blocking(effect.as_mut(), panel, frame);
    println!("{}", ascii::render(panel, frame));
    info!(effect = %kind, frames, "effect played");
}

fn run_headless(show: Show, frame: FrameBuffer, limit: Option<u64>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting the tick runtime")?;
    runtime.block_on(drive(show, frame, limit));
    Ok(())
}

/// Tick the show until `limit` ticks have run or Ctrl-C arrives.
async fn drive(mut show: Show, mut frame: FrameBuffer, limit: Option<u64>) {
    let mut ticks = 0u64;
    loop {
        let hold = show.tick(&mut frame);
        ticks += 1;

        println!(
            "game {} gen {} [{}]\n{}",
            show.games_played(),
            show.life().get_generation_count(),
            show.phase_name(),
            ascii::render(show.panel(), &frame)
        );
        if let Some(message) = show.take_message() {
            info!(%message, "message for the text scroller");
        }

        if limit.is_some_and(|limit| ticks >= limit) {
            break;
        }
        tokio::select! {
            _ = tokio::time::sleep(hold.max(Duration::from_millis(1))) => {}
            _ = tokio::signal::ctrl_c() => {
                info!(ticks, "interrupted");
                break;
            }
        }
    }
    info!(ticks, games = show.games_played(), "headless run finished");
}
