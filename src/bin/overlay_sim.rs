//! 场景仿真
//!
//! 在模拟页面上运行一个场景 JSON，打印覆盖层快照，可选写出表面变化记录。

use clap::Parser;
use inputviz_rs::config::{OverlayConfig, PageConfig};
use inputviz_rs::overlay::plain_text;
use inputviz_rs::page::{schedule_scenario, OverlaySample, PageWorld};
use inputviz_rs::sim::{ScenarioSpec, SimTime, Simulator};
use inputviz_rs::trace::TraceEventKind;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "overlay-sim",
    about = "Run a scenario.json against the simulated page with the input overlay"
)]
struct Args {
    /// Path to scenario.json
    #[arg(long)]
    scenario: PathBuf,

    /// Output trace JSON file (surface mutations)
    #[arg(long)]
    trace_json: Option<PathBuf>,

    /// Run until this time (ms); defaults to running until the queue drains
    #[arg(long)]
    until_ms: Option<u64>,

    /// Print samples as JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Override display refresh rate (Hz)
    #[arg(long)]
    refresh_hz: Option<u32>,

    /// Override hold time before a line starts fading (ms)
    #[arg(long)]
    hold_ms: Option<u64>,

    /// Override fade duration (ms)
    #[arg(long)]
    fade_ms: Option<u64>,
}

fn configs(args: &Args, spec: &ScenarioSpec) -> (PageConfig, OverlayConfig) {
    let mut page = spec.page_config();
    let mut overlay = spec.overlay_config();
    if let Some(hz) = args.refresh_hz {
        page.refresh_hz = hz;
    }
    if let Some(ms) = args.hold_ms {
        overlay.hold_ms = ms;
    }
    if let Some(ms) = args.fade_ms {
        overlay.fade_ms = ms;
    }
    (page, overlay)
}

fn print_sample(sample: &OverlaySample) {
    let label = sample
        .label
        .as_deref()
        .map(|l| format!(" [{l}]"))
        .unwrap_or_default();
    println!(
        "sample @ {}{} active={} on_top={} lines={}",
        SimTime(sample.t_ns),
        label,
        sample.active,
        sample.on_top,
        sample.lines.len()
    );
    for line in &sample.lines {
        println!(
            "  {}  (opacity={:.2}, state={:?})",
            plain_text(&line.markup),
            line.opacity,
            line.state
        );
    }
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let spec = match ScenarioSpec::load(&args.scenario) {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };
    let (page_cfg, overlay_cfg) = configs(&args, &spec);
    if let Err(err) = page_cfg.validate().and_then(|_| overlay_cfg.validate()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
    if let Some(name) = spec.meta.as_ref().and_then(|m| m.name.as_deref()) {
        info!(scenario = name, "加载场景");
    }

    let mut sim = Simulator::default();
    let mut world = PageWorld::new(page_cfg, overlay_cfg);
    let last = schedule_scenario(&mut sim, &spec, world.page.tab());
    info!(steps = spec.steps.len(), last = %last, "开始运行场景");

    match args.until_ms {
        Some(ms) => sim.run_until(SimTime::from_millis(ms), &mut world),
        None => sim.run(&mut world),
    }

    for sample in &world.samples {
        if args.json {
            match serde_json::to_string(sample) {
                Ok(line) => println!("{line}"),
                Err(err) => eprintln!("failed to encode sample: {err}"),
            }
        } else {
            print_sample(sample);
        }
    }

    if let Some(path) = args.trace_json {
        match world.trace.to_json() {
            Ok(json) => {
                if let Err(err) = fs::write(&path, json) {
                    eprintln!("failed to write {}: {err}", path.display());
                    process::exit(1);
                }
                eprintln!("wrote trace events to {}", path.display());
            }
            Err(err) => {
                eprintln!("failed to encode trace: {err}");
                process::exit(1);
            }
        }
    }

    let renders = world
        .trace
        .count(|k| matches!(k, TraceEventKind::Rendered { .. }));
    let removed = world
        .trace
        .count(|k| matches!(k, TraceEventKind::LineRemoved { .. }));
    println!(
        "done @ {}, renders={}, lines_removed={}, active={}",
        sim.now(),
        renders,
        removed,
        world.toggle.is_active()
    );
}
