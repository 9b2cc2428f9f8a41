//! 高频指针移动
//!
//! 以固定间隔注入大量 pointermove，观察它们被合并为每帧一次渲染。

use clap::Parser;
use inputviz_rs::config::{OverlayConfig, PageConfig};
use inputviz_rs::input::{EventInit, EventKind};
use inputviz_rs::page::{ActionClicked, DeliverInput, PageWorld};
use inputviz_rs::sim::{SimTime, Simulator};

#[derive(Debug, Parser)]
#[command(name = "pointer-burst", about = "pointermove 突发：事件数 vs 渲染数")]
struct Args {
    /// 注入的 pointermove 个数
    #[arg(long, default_value_t = 1_000)]
    events: u64,
    /// 两次注入的间隔（微秒）
    #[arg(long, default_value_t = 1_000)]
    gap_us: u64,
    #[arg(long, default_value_t = 60)]
    refresh_hz: u32,
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let page_cfg = PageConfig {
        refresh_hz: args.refresh_hz,
        ..PageConfig::default()
    };
    if let Err(err) = page_cfg.validate() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    let mut sim = Simulator::default();
    let mut world = PageWorld::new(page_cfg, OverlayConfig::default());
    let tab = world.page.tab();

    sim.schedule(SimTime::ZERO, ActionClicked { tab: Some(tab) });

    let gap = SimTime::from_micros(args.gap_us);
    let mut t = SimTime::from_millis(1);
    for i in 0..args.events {
        let init = EventInit {
            client_x: (i % 800) as f64 + 0.4,
            client_y: (i % 600) as f64,
            ..EventInit::default()
        };
        sim.schedule(
            t,
            DeliverInput {
                kind: EventKind::PointerMove,
                init,
                stop_propagation: false,
            },
        );
        t = t.saturating_add(gap);
    }

    // 停在最后一次注入后的第一帧之后，行仍处于保持期
    let frame = page_cfg.frame_interval();
    let until = t.saturating_add(frame).saturating_add(frame);
    sim.run_until(until, &mut world);

    let line = world
        .engine()
        .and_then(|engine| engine.line(EventKind::PointerMove));
    match line {
        Some(line) => println!(
            "done @ {}, events={}, renders={}, repeat_count={}",
            sim.now(),
            args.events,
            line.renders(),
            line.repeat_count()
        ),
        None => println!("done @ {}, events={}, no active line", sim.now(), args.events),
    }
}
