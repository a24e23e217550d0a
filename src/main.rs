//! paging-trace - run a page request sequence through a frame pool and print
//! what each request did.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use framepool::trace::TraceRecorder;
use framepool::{EvictionPolicy, FramePool, PageId, PoolConfig, DEFAULT_FRAME_COUNT};

/// Trace page hits and faults for a request sequence
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames in the pool
    #[arg(short = 'n', long, default_value_t = DEFAULT_FRAME_COUNT)]
    frames: usize,

    /// Eviction policy: fifo, lru or second-chance
    #[arg(short, long, default_value = "second-chance")]
    policy: EvictionPolicy,

    /// Print the frame table after every request
    #[arg(short = 't', long)]
    frames_table: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Page numbers to request, in order
    #[arg(required = true, num_args = 1..)]
    requests: Vec<u32>,
}

fn run(args: Args) -> framepool::Result<()> {
    let mut pool = FramePool::with_config(PoolConfig::new(args.frames, args.policy))?;

    let mut recorder = TraceRecorder::new();
    recorder.run(&mut pool, args.requests.into_iter().map(PageId::new));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    recorder.render(&mut out, args.frames_table)?;
    writeln!(out, "{} ({} frames): {}", pool.policy(), pool.frame_count(), pool.stats())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
