#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::exit;
use std::time::{Duration, Instant};

use clap::Parser;

use carts::{Coords, Layout, Result, Simulation};

/// Run mine carts around a track map until they crash into each other.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Map to read; reads stdin if not given
    input: Option<PathBuf>,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: usize,

    /// Draw the tracks to stderr once the simulation is over
    #[arg(long)]
    render: bool,
}

#[inline(always)]
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let end = Instant::now();
    (result, end - start)
}

trait ReadString: Read {
    fn read_string(&mut self) -> io::Result<String> {
        let mut data = String::new();
        self.read_to_string(&mut data).map(|_| data)
    }
}

impl<T: Read> ReadString for T {}

fn read_input(path: Option<&Path>) -> Result<String> {
    let input = match path {
        Some(path) => fs::read_to_string(path)?,
        None => io::stdin().read_string()?,
    };

    Ok(input)
}

fn solve(input: &str, args: &Args) -> Result<String> {
    let layout: Layout = input.parse()?;
    let mut simulation = Simulation::new(layout)?;

    let first = match simulation.run_until_collision(args.max_ticks) {
        Some(location) => Coords(location).to_string(),
        None => "none".to_owned(),
    };

    let budget = args.max_ticks.saturating_sub(simulation.ticks());
    let last = match simulation.run_until_last(budget) {
        Some(cart) => Coords(cart.position()).to_string(),
        None => "none".to_owned(),
    };

    if args.render {
        eprintln!("{}", simulation.snapshot());
    }

    eprintln!("Ran {} ticks", simulation.ticks());

    Ok(format!("First collision: {}\nLast cart: {}", first, last))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let ((), total_duration) = timed(move || {
        let input = read_input(args.input.as_deref()).unwrap_or_else(|err| {
            eprintln!("{}", err);
            exit(1);
        });

        let (solution, duration) = timed(|| solve(&input, &args));
        match solution {
            Ok(solution) => println!("{}", solution),
            Err(err) => {
                eprintln!("{}", err);
                exit(1);
            }
        }

        eprintln!("Algorithm duration: {:?}", duration);
    });
    eprintln!("Total duration: {:?}", total_duration);
}
