// run.rs - Seeds a board, steps it and writes every generation to disk

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use simplelife::patterns::apply_pattern;
use simplelife::seed::seed_random;
use simplelife::{
    destroy, find_pattern, Board, ColumnStepper, CycleDetector, RasterFormat, Sequential, Stepper,
};

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Images written, including initial and final.
    pub frames: usize,
    /// Generations stepped, including the warm-up step.
    pub generations: usize,
    pub population: usize,
    pub stopped_on_cycle: bool,
}

struct Frames {
    dir: PathBuf,
    format: RasterFormat,
    written: usize,
}

impl Frames {
    fn write(&mut self, board: &Board, stem: &str) -> anyhow::Result<()> {
        let path = self.dir.join(format!("{stem}.{}", self.format.extension()));
        self.format
            .save(board, &path)
            .with_context(|| format!("failed to write image file \"{}\"", path.display()))?;
        self.written += 1;
        info!(path = %path.display(), population = board.population(), "wrote frame");
        Ok(())
    }
}

fn seed_board(board: &mut Board, config: &Config) -> anyhow::Result<()> {
    if let Some(name) = &config.pattern {
        let pattern = find_pattern(name).ok_or_else(|| anyhow!("unknown pattern \"{name}\""))?;
        let origin = pattern.centred_origin(board).ok_or_else(|| {
            anyhow!(
                "pattern \"{}\" does not fit on a {}x{} board",
                pattern.name,
                board.size_x(),
                board.size_y()
            )
        })?;
        apply_pattern(board, pattern, origin)?;
        info!(pattern = pattern.name, ?origin, "placed pattern");
        return Ok(());
    }

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    seed_random(board, &mut StdRng::seed_from_u64(seed), config.density)?;
    info!(seed, density = config.density, "seeded board");
    Ok(())
}

fn stepper(config: &Config) -> anyhow::Result<Box<dyn Stepper>> {
    if config.parallel {
        Ok(Box::new(ColumnStepper::new().context("failed to start column stepper")?))
    } else {
        Ok(Box::new(Sequential))
    }
}

/// Runs one simulation. The board is released on success and on error.
pub fn run(config: &Config) -> anyhow::Result<Summary> {
    let mut slot: Option<Board> = None;
    let board = slot.insert(Board::new(config.width, config.height)?);
    let summary = simulate(board, config);
    destroy(&mut slot);
    summary
}

fn simulate(board: &mut Board, config: &Config) -> anyhow::Result<Summary> {
    seed_board(board, config)?;

    fs::create_dir_all(&config.output).with_context(|| {
        format!("failed to create output directory \"{}\"", config.output.display())
    })?;
    let mut frames = Frames {
        dir: config.output.clone(),
        format: config.format.into(),
        written: 0,
    };

    let stepper = stepper(config)?;
    let mut detector = CycleDetector::new();
    let mut generations = 0;
    let mut stopped_on_cycle = false;

    frames.write(board, "initial")?;

    if !config.skip_warmup {
        stepper.step(board)?;
        generations += 1;
        debug!("took warm-up step");
    }

    for i in 0..config.steps {
        stepper.step(board)?;
        generations += 1;
        frames.write(board, &format!("step{i}"))?;

        if config.stop_on_cycle && detector.observe(board) {
            warn!(generation = generations, "board repeats a recent generation, stopping");
            stopped_on_cycle = true;
            break;
        }
    }

    frames.write(board, "final")?;

    let summary = Summary {
        frames: frames.written,
        generations,
        population: board.population(),
        stopped_on_cycle,
    };
    info!(?summary, "run finished");
    Ok(summary)
}
