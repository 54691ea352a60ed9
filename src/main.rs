use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};

use fractal_curves::{BatchAction, CurveKinds, FractalSession, LogPresenter, Workbench, WorkbenchConfig};

const DEFAULT_LOG_FILTER: &str = "fractal_curves=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ActionArg {
    /// Primary curve, then the depth-1 preview
    Sequential,
    /// Primary curve and every preview at once
    Parallel,
    /// Erase every slot
    Clear,
}

impl From<ActionArg> for BatchAction {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Sequential => Self::RunSequentialPair,
            ActionArg::Parallel => Self::RunParallelSet,
            ActionArg::Clear => Self::Clear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CurveArg {
    Cesaro,
    Koch,
}

impl From<CurveArg> for CurveKinds {
    fn from(curve: CurveArg) -> Self {
        match curve {
            CurveArg::Cesaro => Self::Cesaro,
            CurveArg::Koch => Self::Koch,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "fractal_curves")]
#[command(about = "Computes Cesaro and Koch curves into a set of drawing slots")]
struct Cli {
    /// Batch action to run
    #[arg(long, value_enum, default_value = "parallel")]
    action: ActionArg,

    /// Curve drawn in every slot
    #[arg(long, value_enum, default_value = "cesaro")]
    curve: CurveArg,

    /// Recursion depth of the primary slot (0..=15)
    #[arg(long, allow_negative_numbers = true)]
    iterations: Option<i64>,

    /// Turn angle divisor of the primary slot (1..=50)
    #[arg(long, allow_negative_numbers = true)]
    angle_divisor: Option<i64>,
}

impl Cli {
    fn workbench_config(&self) -> WorkbenchConfig {
        let defaults = WorkbenchConfig::default();

        match (self.iterations, self.angle_divisor) {
            (None, None) => WorkbenchConfig {
                curve: self.curve.into(),
                ..defaults
            },
            (iterations, angle_divisor) => WorkbenchConfig {
                curve: self.curve.into(),
                iterations,
                angle_divisor,
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt().with_env_filter(filter).with_target(false).compact().init();

    for line in run(&Cli::parse())? {
        println!("{line}");
    }

    Ok(())
}

/// Runs the requested action and returns one summary line per slot.
fn run(cli: &Cli) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let workbench = Workbench::new(cli.workbench_config(), Arc::new(LogPresenter::new()))?;

    workbench.trigger(cli.action.into())?;

    let mut lines = vec![summary("primary", workbench.primary())];
    lines.extend(
        workbench
            .previews()
            .map(|(depth, session)| summary(&format!("preview depth {depth}"), session)),
    );

    Ok(lines)
}

fn summary(slot: &str, session: &FractalSession) -> String {
    let vertices = session.snapshot();

    match (vertices.first(), vertices.last()) {
        (Some(first), Some(last)) => format!(
            "{slot}: {} {} vertices from ({:.2}, {:.2}) to ({:.2}, {:.2})",
            session.config().curve().display_name(),
            vertices.len(),
            first.x,
            first.y,
            last.x,
            last.y
        ),
        _ => format!("{slot}: {} empty", session.config().curve().display_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fractal_curves").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);

        assert_eq!(cli.action, ActionArg::Parallel);
        assert_eq!(cli.curve, CurveArg::Cesaro);
        assert_eq!(cli.workbench_config(), WorkbenchConfig::default());
    }

    #[test]
    fn test_one_missing_input_drops_both() {
        let config = parse(&["--iterations", "3"]).workbench_config();

        assert_eq!(config.iterations, Some(3));
        assert_eq!(config.angle_divisor, None);
    }

    #[test]
    fn test_negative_input_parses() {
        let config = parse(&["--iterations", "-1", "--angle-divisor", "4"]).workbench_config();

        assert_eq!(config.iterations, Some(-1));
    }

    #[test]
    fn test_rejects_unknown_action() {
        assert!(Cli::try_parse_from(["fractal_curves", "--action", "spin"]).is_err());
    }

    #[test]
    fn test_clear_reports_empty_slots() {
        let lines = run(&parse(&["--action", "clear"])).unwrap();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "primary: Cesaro empty");
    }

    #[test]
    fn test_sequential_koch_run() {
        let lines = run(&parse(&[
            "--action",
            "sequential",
            "--curve",
            "koch",
            "--iterations",
            "2",
            "--angle-divisor",
            "4",
        ]))
        .unwrap();

        assert_eq!(
            lines[0],
            "primary: Koch 17 vertices from (50.00, 430.00) to (550.00, 430.00)"
        );
        assert_eq!(lines.last().unwrap(), "preview depth 1: Koch 5 vertices from (50.00, 430.00) to (550.00, 430.00)");
    }
}
