use std::fs;
use std::time::Instant;

use anyhow::{bail, Context};
use colored::Colorize;
use u_stackkit::harness::{builtin_suites, evaluate, Algorithm, Case, Report, Suite};
use u_stackkit::random::{
    create_rng, random_asteroids, random_brackets, random_heights, shuffle,
};

use crate::cli::{Command, WorkloadKind};
use crate::table::{print_report, print_summary};

/// Runs one subcommand. `Ok(false)` means it completed but something
/// failed a check, which the caller turns into exit code 1.
pub fn execute_command(command: Command, verbose: bool) -> anyhow::Result<bool> {
    match command {
        Command::Run {
            suites,
            only,
            skip_builtin,
        } => {
            let mut loaded = if skip_builtin {
                Vec::new()
            } else {
                builtin_suites()
            };
            for path in &suites {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("reading suite {}", path.display()))?;
                let suite = Suite::from_toml_str(&source)
                    .with_context(|| format!("parsing suite {}", path.display()))?;
                loaded.push(suite);
            }
            if let Some(algorithm) = only {
                loaded = loaded
                    .iter()
                    .map(|s| s.only(algorithm))
                    .filter(|s| !s.cases.is_empty())
                    .collect();
            }
            if loaded.is_empty() {
                bail!("no cases to run");
            }
            run_suites(&loaded, verbose)
        }
        Command::Check { algorithm, values } => check(algorithm, &values),
        Command::Gen {
            kind,
            len,
            seed,
            max,
        } => {
            let suite = generate(kind, len, seed, max)?;
            print!("{}", suite.to_toml_string()?);
            Ok(true)
        }
    }
}

fn run_suites(suites: &[Suite], verbose: bool) -> anyhow::Result<bool> {
    let (mut passed, mut total) = (0, 0);
    for suite in suites {
        let report = run_timed(suite, verbose)?;
        print_report(&report);
        passed += report.passed();
        total += report.outcomes.len();
    }
    print_summary(passed, total);
    Ok(passed == total)
}

/// Runs every case of `suite`, timing each one. With `verbose`, the
/// input and duration of each case go to stderr.
fn run_timed(suite: &Suite, verbose: bool) -> anyhow::Result<Report> {
    let suite_started = Instant::now();
    let mut outcomes = Vec::with_capacity(suite.cases.len());
    for case in &suite.cases {
        let started = Instant::now();
        let outcome = case
            .run()
            .with_context(|| format!("running suite {}", suite.name))?;
        if verbose {
            let input = match &case.text {
                Some(text) => format!("{text:?}"),
                None => format!("{:?}", case.input),
            };
            eprintln!(
                "[{}] {} <- {input} ({:?})",
                case.algorithm,
                case.name,
                started.elapsed()
            );
        }
        outcomes.push(outcome);
    }
    if verbose {
        eprintln!(
            "[{}] {} cases in {:?}",
            suite.name,
            outcomes.len(),
            suite_started.elapsed()
        );
    }
    Ok(Report {
        suite: suite.name.clone(),
        outcomes,
    })
}

fn check(algorithm: Algorithm, values: &[String]) -> anyhow::Result<bool> {
    let text = (algorithm == Algorithm::Brackets).then(|| values.join(" "));
    let input = if text.is_some() {
        Vec::new()
    } else {
        values
            .iter()
            .map(|v| {
                v.parse::<i64>()
                    .with_context(|| format!("{v:?} is not an integer"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let evaluation = evaluate(algorithm, text.as_deref(), &input, "command line")?;
    println!("{algorithm}: {}", evaluation.actual);
    match evaluation.note {
        Some(note) => {
            eprintln!("{}", note.yellow());
            Ok(false)
        }
        None => Ok(true),
    }
}

const HEIGHT_ALGORITHMS: &[Algorithm] = &[
    Algorithm::Histogram,
    Algorithm::RainWater,
    Algorithm::SubarrayMin,
    Algorithm::NextGreater,
    Algorithm::MinStack,
];
const ASTEROID_ALGORITHMS: &[Algorithm] = &[Algorithm::Asteroids];
const BRACKET_ALGORITHMS: &[Algorithm] = &[Algorithm::Brackets];

/// Builds a regression suite from a seeded workload, recording the
/// current results as expectations.
fn generate(kind: WorkloadKind, len: usize, seed: u64, max: i64) -> anyhow::Result<Suite> {
    let mut rng = create_rng(seed);
    let name = format!("seed-{seed}");

    let (text, input, algorithms): (Option<String>, Vec<i64>, &[Algorithm]) = match kind {
        WorkloadKind::Heights => {
            let max_height = u64::try_from(max).context("--max must be non-negative")?;
            let heights = random_heights(len, max_height, &mut rng)
                .into_iter()
                .map(i64::try_from)
                .collect::<Result<Vec<_>, _>>()
                .context("height does not fit i64")?;
            (None, heights, HEIGHT_ALGORITHMS)
        }
        WorkloadKind::Asteroids => (
            None,
            random_asteroids(len, max, &mut rng),
            ASTEROID_ALGORITHMS,
        ),
        WorkloadKind::Brackets => (
            Some(random_brackets(len, &mut rng)),
            Vec::new(),
            BRACKET_ALGORITHMS,
        ),
        WorkloadKind::ScrambledBrackets => {
            let mut chars: Vec<char> = random_brackets(len, &mut rng).chars().collect();
            shuffle(&mut chars, &mut rng);
            (
                Some(chars.into_iter().collect()),
                Vec::new(),
                BRACKET_ALGORITHMS,
            )
        }
    };

    let mut cases = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let evaluation = evaluate(algorithm, text.as_deref(), &input, &name)?;
        cases.push(Case {
            algorithm,
            name: name.clone(),
            text: text.clone(),
            input: input.clone(),
            expected: evaluation.actual,
        });
    }
    Ok(Suite::new(format!("generated {name}"), cases))
}
