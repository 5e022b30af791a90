mod os_signal_termination;
mod result;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use congruence_solver::core::branching::branchers::create_brancher;
use congruence_solver::core::branching::value_selection::ValueSelection;
use congruence_solver::core::branching::variable_selection::VariableSelection;
use congruence_solver::core::convert_case::Case;
use congruence_solver::core::options::CongruencePruning;
use congruence_solver::core::options::ModuloOptions;
use congruence_solver::core::results::EnumerationResult;
use congruence_solver::core::statistics::configure_statistic_logging;
use congruence_solver::core::statistics::StatisticOptions;
use congruence_solver::core::termination::Combinator;
use congruence_solver::core::termination::NodeBudget;
use congruence_solver::core::termination::TimeBudget;
use congruence_solver::core::ConstraintOperationError;
use congruence_solver::instance::parse_instances;
use congruence_solver::instance::InstanceConfiguration;
use congruence_solver::instance::PropagationMode;
use congruence_solver::Solver;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::CongruenceSolverError;
use result::CongruenceSolverResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The file with the instances to solve. Every line is a row of integers:
    ///  - 'lo hi' sets the domain bounds of the variables of the following instances,
    ///  - 'n' groups the following equations into instances of n equations,
    ///  - 'c a_0 a_1 ...' is the equation a_0 * x_0 + a_1 * x_1 + ... = c.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// Which propagators enforce the equations.
    #[arg(long, value_enum, default_value_t)]
    propagation: PropagationMode,

    /// The number of solutions to report per instance; 0 reports all solutions.
    ///
    /// Possible values: u64
    #[arg(long, default_value_t = 1)]
    solutions: u64,

    /// The time budget per instance in milliseconds.
    ///
    /// Possible values: u64
    #[arg(long = "time-limit")]
    time_limit: Option<u64>,

    /// The maximum number of search nodes per instance.
    ///
    /// Possible values: u64
    #[arg(long = "node-limit")]
    node_limit: Option<u64>,

    /// Which unfixed variable the search branches on.
    #[arg(long, value_enum, default_value_t)]
    variable_selection: VariableSelection,

    /// How the search splits the domain of the selected variable.
    #[arg(long, value_enum, default_value_t)]
    value_selection: ValueSelection,

    /// Which values a derived congruence removes from a domain. Only used with modulo
    /// propagation.
    #[arg(long, value_enum, default_value_t)]
    pruning: CongruencePruning,

    /// Replace the remembered congruence of a variable by every newly derived one, instead of
    /// combining the two.
    #[arg(long = "no-merge", default_value_t = false)]
    no_merge: bool,

    /// Bound every variable by `c / a_i` when an equation has no negative terms. Only used with
    /// modulo propagation.
    #[arg(long = "limit-domains", default_value_t = false)]
    limit_domains: bool,

    /// Log the statistics of every search.
    #[arg(short = 's', long = "log-statistics", default_value_t = false)]
    log_statistics: bool,

    /// Enables log message output from the solver.
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        let _ = configure_statistic_logging(
            StatisticOptions::new("%%%mzn-stat:")
                .with_block_end("%%%mzn-stat-end")
                .with_casing(Case::Camel),
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> CongruenceSolverResult<()> {
    let args = Args::parse();
    configure_logging(args.verbose, args.log_statistics);

    let instances = parse_instances(File::open(&args.instance_path)?).map_err(|error| {
        CongruenceSolverError::invalid_instance(args.instance_path.display(), error)
    })?;
    info!(
        "read {} instances from {}",
        instances.len(),
        args.instance_path.display()
    );

    let modulo_options = ModuloOptions {
        merge_congruences: !args.no_merge,
        pruning: args.pruning,
        limit_domains: args.limit_domains,
    };
    let os_signal = OsSignal::install();

    for instance in &instances {
        if os_signal.is_triggered() {
            warn!("interrupted, skipping the remaining instances");
            break;
        }

        solve_instance(&args, instance, modulo_options, os_signal.clone())?;
    }

    Ok(())
}

fn solve_instance(
    args: &Args,
    instance: &InstanceConfiguration,
    modulo_options: ModuloOptions,
    os_signal: OsSignal,
) -> CongruenceSolverResult<()> {
    println!("% instance {}", instance.instance_id);

    let mut solver = Solver::default();
    let variables = match instance.build(&mut solver, args.propagation, modulo_options) {
        Ok(variables) => variables,
        Err(
            ConstraintOperationError::InfeasibleState
            | ConstraintOperationError::InfeasiblePropagator,
        ) => {
            println!("{}", UNSATISFIABLE);
            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    let mut brancher = create_brancher(&variables, args.variable_selection, args.value_selection);
    let mut termination = Combinator::new(
        os_signal,
        Combinator::new(
            args.time_limit
                .map(|time_limit| TimeBudget::starting_now(Duration::from_millis(time_limit))),
            args.node_limit.map(NodeBudget::new),
        ),
    );
    let solution_limit = (args.solutions > 0).then_some(args.solutions);

    let result = solver.enumerate_solutions(
        &mut brancher,
        &mut termination,
        solution_limit,
        |solution| println!("x[] = {}", solution),
    );

    match result {
        EnumerationResult::Complete { num_solutions: 0 } => println!("{}", UNSATISFIABLE),
        EnumerationResult::Interrupted { num_solutions: 0 } => println!("{}", UNKNOWN),
        EnumerationResult::Complete { .. }
        | EnumerationResult::SolutionLimitReached { .. }
        | EnumerationResult::Interrupted { .. } => {}
    }

    if args.log_statistics {
        solver.log_statistics();
    }

    Ok(())
}

const UNSATISFIABLE: &str = "=====UNSATISFIABLE=====";
const UNKNOWN: &str = "=====UNKNOWN=====";
