//! `prisl` — program slicer for PRISM-like probabilistic models.

mod config;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "prisl", version, about = "Program slicer for PRISM-like probabilistic models")]
struct Args {
    /// Path to the input `.prism` model file.
    file: PathBuf,

    #[command(subcommand)]
    mode: Mode,

    /// Overrides the configured/default output path (ignored in `b` mode).
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Points at a `prisl.toml` (default discovery looks next to `file`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raises the tracing log level; repeatable (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Build both MDG and CDG, run the benchmarker on each.
    #[command(name = "b")]
    Benchmark,
    /// Round-trip: parse, rebuild vertices, emit the whole program.
    Parse,
    /// Slice on variables.
    #[command(name = "v", alias = "variable", alias = "var")]
    Variable { names: Vec<String> },
    /// Slice on component text(s).
    #[command(name = "c", alias = "component")]
    Component { texts: Vec<String> },
    /// Slice on modules (MDG), lift to CDG.
    #[command(name = "m", alias = "module")]
    Module { modules: Vec<String> },
}

fn init_logging(verbose: u8, log: &config::LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => log.level.clone().unwrap_or_else(|| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    if let Some(path) = &log.file {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let file_name = path.file_name().unwrap_or_else(|| std::ffi::OsStr::new("prisl.log"));
        let file_appender = tracing_appender::rolling::never(dir, file_name);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(nb_writer)
            .try_init()
            .ok();
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();
        Ok(None)
    }
}

fn read_model(path: &std::path::Path) -> anyhow::Result<prism_ast::Program> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model file {}", path.display()))?;
    prism_syntax::parse(&source)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn write_slice(
    vertices: &[slice_graph::ComponentVertex],
    program: &prism_ast::Program,
    output_path: &std::path::Path,
) -> anyhow::Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("failed to create output file {}", output_path.display()))?;
    slice_emit::write_to(vertices, program, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!(path = %output_path.display(), "slice written");
    Ok(())
}

fn run_benchmark(program: &prism_ast::Program) {
    let cdg_start = std::time::Instant::now();
    let cdg_vertices = slice_graph::build_component_vertices(program);
    let cdg_adj = slice_graph::build_component_edges(&cdg_vertices, program);
    let cdg_report = slice_bench::benchmark(&cdg_adj);
    let cdg_elapsed = cdg_start.elapsed();
    println!("CDG: nodes={} edges={}", cdg_report.nodes, cdg_report.edges);
    println!(
        "CDG: unique_slices={} avg_size_uw={:.6} avg_size_w={:.6}",
        cdg_report.unique_slices, cdg_report.avg_size_uw, cdg_report.avg_size_w
    );
    println!("CDG: took {:.6} seconds", cdg_elapsed.as_secs_f64());

    let mdg_start = std::time::Instant::now();
    let mdg_vertices = slice_graph::build_module_vertices(program);
    let mdg_adj = slice_graph::build_module_edges(&mdg_vertices);
    let mdg_report = slice_bench::benchmark(&mdg_adj);
    let mdg_elapsed = mdg_start.elapsed();
    println!("MDG: nodes={} edges={}", mdg_report.nodes, mdg_report.edges);
    println!(
        "MDG: unique_slices={} avg_size_uw={:.6} avg_size_w={:.6}",
        mdg_report.unique_slices, mdg_report.avg_size_uw, mdg_report.avg_size_w
    );
    println!("MDG: took {:.6} seconds", mdg_elapsed.as_secs_f64());
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = config::load(args.config.as_deref(), &args.file)?;
    let _log_guard = init_logging(args.verbose, &config.log)?;
    let output_path = args.output.clone().unwrap_or_else(|| config.output.path.clone());

    let program = read_model(&args.file)?;

    match &args.mode {
        Mode::Benchmark => {
            run_benchmark(&program);
        }
        Mode::Parse => {
            let vertices = slice_graph::build_component_vertices(&program);
            write_slice(&vertices, &program, &output_path)?;
        }
        Mode::Variable { names } => {
            let vertices = slice_graph::build_component_vertices(&program);
            let adj = slice_graph::build_component_edges(&vertices, &program);
            let starts = slice_engine::resolve_variable_criteria(&vertices, names)?;
            let sliced = slice_engine::slice_components(&vertices, &adj, &starts, &program);
            write_slice(&sliced, &program, &output_path)?;
        }
        Mode::Component { texts } => {
            let vertices = slice_graph::build_component_vertices(&program);
            let adj = slice_graph::build_component_edges(&vertices, &program);
            let starts = slice_engine::resolve_component_criteria(&vertices, texts)?;
            let sliced = slice_engine::slice_components(&vertices, &adj, &starts, &program);
            write_slice(&sliced, &program, &output_path)?;
        }
        Mode::Module { modules } => {
            let module_vertices = slice_graph::build_module_vertices(&program);
            let module_adj = slice_graph::build_module_edges(&module_vertices);
            let starts = slice_engine::resolve_module_criteria(&module_vertices, modules)?;
            let module_slice = slice_engine::slice_modules(&module_vertices, &module_adj, &starts);

            let component_vertices = slice_graph::build_component_vertices(&program);
            let lifted: Vec<_> = component_vertices
                .into_iter()
                .filter(|v| module_slice.iter().any(|m| m.name == v.module_name))
                .collect();
            write_slice(&lifted, &program, &output_path)?;
        }
    }

    Ok(())
}
