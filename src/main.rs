use clap::{Parser, Subcommand, ValueEnum};

use find_roots::Result;
use find_roots::graph::{self, NodeId};
use find_roots::log;
use find_roots::merge::{PathGraph, merge_descriptor_chains};
use find_roots::render::{self, SimplePathRenderer, TargetReport};
use find_roots::roots::{RootFinder, SearchOptions, SearchOutcome, TargetSpec, select_targets};

#[derive(Parser)]
#[command(name = "find-roots")]
#[command(about = "Find the roots keeping an object alive in a cycle collector graph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print paths from roots to a target object (or every object of a class).
    Find {
        /// Cycle collector graph file name.
        file: String,

        /// Address of the target object, or prefix of the class name of targets.
        target: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,

        /// Output file for dot or json output. Dot defaults to graph.dot.
        #[arg(short = 'o', long)]
        out: Option<String>,

        /// Only trace from black roots.
        #[arg(long)]
        black_roots_only: bool,

        /// Treat the target as the exact contents of string objects.
        #[arg(long)]
        string_target: bool,
    },

    /// Print the parsed graph and root list.
    Dump {
        file: String,

        /// Dump the reversed graph instead.
        #[arg(long)]
        reverse: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Multi-line paths with addresses.
    Plain,
    /// One line per path, addresses removed.
    Simple,
    /// Graphviz file of all paths, shape chains merged.
    Dot,
    /// JSON report per target.
    Json,
}

fn main() -> Result<()> {
    find_roots::diagnostics::init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Find {
            file,
            target,
            format,
            out,
            black_roots_only,
            string_target,
        } => {
            // 1) Parse log and build the search graphs.
            let parsed = log::parse_log_file(&file)?;
            let simple = graph::collapse(&parsed.graph);
            tracing::info!("reversing graph");
            let reverse = graph::reverse(&simple);

            // 2) Resolve targets.
            let spec = TargetSpec::parse(&target, string_target)?;
            let targets = select_targets(&simple, &parsed.attribs, &spec);
            if targets.is_empty() && matches!(spec, TargetSpec::LabelPrefix(_)) {
                println!("No matching class names found.");
            }

            // 3) Search each target independently.
            let options = SearchOptions { black_roots_only };
            let finder = RootFinder::new(&simple, &reverse, &parsed.attribs, options);
            let results: Vec<(NodeId, SearchOutcome)> = targets
                .into_iter()
                .map(|t| {
                    let outcome = finder.search(&t);
                    (t, outcome)
                })
                .collect();

            // 4) Render.
            match format {
                OutputFormat::Plain | OutputFormat::Simple => {
                    let simple_renderer = SimplePathRenderer::new()?;
                    for (t, outcome) in &results {
                        match outcome {
                            SearchOutcome::Found(paths) => {
                                for p in paths {
                                    if format == OutputFormat::Simple {
                                        print!("{}", simple_renderer.render(&parsed.attribs, p));
                                    } else {
                                        print!("{}", render::render_path(&parsed.attribs, p));
                                    }
                                }
                            }
                            other => print_notice(t, other),
                        }
                    }
                }
                OutputFormat::Dot => {
                    for (t, outcome) in &results {
                        print_notice(t, outcome);
                    }
                    let paths = results.iter().flat_map(|(_, outcome)| match outcome {
                        SearchOutcome::Found(paths) => paths.as_slice(),
                        _ => &[][..],
                    });
                    let merged =
                        merge_descriptor_chains(&PathGraph::from_paths(paths), &parsed.attribs);
                    let out = out.unwrap_or_else(|| "graph.dot".to_string());
                    std::fs::write(&out, render::render_dot(&merged, &parsed.attribs))?;
                    println!("Wrote {}", out);
                }
                OutputFormat::Json => {
                    let reports: Vec<TargetReport> = results
                        .into_iter()
                        .map(|(t, outcome)| TargetReport::new(t, outcome))
                        .collect();
                    let json = render::render_json(&reports)?;
                    match out {
                        Some(out) => {
                            std::fs::write(&out, json)?;
                            println!("Wrote {}", out);
                        }
                        None => println!("{}", json),
                    }
                }
            }
        }
        Commands::Dump { file, reverse } => {
            let parsed = log::parse_log_file(&file)?;
            let g = if reverse {
                graph::reverse_multigraph(&parsed.graph)
            } else {
                parsed.graph
            };
            print!("{}", render::render_dump(&g, &parsed.attribs));
        }
    }

    Ok(())
}

/// Per-target notices for targets without paths. Never fatal.
fn print_notice(target: &NodeId, outcome: &SearchOutcome) {
    if let Some(notice) = render::render_notice(target, outcome) {
        print!("{}", notice);
    }
}
