use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use vacation_graph::{
    logger, read_edges, Config, Graph, OutputFormat, Report, VertexId,
};

/// Reads a list of couples (edges), checks that they form a bipartite graph
/// from the origin vertex, and then lists the vacation candidates: for each
/// person, the partner with the most partners of their own.
///
/// Example, for an undirected graph, starting the check from person 1:
///  ./vacation-graph --input=couples.csv --undirected --origin=1
///
/// Note: settings may also be given in a YAML file ('--config'), and any
///   flags given on the command line override the values from that file.
///
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Edge-list file, with 'from,to[,weight]' records
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Build a directed graph (the default)
    #[arg(short, long, conflicts_with = "undirected")]
    directed: bool,

    /// Add each edge both ways, rather than building a directed graph
    #[arg(short, long)]
    undirected: bool,

    /// Start vertex for the bipartite check
    #[arg(short, long, value_name = "ID")]
    origin: Option<VertexId>,

    /// Verbosity
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Output format for the report
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also echo all log records to stdout
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_config(self) -> vacation_graph::Result<Config> {
        let mut config = match self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if self.directed {
            config.directed = true;
        } else if self.undirected {
            config.directed = false;
        }
        if let Some(origin) = self.origin {
            config.origin = origin;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();
    let verbose = args.verbose > 0;
    let config = args.into_config()?;
    let _logger = logger::configure(config.log_level.as_str(), verbose)?;

    let edges = read_edges(&config.input).map_err(|e| {
        error!("Cannot read '{}': {}", config.input.display(), e);
        e
    })?;
    info!("Read {} edges from '{}'", edges.len(), config.input.display());

    let graph = Graph::build(&edges, config.directed);
    if verbose {
        println!("{}", graph);
    }

    let report = Report::analyse(&graph, config.origin);
    match config.format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Yaml => print!("{}", report.to_yaml()?),
    }

    info!("Execution done");
    Ok(())
}
