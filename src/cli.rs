//! circq command line
//!
//! Drives the queue, the stack and the window scan from the shell.

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::CircqError;
use crate::observability::telemetry::{init_tracing_from_config, init_tracing_verbose};
use crate::ring_buffer::RingBuffer;
use crate::stack::QueueStack;
use crate::window::longest_replaceable_window;

#[derive(Parser)]
#[command(name = "circq")]
#[command(about = "Growable circular queue, queue-built stack and replacement window scan")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Verbose mode (info-level logging on stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    output_format: OutputFormat,
}

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Longest run that becomes uniform with a bounded number of replacements
    #[command(alias = "w")]
    Window {
        /// Symbols to scan, one per character
        input: String,

        /// Replacement budget (defaults to window.replacements from config)
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        replacements: Option<i64>,
    },

    /// Run operations against a circular queue: enq:<v>, deq, head, tail, len
    #[command(alias = "q")]
    Queue {
        #[arg(required = true)]
        ops: Vec<String>,
    },

    /// Run operations against a queue-built stack: push:<v>, pop, top, len
    #[command(alias = "s")]
    Stack {
        #[arg(required = true)]
        ops: Vec<String>,
    },
}

/// A single queue operation parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOp {
    Enqueue(String),
    Dequeue,
    Head,
    Tail,
    Len,
}

impl FromStr for QueueOp {
    type Err = CircqError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "deq" => Ok(Self::Dequeue),
            "head" => Ok(Self::Head),
            "tail" => Ok(Self::Tail),
            "len" => Ok(Self::Len),
            _ => match s.strip_prefix("enq:") {
                Some(value) => Ok(Self::Enqueue(value.to_string())),
                None => Err(CircqError::InvalidArgument(format!(
                    "unknown queue operation '{}'",
                    s
                ))),
            },
        }
    }
}

/// A single stack operation parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOp {
    Push(String),
    Pop,
    Top,
    Len,
}

impl FromStr for StackOp {
    type Err = CircqError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pop" => Ok(Self::Pop),
            "top" => Ok(Self::Top),
            "len" => Ok(Self::Len),
            _ => match s.strip_prefix("push:") {
                Some(value) => Ok(Self::Push(value.to_string())),
                None => Err(CircqError::InvalidArgument(format!(
                    "unknown stack operation '{}'",
                    s
                ))),
            },
        }
    }
}

/// Outcome of running queue operations.
#[derive(Debug, Clone, Serialize)]
pub struct QueueReport {
    /// One entry per value-producing operation; `None` when the queue was empty
    pub results: Vec<Option<String>>,
    #[serde(rename = "final")]
    pub final_state: String,
    pub capacity: usize,
    pub head: usize,
    pub tail: usize,
}

/// Outcome of running stack operations.
#[derive(Debug, Clone, Serialize)]
pub struct StackReport {
    pub results: Vec<Option<String>>,
    #[serde(rename = "final")]
    pub final_state: String,
    pub len: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WindowReport {
    pub input: String,
    pub replacements: usize,
    pub longest: usize,
}

/// Convert a signed budget from user input, rejecting negatives.
pub fn replacement_budget(raw: i64) -> crate::errors::Result<usize> {
    usize::try_from(raw).map_err(|_| {
        CircqError::InvalidArgument(format!(
            "replacements must be non-negative, got {}",
            raw
        ))
    })
}

pub fn run_queue(ops: &[QueueOp], initial_capacity: usize) -> crate::errors::Result<QueueReport> {
    let mut queue = RingBuffer::with_capacity(initial_capacity)?;
    let mut results = Vec::new();

    for op in ops {
        match op {
            QueueOp::Enqueue(value) => queue.enqueue(value.clone()),
            QueueOp::Dequeue => results.push(queue.dequeue()),
            QueueOp::Head => results.push(queue.head_element().cloned()),
            QueueOp::Tail => results.push(queue.tail_element().cloned()),
            QueueOp::Len => results.push(Some(queue.len().to_string())),
        }
        debug!(?op, len = queue.len(), capacity = queue.capacity(), "queue op");
    }

    Ok(QueueReport {
        results,
        final_state: queue.to_string(),
        capacity: queue.capacity(),
        head: queue.head_index(),
        tail: queue.tail_index(),
    })
}

pub fn run_stack(ops: &[StackOp]) -> StackReport {
    let mut stack = QueueStack::new();
    let mut results = Vec::new();

    for op in ops {
        match op {
            StackOp::Push(value) => stack.push(value.clone()),
            StackOp::Pop => results.push(stack.pop()),
            StackOp::Top => results.push(stack.top().cloned()),
            StackOp::Len => results.push(Some(stack.len().to_string())),
        }
        debug!(?op, len = stack.len(), "stack op");
    }

    StackReport {
        results,
        final_state: stack.to_string(),
        len: stack.len(),
    }
}

fn parse_ops<T: FromStr<Err = CircqError>>(raw: &[String]) -> crate::errors::Result<Vec<T>> {
    raw.iter().map(|s| s.parse()).collect()
}

fn print_results(results: &[Option<String>]) {
    for result in results {
        match result {
            Some(value) => println!("{}", value),
            None => println!("(none)"),
        }
    }
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    if cli.verbose {
        init_tracing_verbose();
    } else {
        init_tracing_from_config(&config.logging);
    }
    info!(?config, "configuration loaded");

    match cli.command {
        Commands::Window {
            input,
            replacements,
        } => {
            let replacements = match replacements {
                Some(raw) => replacement_budget(raw)?,
                None => config.window.replacements,
            };
            let longest = longest_replaceable_window(input.chars(), replacements);
            info!(longest, replacements, "window scan complete");

            match cli.output_format {
                OutputFormat::Text => println!("{}", longest),
                OutputFormat::Json => print_json(&WindowReport {
                    input,
                    replacements,
                    longest,
                })?,
            }
        }
        Commands::Queue { ops } => {
            let ops: Vec<QueueOp> = parse_ops(&ops)?;
            let report = run_queue(&ops, config.buffer.initial_capacity)?;

            match cli.output_format {
                OutputFormat::Text => {
                    print_results(&report.results);
                    println!("{}", report.final_state);
                }
                OutputFormat::Json => print_json(&report)?,
            }
        }
        Commands::Stack { ops } => {
            let ops: Vec<StackOp> = parse_ops(&ops)?;
            let report = run_stack(&ops);

            match cli.output_format {
                OutputFormat::Text => {
                    print_results(&report.results);
                    println!("{}", report.final_state);
                }
                OutputFormat::Json => print_json(&report)?,
            }
        }
    }

    Ok(())
}
