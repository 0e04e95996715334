use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgGroup, Parser};
use lzhuff::{
    compress_with_stats, decompress, Lz77Config, DEFAULT_PREVIEW_LENGTH, DEFAULT_WINDOW_LENGTH,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(name = "lzhuff")]
#[command(about = "Compress and decompress files with LZ77 and Huffman coding")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).args(["compress", "decompress"])))]
struct Args {
    /// Compress INPUT into OUTPUT
    #[arg(short = 'c', long)]
    compress: bool,

    /// Decompress INPUT into OUTPUT
    #[arg(short = 'd', long)]
    decompress: bool,

    /// Input file (use - for stdin)
    input: PathBuf,

    /// Output file (use - for stdout)
    output: PathBuf,

    /// Sliding window length for back-references (1-255)
    #[arg(long, default_value_t = DEFAULT_WINDOW_LENGTH)]
    window: usize,

    /// Longest match considered at each step (1-255)
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LENGTH)]
    preview: usize,

    /// Show statistics; repeat for debug (-vv) and trace (-vvv) logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Exit code for I/O and codec failures
const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Ignore the error if a logger is already installed
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Lz77Config::new(args.window, args.preview)?;
    let input = read_input(&args.input)?;

    let start = Instant::now();
    let output = if args.compress {
        let (output, stats) = compress_with_stats(&input, &config)?;
        if args.verbose > 0 {
            eprintln!("Compression complete:");
            eprintln!("  Input bytes:      {}", stats.input_bytes);
            eprintln!("  Output bytes:     {}", stats.output_bytes);
            eprintln!(
                "  Tokens:           {} ({} literal, {} match)",
                stats.tokens, stats.literal_tokens, stats.match_tokens
            );
            eprintln!("  Ratio:            {:.3}", stats.ratio());
            eprintln!("  Space savings:    {:.2}%", stats.space_savings_percent());
        }
        output
    } else {
        let output = decompress(&input)?;
        if args.verbose > 0 {
            eprintln!("Decompression complete:");
            eprintln!("  Input bytes:      {}", input.len());
            eprintln!("  Output bytes:     {}", output.len());
        }
        output
    };
    let elapsed = start.elapsed();

    if args.verbose > 0 {
        eprintln!("  Time:             {:.2?}", elapsed);
        eprintln!(
            "  Throughput:       {:.1} MB/s",
            input.len() as f64 / elapsed.as_secs_f64() / 1_000_000.0
        );
    }

    write_output(&args.output, &output)?;
    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some("-")
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if is_stdio(path) {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read(path)
    }
}

fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()
    } else {
        fs::write(path, data)
    }
}
