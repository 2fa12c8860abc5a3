use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use fxlzf::{compress_with_stats, decompress};

#[derive(Parser, Debug)]
#[command(name = "fxlzf")]
#[command(about = "Compress or decompress a file with the LZF-style plane codec")]
#[command(version)]
struct Args {
    /// Input file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long)]
    output: PathBuf,

    /// Decompress instead of compress
    #[arg(short, long)]
    decompress: bool,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_OK: u8 = 0;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<u8, Box<dyn std::error::Error>> {
    let args = Args::parse();

    // The format carries no length metadata, so a whole file is one stream
    let input = read_input(&args.input)?;

    let start = std::time::Instant::now();

    let output = if args.decompress {
        let output = decompress(&input)?;
        if args.verbose {
            eprintln!("Decompression complete:");
            eprintln!("  Input bytes:      {}", input.len());
            eprintln!("  Output bytes:     {}", output.len());
        }
        output
    } else {
        let (output, stats) = compress_with_stats(&input);
        if args.verbose {
            eprintln!("Compression complete:");
            eprintln!("  Input bytes:      {}", stats.input_bytes);
            eprintln!("  Output bytes:     {}", stats.output_bytes);
            eprintln!("  Literals:         {}", stats.literals);
            eprintln!("  Back-references:  {}", stats.backrefs);
            eprintln!("  Ratio:            {:.3}", stats.ratio());
        }
        output
    };

    let elapsed = start.elapsed();

    if args.verbose {
        eprintln!("  Time:             {:.2?}", elapsed);
        eprintln!(
            "  Throughput:       {:.1} MB/s",
            input.len() as f64 / elapsed.as_secs_f64() / 1_000_000.0
        );
    }

    write_output(&args.output, &output)?;

    Ok(EXIT_OK)
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    if path.to_str() == Some("-") {
        io::stdin().lock().read_to_end(&mut data)?;
    } else {
        File::open(path)?.read_to_end(&mut data)?;
    }
    Ok(data)
}

fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    if path.to_str() == Some("-") {
        io::stdout().lock().write_all(data)
    } else {
        let mut file = File::create(path)?;
        file.write_all(data)
    }
}
