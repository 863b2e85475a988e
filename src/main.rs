use clap::{Parser, Subcommand};
use ndarray::Array2;
use notecodec::{converter_from_spec, config, ConverterSpec, NoteSequence, SequenceConverter};
use std::path::PathBuf;

/// Note-Sequence Tensor Codec
#[derive(Parser)]
#[command(name = "notecodec")]
#[command(about = "Encode quantized note sequences to model tensors and back")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a note-sequence JSON file into a tensor JSON file
    Encode {
        /// Input note-sequence file (JSON)
        input: PathBuf,

        /// Output tensor file
        #[arg(short, long, default_value = "./tensor.json")]
        output: PathBuf,

        /// Converter descriptor file
        #[arg(short, long)]
        spec: Option<PathBuf>,

        /// Quiet output
        #[arg(short, long)]
        quiet: bool,
    },
    /// Decode a tensor JSON file back into a note sequence
    Decode {
        /// Input tensor file (JSON)
        input: PathBuf,

        /// Output note-sequence file
        #[arg(short, long, default_value = "./sequence.json")]
        output: PathBuf,

        /// Converter descriptor file
        #[arg(short, long)]
        spec: Option<PathBuf>,

        /// Quiet output
        #[arg(short, long)]
        quiet: bool,
    },
    /// Validate a converter descriptor file
    ValidateSpec {
        /// Descriptor file to validate
        spec: PathBuf,
    },
    /// Show the default converter descriptor
    ShowSpec,
}

/// Load the descriptor file, or fall back to the default drums descriptor
fn load_spec_or_default(path: Option<PathBuf>) -> anyhow::Result<ConverterSpec> {
    match path {
        Some(path) => config::load_spec(path),
        None => Ok(ConverterSpec::Drums(Default::default())),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            spec,
            quiet,
        } => {
            let spec = load_spec_or_default(spec)?;
            let converter = converter_from_spec(&spec)?;

            let content = std::fs::read_to_string(&input)?;
            let sequence: NoteSequence = serde_json::from_str(&content)?;

            if !quiet {
                println!("Encoding {}...", input.display());
            }

            let tensor = converter.encode(&sequence)?;
            std::fs::write(&output, serde_json::to_string(&tensor)?)?;

            if !quiet {
                println!(
                    "Wrote {}x{} tensor to {}",
                    tensor.nrows(),
                    tensor.ncols(),
                    output.display()
                );
            }
        }
        Commands::Decode {
            input,
            output,
            spec,
            quiet,
        } => {
            let spec = load_spec_or_default(spec)?;
            let converter = converter_from_spec(&spec)?;

            let content = std::fs::read_to_string(&input)?;
            let tensor: Array2<f32> = serde_json::from_str(&content)?;

            if !quiet {
                println!("Decoding {}...", input.display());
            }

            let sequence = converter.decode(&tensor)?;
            std::fs::write(&output, serde_json::to_string_pretty(&sequence)?)?;

            if !quiet {
                println!(
                    "Wrote {} notes over {} steps to {}",
                    sequence.notes.len(),
                    sequence.total_steps,
                    output.display()
                );
            }
        }
        Commands::ValidateSpec { spec } => {
            let spec = config::load_spec(spec)?;
            println!("Converter spec is valid");
            if let Ok(json) = serde_json::to_string_pretty(&spec) {
                println!("{}", json);
            }
        }
        Commands::ShowSpec => {
            let spec = ConverterSpec::Drums(Default::default());
            let json = serde_json::to_string_pretty(&spec)?;
            println!("{}", json);
        }
    }

    Ok(())
}
