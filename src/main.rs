use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use ais_rs::{init_logger, log_info, AisDecoder, ChecksumMode, DecoderConfig};

#[derive(Parser)]
#[command(name = "ais-cli")]
#[command(about = "CLI tool for decoding AIS sentences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode NMEA lines from a file (or stdin with "-") and print records.
    Decode {
        path: String,
        /// Tolerate checksum mismatches instead of rejecting the sentence.
        #[arg(short, long)]
        lenient: bool,
        /// Print records as JSON instead of the summary line.
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    match cli.command {
        Commands::Decode {
            path,
            lenient,
            json,
        } => {
            let reader: Box<dyn BufRead> = if path == "-" {
                Box::new(BufReader::new(io::stdin()))
            } else {
                Box::new(BufReader::new(
                    File::open(&path).with_context(|| format!("cannot open {path}"))?,
                ))
            };

            let config = DecoderConfig {
                checksum_mode: if lenient {
                    ChecksumMode::Lenient
                } else {
                    ChecksumMode::Strict
                },
                ..DecoderConfig::default()
            };
            let mut decoder = AisDecoder::with_config(config);

            for line in reader.lines() {
                let line = line.context("read error")?;
                if line.trim().is_empty() {
                    continue;
                }
                match decoder.decode_line(&line) {
                    Ok(Some(message)) => {
                        if json {
                            println!("{}", serde_json::to_string(&message)?);
                        } else {
                            println!(
                                "type {:2} mmsi {:9} {:?}",
                                message.message_type(),
                                message.mmsi(),
                                message
                            );
                        }
                    }
                    Ok(None) => {}
                    Err(err) => log::warn!("skipping line: {err}"),
                }
            }

            let stats = decoder.stats();
            log_info(&format!(
                "processed {} lines, decoded {} messages, {} errors",
                stats.lines_processed, stats.messages_decoded, stats.decode_errors
            ));
        }
    }

    Ok(())
}
