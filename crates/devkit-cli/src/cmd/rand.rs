use crate::output::{print_error, print_json};
use anyhow::Context;
use clap::Subcommand;
use devkit_core::random::{self, DEFAULT_BYTE_SIZE};
use serde::Serialize;

#[derive(Subcommand)]
pub enum RandSubcommand {
    /// Generates a time-based UUID
    #[command(name = "uuid4")]
    Uuid4,

    /// Generates bytes encoded with base64
    Bytes {
        /// Number of random bytes to generate
        #[arg(long, default_value_t = DEFAULT_BYTE_SIZE)]
        size: u32,
    },
}

#[derive(Serialize)]
struct BytesOutput {
    size: u32,
    base64: String,
}

pub fn run(subcommand: RandSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        RandSubcommand::Uuid4 => {
            let id = random::uuid1().context("failed to generate UUID")?;
            if json {
                print_json(&serde_json::json!({ "uuid": id.to_string() }))?;
            } else {
                println!("{id}");
            }
            Ok(())
        }

        RandSubcommand::Bytes { size } => {
            let mut buf = vec![0u8; size as usize];
            // Best effort: a failed fill is reported but the buffer is still encoded.
            if let Err(e) = random::fill_random(&mut buf) {
                tracing::debug!(size, error = %e, "random fill failed");
                print_error(&e.to_string());
            }
            let encoded = random::encode_base64(&buf);
            if json {
                print_json(&BytesOutput {
                    size,
                    base64: encoded,
                })?;
            } else {
                println!("{encoded}");
            }
            Ok(())
        }
    }
}
