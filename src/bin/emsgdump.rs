use anyhow::Context;
use clap::{ArgAction, Parser};
use emsgbox::{EmsgDecoder, EventMessage, util::hex_dump};
use serde::Serialize;
use std::fs;

#[derive(Parser, Debug)]
#[command(version, about = "Decode a DASH Event Message (emsg) box body")]
struct Args {
    /// File holding the emsg body (starting at scheme_id_uri)
    #[arg(required_unless_present = "hex", conflicts_with = "hex")]
    path: Option<String>,

    /// Take the emsg body from a hex string instead of a file
    #[arg(long)]
    hex: Option<String>,

    /// Leading bytes to drop before decoding (e.g. 4 for version+flags)
    #[arg(long, default_value_t = 0)]
    skip: usize,

    /// Emit JSON instead of human-readable text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Hex-dump message_data in text output
    #[arg(long, action = ArgAction::SetTrue)]
    dump_data: bool,
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    #[serde(flatten)]
    event: &'a EventMessage,
    wrapped: Option<emsgbox::WrappedMetadata>,
}

/// Raw input bytes from `--hex` (whitespace ignored) or from a file.
fn load_input(hex_arg: Option<&str>, path: Option<&str>) -> anyhow::Result<Vec<u8>> {
    match (hex_arg, path) {
        (Some(h), _) => {
            let cleaned: String = h.chars().filter(|c| !c.is_whitespace()).collect();
            hex::decode(cleaned).context("parsing --hex input")
        }
        (None, Some(p)) => fs::read(p).with_context(|| format!("reading {}", p)),
        (None, None) => anyhow::bail!("either a path or --hex is required"),
    }
}

fn skip_prefix(raw: &[u8], skip: usize) -> anyhow::Result<&[u8]> {
    if skip > raw.len() {
        anyhow::bail!("--skip {} exceeds input length {}", skip, raw.len());
    }
    Ok(&raw[skip..])
}

/// Offset of `message_data` within the original input.
fn message_data_offset(skip: usize, body_len: usize, data_len: usize) -> u64 {
    (skip + body_len - data_len) as u64
}

fn to_json(event: &EventMessage) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonEvent {
        event,
        wrapped: event.wrapped_metadata_kind(),
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();

    let raw = load_input(args.hex.as_deref(), args.path.as_deref())?;
    let body = skip_prefix(&raw, args.skip)?;

    let event = EmsgDecoder::new()
        .decode(body)
        .context("decoding emsg body")?;

    if args.json {
        println!("{}", to_json(&event)?);
        return Ok(());
    }

    println!("scheme_id_uri: {}", event.scheme_id_uri);
    println!("value:         {}", event.value);
    println!("duration_ms:   {}", event.duration_ms);
    println!("id:            {}", event.id);
    if let Some(kind) = event.wrapped_metadata_kind() {
        println!("wraps:         {:?}", kind);
    }
    println!("message_data:  {} bytes", event.message_data.len());
    if args.dump_data && !event.message_data.is_empty() {
        let offset = message_data_offset(args.skip, body.len(), event.message_data.len());
        print!("{}", hex_dump(&event.message_data, offset));
    }

    Ok(())
}
