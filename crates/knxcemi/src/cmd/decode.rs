use std::io::Read;

use knxcemi_frame::{decode_frame_with_config, FrameConfig, Message};

use crate::cmd::DecodeArgs;
use crate::exit::{frame_error, io_error, CliResult, DATA_INVALID, SUCCESS};
use crate::hexarg::parse_hex;
use crate::output::{print_message, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let config = FrameConfig {
        max_frame_size: args.max_frame_size,
    };
    let inputs = collect_inputs(&args)?;

    let mut failed = 0usize;
    for (index, line) in inputs.iter().enumerate() {
        match decode_line(line, &config) {
            Ok(message) => print_message(&message, format),
            Err(err) if args.keep_going => {
                tracing::error!(frame = index, "{err}");
                failed += 1;
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(frames = inputs.len(), failed, "decode finished");
    if failed > 0 {
        Ok(DATA_INVALID)
    } else {
        Ok(SUCCESS)
    }
}

fn decode_line(line: &str, config: &FrameConfig) -> CliResult<Message> {
    let bytes = parse_hex(line)?;
    // Every payload takes the rest of the line, so nothing is left over.
    decode_frame_with_config(&bytes, config)
        .map(|(message, _)| message)
        .map_err(|err| frame_error("decode failed", err))
}

fn collect_inputs(args: &DecodeArgs) -> CliResult<Vec<String>> {
    if !args.frames.is_empty() {
        return Ok(args.frames.clone());
    }

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| io_error("failed reading stdin", err))?;
            text
        }
    };

    Ok(frame_lines(&text))
}

/// Non-empty lines, with `#` comments dropped.
fn frame_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
