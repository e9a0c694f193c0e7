use clap::{Args, Subcommand};
use std::path::PathBuf;

use knxcemi_frame::DEFAULT_MAX_FRAME_SIZE;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod codes;
pub mod decode;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode hex-encoded cEMI frames.
    Decode(DecodeArgs),
    /// Encode a cEMI frame and print it as hex.
    Encode(EncodeArgs),
    /// List the message codes with a dedicated payload type.
    Codes(CodesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Codes(args) => codes::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Frames as hex (e.g. 2b010203). Reads stdin when no frames or --file are given.
    #[arg(conflicts_with = "file")]
    pub frames: Vec<String>,
    /// Read frames from a file, one hex frame per line.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Reject frames larger than this many bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_FRAME_SIZE)]
    pub max_frame_size: usize,
    /// Report malformed frames and continue instead of stopping at the first one.
    #[arg(long)]
    pub keep_going: bool,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Message code: a name (LDataReq), hex (0x11) or decimal (17).
    #[arg(long, short = 'c')]
    pub code: String,
    /// Additional info as hex (L_Data codes only).
    #[arg(long)]
    pub info: Option<String>,
    /// Payload as hex. For L_Data codes this is the service body after the info.
    #[arg(long, short = 'd', default_value = "")]
    pub data: String,
}

#[derive(Args, Debug, Default)]
pub struct CodesArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
