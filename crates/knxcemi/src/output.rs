use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use knxcemi_frame::{frame_size, LData, Message, MessageCode};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct MessageOutput {
    pub code: u8,
    pub code_name: String,
    pub supported: bool,
    pub frame_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    pub payload: String,
}

impl MessageOutput {
    pub fn from_message(message: &Message) -> Self {
        let (info, payload) = match message {
            Message::LBusmonInd(inner) => (None, hex::encode(inner.as_bytes())),
            Message::LDataReq(inner) => data_fields(inner),
            Message::LDataCon(inner) => data_fields(inner),
            Message::LDataInd(inner) => data_fields(inner),
            Message::LRawReq(inner) => (None, hex::encode(inner.as_bytes())),
            Message::LRawCon(inner) => (None, hex::encode(inner.as_bytes())),
            Message::LRawInd(inner) => (None, hex::encode(inner.as_bytes())),
            Message::Unsupported(inner) => (None, hex::encode(inner.data())),
        };

        Self {
            code: message.code().0,
            code_name: message.code().to_string(),
            supported: !message.is_unsupported(),
            frame_size: frame_size(message),
            info,
            payload,
        }
    }
}

fn data_fields(data: &LData) -> (Option<String>, String) {
    (
        Some(hex::encode(data.info.as_bytes())),
        hex::encode(&data.body),
    )
}

pub fn print_message(message: &Message, format: OutputFormat) {
    let out = MessageOutput::from_message(message);
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CODE", "NAME", "SIZE", "INFO", "PAYLOAD"])
                .add_row(vec![
                    format!("{:#04x}", out.code),
                    out.code_name.clone(),
                    out.frame_size.to_string(),
                    out.info.clone().unwrap_or_else(|| "-".to_string()),
                    out.payload.clone(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let info = out
                .info
                .as_deref()
                .map(|info| format!(" info={info}"))
                .unwrap_or_default();
            println!(
                "code={:#04x} ({}) size={}{} payload={}",
                out.code, out.code_name, out.frame_size, info, out.payload
            );
        }
        OutputFormat::Raw => {
            print_raw(message.to_frame_bytes().as_ref());
        }
    }
}

#[derive(Serialize)]
struct EncodedOutput<'a> {
    code: u8,
    code_name: String,
    frame_size: usize,
    frame: &'a str,
}

pub fn print_encoded(message: &Message, format: OutputFormat) {
    let wire = message.to_frame_bytes();
    let frame_hex = hex::encode(&wire);
    match format {
        OutputFormat::Json => {
            let out = EncodedOutput {
                code: message.code().0,
                code_name: message.code().to_string(),
                frame_size: wire.len(),
                frame: &frame_hex,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["NAME", "SIZE", "FRAME"])
                .add_row(vec![
                    message.code().to_string(),
                    wire.len().to_string(),
                    frame_hex,
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("{frame_hex}"),
        OutputFormat::Raw => print_raw(wire.as_ref()),
    }
}

#[derive(Serialize)]
struct CodeOutput {
    code: u8,
    name: &'static str,
}

pub fn print_codes(format: OutputFormat) {
    let codes: Vec<CodeOutput> = MessageCode::REGISTERED
        .into_iter()
        .filter_map(|code| code.name().map(|name| CodeOutput { code: code.0, name }))
        .collect();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&codes).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CODE", "NAME"]);
            for code in &codes {
                table.add_row(vec![format!("{:#04x}", code.code), code.name.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for code in &codes {
                println!("{:#04x} {}", code.code, code.name);
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}
