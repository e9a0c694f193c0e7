use knxcemi_frame::{
    Info, LBusmonInd, LDataCon, LDataInd, LDataReq, LRawCon, LRawInd, LRawReq, Message,
    MessageCode, UnsupportedMessage,
};

use crate::cmd::EncodeArgs;
use crate::exit::{CliError, CliResult, INTERNAL, SUCCESS, USAGE};
use crate::hexarg::{parse_code, parse_hex};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let message = build_message(&args)?;
    print_encoded(&message, format);
    Ok(SUCCESS)
}

fn build_message(args: &EncodeArgs) -> CliResult<Message> {
    let code = parse_code(&args.code)?;
    let data = parse_hex(&args.data)?;

    let info = match &args.info {
        Some(_) if !code.is_data() => {
            return Err(CliError::new(
                USAGE,
                format!("--info is only valid for L_Data codes, not {code}"),
            ));
        }
        Some(text) => Info::new(parse_hex(text)?),
        None => Info::empty(),
    };

    if info.is_oversized() {
        return Err(CliError::new(
            USAGE,
            format!("--info is {} bytes (max {})", info.len(), Info::MAX_LEN),
        ));
    }

    let message: Message = match code {
        MessageCode::L_BUSMON_IND => LBusmonInd::new(data).into(),
        MessageCode::L_DATA_REQ => LDataReq::new(info, data).into(),
        MessageCode::L_DATA_CON => LDataCon::new(info, data).into(),
        MessageCode::L_DATA_IND => LDataInd::new(info, data).into(),
        MessageCode::L_RAW_REQ => LRawReq::new(data).into(),
        MessageCode::L_RAW_CON => LRawCon::new(data).into(),
        MessageCode::L_RAW_IND => LRawInd::new(data).into(),
        other => {
            tracing::info!(code = %other, "encoding frame with unregistered message code");
            let Some(unsupported) = UnsupportedMessage::new(other, data) else {
                return Err(CliError::new(INTERNAL, format!("no encoder for {other}")));
            };
            unsupported.into()
        }
    };
    Ok(message)
}
