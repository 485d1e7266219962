use crate::osc::error::OscError;
use crate::osc::types::{OscArg, OscMessage};
use std::result::Result as StdResult;

/// Append an OSC-string: UTF-8 bytes, a NUL terminator, then zero padding to a 4-byte boundary
fn write_osc_string(buf: &mut Vec<u8>, s: &str) -> StdResult<(), OscError> {
    if s.as_bytes().contains(&0) {
        return Err(OscError::EncodeError(
            "OSC strings cannot contain NUL".to_string(),
        ));
    }

    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
    while buf.len() % 4 != 0 {
        buf.push(0);
    }

    Ok(())
}

/// Encode a message as an OSC 1.0 packet
pub fn encode_message(msg: &OscMessage) -> StdResult<Vec<u8>, OscError> {
    if !msg.addr.starts_with('/') {
        return Err(OscError::EncodeError(format!(
            "Address must start with '/': {}",
            msg.addr
        )));
    }

    let mut buf = Vec::new();
    write_osc_string(&mut buf, &msg.addr)?;

    // Type tag string
    let mut tags = String::with_capacity(msg.args.len() + 1);
    tags.push(',');
    tags.extend(msg.args.iter().map(OscArg::tag));
    write_osc_string(&mut buf, &tags)?;

    // Argument payloads; T/F carry none
    for arg in &msg.args {
        if let OscArg::Str(s) = arg {
            write_osc_string(&mut buf, s)?;
        }
    }

    Ok(buf)
}

/// Read an OSC-string starting at `pos`, returning it and the offset after its padding
#[allow(dead_code)]
fn read_osc_string(data: &[u8], pos: usize) -> StdResult<(String, usize), OscError> {
    let rest = data
        .get(pos..)
        .ok_or_else(|| OscError::DecodeError("Offset past end of packet".to_string()))?;
    let nul = rest
        .iter()
        .position(|b| *b == 0)
        .ok_or_else(|| OscError::DecodeError("Unterminated string".to_string()))?;

    let s = std::str::from_utf8(&rest[..nul])
        .map_err(|e| OscError::DecodeError(e.to_string()))?
        .to_string();

    let padded = (nul + 1).div_ceil(4) * 4;
    if pos + padded > data.len() {
        return Err(OscError::DecodeError("Truncated string padding".to_string()));
    }

    Ok((s, pos + padded))
}

/// Decode an OSC 1.0 packet carrying `s`, `T` and `F` arguments
#[allow(dead_code)]
pub fn decode_message(data: &[u8]) -> StdResult<OscMessage, OscError> {
    if data.len() % 4 != 0 {
        return Err(OscError::DecodeError(format!(
            "Packet length {} is not a multiple of 4",
            data.len()
        )));
    }

    let (addr, pos) = read_osc_string(data, 0)?;
    if !addr.starts_with('/') {
        return Err(OscError::DecodeError(format!("Bad address: {}", addr)));
    }

    let (tags, mut pos) = read_osc_string(data, pos)?;
    let tags = tags
        .strip_prefix(',')
        .ok_or_else(|| OscError::DecodeError("Missing type tag string".to_string()))?;

    let mut args = Vec::with_capacity(tags.len());
    for tag in tags.chars() {
        match tag {
            's' => {
                let (s, next) = read_osc_string(data, pos)?;
                pos = next;
                args.push(OscArg::Str(s));
            }
            'T' => args.push(OscArg::Bool(true)),
            'F' => args.push(OscArg::Bool(false)),
            other => {
                return Err(OscError::DecodeError(format!(
                    "Unsupported type tag: {}",
                    other
                )));
            }
        }
    }

    if pos != data.len() {
        return Err(OscError::DecodeError(format!(
            "{} trailing bytes",
            data.len() - pos
        )));
    }

    Ok(OscMessage::new(addr, args))
}
