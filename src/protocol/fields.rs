use bytes::BytesMut;
use serde::Serialize;
use tokio_util::codec::Decoder;
use tracing::debug;

use super::codec::PacketCodec;
use super::header::{ReferenceId, Stratum};
use super::message::ReplyPacket;
use crate::core::{DisplayOptions, Error, Result};
use crate::time::{epoch, TimestampFormat};
use crate::util::{exp2_seconds, format_decimal, render_seconds};

/// Labels of the decoded fields, in output order
pub const FIELD_LABELS: [&str; 13] = [
    "Leap Indicator",
    "Version Number",
    "Mode",
    "Stratum",
    "Poll Interval",
    "Precision",
    "Root Delay",
    "Root Dispersion",
    "Reference ID",
    "Reference Timestamp",
    "Origin Timestamp",
    "Receive Timestamp",
    "Transmit Timestamp",
];

/// The thirteen header fields of a reply, rendered for display
///
/// Field order here is the output order, for both [`DecodedFields::rows`]
/// and serialized forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedFields {
    pub leap_indicator: String,
    pub version_number: String,
    pub mode: String,
    pub stratum: String,
    pub poll_interval: String,
    pub precision: String,
    pub root_delay: String,
    pub root_dispersion: String,
    pub reference_id: String,
    pub reference_timestamp: String,
    pub origin_timestamp: String,
    pub receive_timestamp: String,
    pub transmit_timestamp: String,
}

impl DecodedFields {
    /// Renders a parsed reply
    pub fn render(packet: &ReplyPacket, options: DisplayOptions) -> Result<Self> {
        let fields = DecodedFields {
            leap_indicator: packet.leap.to_string(),
            version_number: packet.version.to_string(),
            mode: packet.mode.to_string(),
            stratum: packet.stratum.to_string(),
            poll_interval: render_poll_interval(packet.poll),
            precision: render_seconds(exp2_seconds(i32::from(packet.precision)), options.milliseconds),
            root_delay: render_seconds(packet.root_delay.as_secs_f64(), options.milliseconds),
            root_dispersion: render_seconds(packet.root_dispersion.as_secs_f64(), options.milliseconds),
            reference_id: render_reference_id(&packet.reference_id, &packet.stratum, options.show_ipv4_form),
            reference_timestamp: render_timestamp(&packet.reference_timestamp)?,
            origin_timestamp: render_timestamp(&packet.origin_timestamp)?,
            receive_timestamp: render_timestamp(&packet.receive_timestamp)?,
            transmit_timestamp: render_timestamp(&packet.transmit_timestamp)?,
        };

        debug!(
            poll_interval = %fields.poll_interval,
            precision = %fields.precision,
            root_delay = %fields.root_delay,
            root_dispersion = %fields.root_dispersion,
            reference_id = %fields.reference_id,
            "decoded reply"
        );

        Ok(fields)
    }

    /// Label/value pairs in output order
    pub fn rows(&self) -> [(&'static str, &str); 13] {
        let values = [
            &self.leap_indicator,
            &self.version_number,
            &self.mode,
            &self.stratum,
            &self.poll_interval,
            &self.precision,
            &self.root_delay,
            &self.root_dispersion,
            &self.reference_id,
            &self.reference_timestamp,
            &self.origin_timestamp,
            &self.receive_timestamp,
            &self.transmit_timestamp,
        ];
        let mut rows = [("", ""); 13];
        for (row, (label, value)) in rows.iter_mut().zip(FIELD_LABELS.iter().zip(values)) {
            *row = (*label, value.as_str());
        }
        rows
    }
}

/// Decodes a raw reply into display strings
///
/// Fails without reading any field if fewer than 48 bytes are given.
pub fn decode(reply: &[u8], options: DisplayOptions) -> Result<DecodedFields> {
    let mut buf = BytesMut::from(reply);
    let packet = PacketCodec::new()
        .decode_eof(&mut buf)?
        .ok_or_else(|| Error::too_short(reply.len()))?;
    DecodedFields::render(&packet, options)
}

/// Poll interval as whole seconds; never shown in milliseconds
fn render_poll_interval(poll: u8) -> String {
    format!("{} seconds", format_decimal(exp2_seconds(i32::from(poll))))
}

fn render_reference_id(id: &ReferenceId, stratum: &Stratum, show_ipv4_form: bool) -> String {
    match stratum {
        Stratum::Primary => id.as_ascii(),
        _ if show_ipv4_form => format!("{} (IPv4 form: {})", id.as_hex(), id.as_ipv4()),
        _ => id.as_hex(),
    }
}

fn render_timestamp(timestamp: &TimestampFormat) -> Result<String> {
    Ok(format!(
        "{} ({})",
        format_decimal(timestamp.as_secs_f64()),
        epoch::to_rfc3339(timestamp)?
    ))
}
