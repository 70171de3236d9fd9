use bytes::BytesMut;
use tokio_util::codec::Decoder;

use crate::error::IrcError;

const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Frames inbound bytes into `\r\n`-terminated lines.
///
/// Bytes of an unfinished line stay in the read buffer until its terminator
/// arrives, so a line (or a UTF-8 sequence) split across reads is decoded
/// whole. Yielded lines do not include the terminator.
#[derive(Debug, Default)]
pub struct LineCodec {
    /// Index of the next byte to check for a terminator
    next_index: usize,
}

impl LineCodec {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_line(&mut self, src: &mut BytesMut, len: usize, terminator: usize) -> String {
        let line = src.split_to(len + terminator);
        self.next_index = 0;
        String::from_utf8_lossy(&line[..len]).into_owned()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = IrcError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>, IrcError> {
        // A '\r' at the end of the previous read may pair with a '\n' in this one
        let start = self.next_index.saturating_sub(1);
        match src[start..]
            .windows(LINE_TERMINATOR.len())
            .position(|window| window == LINE_TERMINATOR)
        {
            Some(offset) => Ok(Some(self.take_line(src, start + offset, LINE_TERMINATOR.len()))),
            None => {
                self.next_index = src.len();
                Ok(None)
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<String>, IrcError> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        if src.is_empty() {
            return Ok(None);
        }
        // The peer closed mid-line; the tail is still one line
        let len = src.len();
        Ok(Some(self.take_line(src, len, 0)))
    }
}
