//! Batched decode driver
//!
//! The original format's reference decoder recursed once per block and
//! relied on a trampoline to survive large scenes. Here the block loop is
//! iterative, but the batch boundary is kept as an explicit suspension
//! point: a [`DecodeTask`] decodes at most [`DecodeOptions::batch_blocks`]
//! blocks per [`resume`] call, so a caller can interleave other work or
//! abandon the decode between batches. Batching never reorders blocks and a
//! task resumed to completion produces the same model as a single
//! uninterrupted pass.
//!
//! [`resume`]: DecodeTask::resume

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::cursor::ByteCursor;
use super::model::O2wModel;
use super::reader::decode_block;
use super::DecodeOptions;
use crate::error::{Error, Result};

/// Shared flag for withdrawing an in-flight decode.
///
/// Clones share one flag. The task observes cancellation only at batch
/// boundaries; mid-batch work always runs to the boundary first.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Irrevocable for the decode holding the token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Outcome of one [`DecodeTask::resume`] call.
#[derive(Debug)]
pub enum DecodeStep<'a> {
    /// The batch limit was reached; resume the returned task to continue.
    Yielded(DecodeTask<'a>),
    /// The buffer was fully consumed.
    Complete(O2wModel),
}

/// An in-progress decode of one O2W buffer.
///
/// The task owns the decode cursor and the accumulating model; consuming
/// [`resume`] calls step it forward batch by batch. Dropping the task
/// between batches abandons the decode and releases the accumulators.
///
/// [`resume`]: Self::resume
#[derive(Debug)]
pub struct DecodeTask<'a> {
    cursor: ByteCursor<'a>,
    model: O2wModel,
    options: DecodeOptions,
    cancel: Option<CancelToken>,
    blocks_decoded: u64,
}

impl<'a> DecodeTask<'a> {
    /// Start a decode at offset 0 of `data`.
    pub fn new(data: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            model: O2wModel::default(),
            options,
            cancel: None,
            blocks_decoded: 0,
        }
    }

    /// Attach a cancellation token, checked at every batch boundary.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Decode up to `batch_blocks` blocks.
    ///
    /// Returns [`DecodeStep::Complete`] once the buffer is exhausted, or
    /// [`DecodeStep::Yielded`] with the task to resume from the exact next
    /// block. Any decode error discards the in-progress model; a set
    /// [`CancelToken`] surfaces as [`Error::Cancelled`] before any further
    /// block is processed.
    pub fn resume(mut self) -> Result<DecodeStep<'a>> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            tracing::debug!("decode cancelled after {} blocks", self.blocks_decoded);
            return Err(Error::Cancelled);
        }

        let mut batch = 0usize;
        while !self.cursor.at_end() {
            if batch >= self.options.batch_blocks {
                tracing::trace!(
                    "yielding at offset {} after {} blocks",
                    self.cursor.offset(),
                    self.blocks_decoded
                );
                return Ok(DecodeStep::Yielded(self));
            }
            decode_block(&mut self.cursor, &mut self.model, &self.options)?;
            batch += 1;
            self.blocks_decoded += 1;
        }

        tracing::debug!(
            "decoded O2W model: {} blocks, {} vertices, {} groups, {} triangles",
            self.blocks_decoded,
            self.model.vertices.len(),
            self.model.group_count(),
            self.model.triangle_count()
        );
        Ok(DecodeStep::Complete(self.model))
    }
}

/// Decode a whole buffer with default options.
pub fn decode(data: &[u8]) -> Result<O2wModel> {
    decode_with(data, DecodeOptions::default(), None)
}

/// Decode a whole buffer, pumping the task across batch boundaries.
pub fn decode_with(
    data: &[u8],
    options: DecodeOptions,
    cancel: Option<CancelToken>,
) -> Result<O2wModel> {
    let mut task = DecodeTask::new(data, options);
    if let Some(token) = cancel {
        task = task.with_cancel_token(token);
    }
    loop {
        match task.resume()? {
            DecodeStep::Complete(model) => return Ok(model),
            DecodeStep::Yielded(next) => task = next,
        }
    }
}
