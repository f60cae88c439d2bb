//! # contour-loop
//!
//! Recording and cyclic playback of a moving point set.
//!
//! One loop period of live motion is captured as timestamped snapshots;
//! at the loop boundary the capture is sealed into an immutable
//! [`Track`]. Sealed tracks replay forever, each behind its own
//! [`Playhead`], interpolated between captured frames so layered
//! playback stays smooth at any display rate.
//!
//! ## Key Types
//!
//! - [`Track`] / [`TrackSample`] — one sealed recording loop
//! - [`LoopRecorder`] — in-progress capture and loop-boundary sealing
//! - [`LoopPlayer`] — independent playheads over the sealed tracks

pub mod player;
pub mod recorder;
pub mod track;

pub use player::{LoopPlayer, Playhead};
pub use recorder::LoopRecorder;
pub use track::{Track, TrackSample};
