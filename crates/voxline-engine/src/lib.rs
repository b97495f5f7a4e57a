//! External speech tool adapters.
//!
//! Implements the `voxline-core` capability ports by driving command-line
//! programs: [`edge::EdgeTtsSynthesizer`] spawns `edge-tts` for synthesis
//! and [`ffmpeg::FfmpegConverter`] spawns `ffmpeg` for normalization. Both
//! treat the program as opaque: arguments in, exit status and files out.

pub mod edge;
pub mod ffmpeg;

pub use edge::EdgeTtsSynthesizer;
pub use ffmpeg::FfmpegConverter;
