//! Playback of a rendered mix on the default output device.
//!
//! The render thread pushes interleaved stereo frames into an `rtrb` ring
//! buffer; the cpal callback pops them and spreads them over however many
//! channels the device has.

use std::thread;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use cloak_dsp::{
    io::{resample::resample, ResampleQuality},
    StereoResult,
};

/// Half a second of stereo audio at 48 kHz
const RING_CAPACITY: usize = 48_000;

pub fn play(result: StereoResult, quality: ResampleQuality) -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let device_rate = config.sample_rate().0;
    let channels = config.channels() as usize;

    let buffer = resample(result.into_buffer(), device_rate, quality)?;
    let samples = buffer.into_samples();

    log::info!(
        "preview: {:.2}s at {device_rate} Hz on {channels} channel(s)",
        samples.len() as f64 / 2.0 / device_rate as f64
    );

    let (mut producer, mut consumer) = RingBuffer::<f32>::new(RING_CAPACITY);

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            for frame in data.chunks_mut(channels) {
                // Pop whole stereo frames only, so left/right never drift apart
                let (l, r) = if consumer.slots() >= 2 {
                    (consumer.pop().unwrap_or(0.0), consumer.pop().unwrap_or(0.0))
                } else {
                    (0.0, 0.0)
                };

                match frame {
                    [mono] => *mono = 0.5 * (l + r),
                    [left, right, rest @ ..] => {
                        *left = l;
                        *right = r;
                        rest.fill(0.0);
                    }
                    [] => {}
                }
            }
        },
        |err| log::error!("audio stream error: {err}"),
        None,
    )?;

    stream.play()?;

    for &sample in &samples {
        while producer.push(sample).is_err() {
            thread::sleep(Duration::from_millis(5));
        }
    }

    // Drain what is still queued before the stream is dropped
    while producer.slots() < RING_CAPACITY {
        thread::sleep(Duration::from_millis(10));
    }
    thread::sleep(Duration::from_millis(100));

    Ok(())
}
