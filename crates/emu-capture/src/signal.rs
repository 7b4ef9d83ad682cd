use emu_capture_core::{SampleWidth, WavFormat};

/// Peak level for unsigned 8-bit output, a quarter of full scale around 0x80.
const U8_HIGH: u8 = 0xA0;
const U8_LOW: u8 = 0x60;
/// Peak level for signed 16-bit output.
const S16_PEAK: i16 = 8192;

/// Square wave generator standing in for the emulator's sound chip.
///
/// Produces interleaved PCM in the session's sample format, the same
/// value on every channel.
pub struct SquareWave {
    format: WavFormat,
    phase: f64,
    step: f64,
}

impl SquareWave {
    /// Creates a generator for `frequency_hz` in `format`.
    pub fn new(format: WavFormat, frequency_hz: f64) -> Self {
        Self {
            format,
            phase: 0.0,
            step: frequency_hz / f64::from(format.sample_rate),
        }
    }

    /// Fills `buffer` with whole frames; trailing bytes of a partial frame
    /// are left untouched.
    pub fn fill(&mut self, buffer: &mut [u8]) {
        let sample_bytes = self.format.sample_width.bytes();

        for frame in buffer.chunks_exact_mut(self.format.block_align()) {
            let high = self.phase < 0.5;

            for sample in frame.chunks_exact_mut(sample_bytes) {
                match self.format.sample_width {
                    SampleWidth::U8 => sample[0] = if high { U8_HIGH } else { U8_LOW },
                    SampleWidth::S16Le => {
                        let value = if high { S16_PEAK } else { -S16_PEAK };
                        sample.copy_from_slice(&value.to_le_bytes());
                    }
                }
            }

            self.phase = (self.phase + self.step).fract();
        }
    }
}
