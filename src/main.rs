//! Multi-waveform demo: plays one of five waveforms on the default output
//! device until a key is pressed.
//!
//! ```text
//! waveforms                            sine, prompts for frequency
//! waveforms --<kind>                   prompts for whatever is missing
//! waveforms --<kind> <frequency>       width still prompted for saw/pulse
//! waveforms --<kind> <frequency> <width>
//! ```
//!
//! Kinds: `--sine`, `--saw`, `--pulse`, `--impulse`, `--noise`. Noise takes
//! no further arguments. Malformed arguments exit with status 1.

use std::env;

use anyhow::{anyhow, bail, Context, Result};
use cpal::traits::StreamTrait;
use waveforms::audio::AudioOutput;
use waveforms::console;
use waveforms::{
    ImpulseGenerator, NoiseGenerator, PulseGenerator, SawGenerator, SineGenerator, Waveform,
    WaveformGenerator,
};

const USAGE: &str = "usage: waveforms [--sine|--saw|--pulse|--impulse|--noise] [frequency] [width]";

/// Parameters gathered from the command line; `None` means prompt later.
struct Request {
    kind: Waveform,
    frequency: Option<f64>,
    width: Option<f64>,
}

fn parse_args(args: &[String]) -> Result<Request> {
    if args.len() > 3 {
        bail!("too many arguments\n{USAGE}");
    }

    let kind = match args.first() {
        None => {
            // no arguments: plain sine, frequency prompted later
            return Ok(Request {
                kind: Waveform::Sine,
                frequency: None,
                width: None,
            });
        }
        Some(flag) => Waveform::from_flag(flag)
            .ok_or_else(|| anyhow!("unknown waveform flag `{flag}`\n{USAGE}"))?,
    };

    let frequency = match args.get(1) {
        None => None,
        Some(raw) => {
            if !kind.needs_frequency() {
                bail!("--noise takes no further arguments\n{USAGE}");
            }
            let frequency: f64 = raw
                .parse()
                .map_err(|_| anyhow!("bad frequency `{raw}`\n{USAGE}"))?;
            if frequency <= 0.0 {
                bail!("frequency must be positive, got {frequency}");
            }
            Some(frequency)
        }
    };

    let width = match args.get(2) {
        None => None,
        Some(raw) => {
            if !kind.needs_width() {
                bail!("only --saw and --pulse take a width\n{USAGE}");
            }
            let width: f64 = raw
                .parse()
                .map_err(|_| anyhow!("bad width `{raw}`\n{USAGE}"))?;
            check_width(kind, width)?;
            Some(width)
        }
    };

    Ok(Request {
        kind,
        frequency,
        width,
    })
}

fn check_width(kind: Waveform, width: f64) -> Result<()> {
    match kind {
        // both saw ramps divide by width or 1 - width
        Waveform::Saw if width <= 0.0 || width >= 1.0 => {
            bail!("saw width must lie strictly between 0 and 1, got {width}")
        }
        Waveform::Pulse if !(0.0..=1.0).contains(&width) => {
            bail!("pulse width must lie in [0, 1], got {width}")
        }
        _ => Ok(()),
    }
}

fn prompt_frequency() -> Result<f64> {
    Ok(console::prompt_number(
        "Enter frequency (>0.1 Hz, <20k Hz):  ",
        0.1,
        20000.0,
    )?)
}

fn prompt_width(kind: Waveform) -> Result<f64> {
    loop {
        let width = console::prompt_number("Enter a width (0.0-1.0):  ", 0.0, 1.0)?;
        if check_width(kind, width).is_ok() {
            return Ok(width);
        }
        println!("A {} wave needs a width strictly between 0 and 1.", kind.name());
    }
}

/// Builds the generator for `request`, prompting for any parameter the
/// command line did not supply.
fn build_generator(request: Request, sample_rate: f64) -> Result<WaveformGenerator> {
    let Request {
        kind,
        frequency,
        width,
    } = request;

    if kind == Waveform::Noise {
        return Ok(WaveformGenerator::Noise(NoiseGenerator::new()));
    }

    let frequency = match frequency {
        Some(frequency) => frequency,
        None => prompt_frequency()?,
    };

    let generator = match kind {
        Waveform::Sine => WaveformGenerator::Sine(SineGenerator::new(frequency, sample_rate)),
        Waveform::Impulse => {
            WaveformGenerator::Impulse(ImpulseGenerator::new(frequency, sample_rate))
        }
        Waveform::Saw => {
            let width = match width {
                Some(width) => width,
                None => prompt_width(kind)?,
            };
            WaveformGenerator::Saw(SawGenerator::new(frequency, width, sample_rate))
        }
        Waveform::Pulse => {
            let width = match width {
                Some(width) => width,
                None => prompt_width(kind)?,
            };
            WaveformGenerator::Pulse(PulseGenerator::new(frequency, width, sample_rate))
        }
        Waveform::Noise => unreachable!("handled above"),
    };
    Ok(generator)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let request = parse_args(&args)?;

    let output = AudioOutput::open().context("opening the default output device")?;
    let generator = build_generator(request, output.sample_rate())?;

    let stream = output
        .play(generator)
        .context("starting the output stream")?;
    println!("stream latency: {} frames", output.buffer_frames());
    println!(
        "running... press any key to quit (buffer frames: {})",
        output.buffer_frames()
    );
    console::wait_for_keypress()?;
    stream.pause().context("stopping the output stream")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_defaults_to_sine() {
        let request = parse_args(&[]).unwrap();
        assert_eq!(request.kind, Waveform::Sine);
        assert!(request.frequency.is_none());
        assert!(request.width.is_none());
    }

    #[test]
    fn test_kind_only() {
        let request = parse_args(&args(&["--impulse"])).unwrap();
        assert_eq!(request.kind, Waveform::Impulse);
        assert!(request.frequency.is_none());
    }

    #[test]
    fn test_kind_and_frequency() {
        let request = parse_args(&args(&["--saw", "220"])).unwrap();
        assert_eq!(request.kind, Waveform::Saw);
        assert_eq!(request.frequency, Some(220.0));
        assert!(request.width.is_none());
    }

    #[test]
    fn test_fully_parameterized() {
        let request = parse_args(&args(&["--pulse", "100", "0.5"])).unwrap();
        assert_eq!(request.kind, Waveform::Pulse);
        assert_eq!(request.frequency, Some(100.0));
        assert_eq!(request.width, Some(0.5));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(parse_args(&args(&["--triangle"])).is_err());
    }

    #[test]
    fn test_too_many_arguments_rejected() {
        assert!(parse_args(&args(&["--saw", "220", "0.5", "extra"])).is_err());
    }

    #[test]
    fn test_noise_rejects_frequency() {
        assert!(parse_args(&args(&["--noise", "440"])).is_err());
    }

    #[test]
    fn test_width_only_for_saw_and_pulse() {
        assert!(parse_args(&args(&["--sine", "440", "0.5"])).is_err());
        assert!(parse_args(&args(&["--impulse", "440", "0.5"])).is_err());
    }

    #[test]
    fn test_malformed_numbers_rejected() {
        assert!(parse_args(&args(&["--sine", "abc"])).is_err());
        assert!(parse_args(&args(&["--saw", "220", "wide"])).is_err());
        assert!(parse_args(&args(&["--sine", "-10"])).is_err());
    }

    #[test]
    fn test_saw_width_bounds_are_exclusive() {
        assert!(parse_args(&args(&["--saw", "220", "0.0"])).is_err());
        assert!(parse_args(&args(&["--saw", "220", "1.0"])).is_err());
        assert!(parse_args(&args(&["--pulse", "220", "1.0"])).is_ok());
        assert!(parse_args(&args(&["--pulse", "220", "1.5"])).is_err());
    }
}
