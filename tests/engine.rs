//! Tests for the drone engine

mod wav_writer;

use tanpura_dsp::engine::{ControlSnapshot, DroneEngine, MixWeights};
use tanpura_dsp::note::{Note, NoteName};
use tanpura_dsp::NUM_STRINGS;

const SAMPLE_RATE: f32 = 32000.0;
const BLOCK_SIZE: usize = 48;

fn engine_with_spec_tuning() -> DroneEngine {
    let mut engine = DroneEngine::new();
    engine.init(SAMPLE_RATE);
    engine.set_string_note(0, Note::new(NoteName::C, 2));
    engine.set_string_note(1, Note::new(NoteName::C, 3));
    engine.set_string_note(2, Note::new(NoteName::C, 3));
    engine.set_string_note(3, Note::new(NoteName::G, 2));
    engine
}

#[test]
fn never_triggered_engine_is_silent() {
    let mut engine = DroneEngine::new();
    engine.init(SAMPLE_RATE);

    let mut left = [1.0; BLOCK_SIZE];
    let mut right = [1.0; BLOCK_SIZE];
    engine.render(&mut left, &mut right);

    assert!(left.iter().all(|s| *s == 0.0));
    assert!(right.iter().all(|s| *s == 0.0));
}

#[test]
fn plucked_string_is_audible_and_reproducible() {
    let render = || {
        let mut engine = engine_with_spec_tuning();
        engine.set_weights(MixWeights {
            string_weight: 0.2,
            string_mix: 1.0,
            comb_mix: 0.0,
            formant_mix: 0.0,
        });
        engine.trigger(0);

        let mut left = [0.0; BLOCK_SIZE];
        let mut right = [0.0; BLOCK_SIZE];
        engine.render(&mut left, &mut right);
        left
    };

    let a = render();
    let b = render();

    assert!(a.iter().any(|s| *s != 0.0));
    assert_eq!(a, b);
}

#[test]
fn output_is_duplicated_to_both_channels() {
    let mut engine = engine_with_spec_tuning();
    engine.trigger(0);
    engine.trigger(2);

    let mut left = [0.0; 256];
    let mut right = [0.0; 256];
    engine.render(&mut left, &mut right);

    assert_eq!(left, right);
}

#[test]
fn disabled_formant_branch_contributes_exactly_zero() {
    let render = |formant_mix| {
        let mut engine = engine_with_spec_tuning();
        engine.set_formant_enabled(false);
        let mut weights = engine.weights();
        weights.formant_mix = formant_mix;
        engine.set_weights(weights);
        engine.trigger(0);

        let mut left = [0.0; 256];
        let mut right = [0.0; 256];
        engine.render(&mut left, &mut right);
        left
    };

    assert_eq!(render(0.0), render(0.7));
}

#[test]
fn character_control_maps_to_weights() {
    let weights = MixWeights::from_character(0.5);

    assert_eq!(weights.string_weight, 1.0 / (NUM_STRINGS + 1) as f32);
    assert!((weights.comb_mix - 0.2).abs() < 1e-6);
    assert!((weights.formant_mix - 0.2).abs() < 1e-6);
    assert!((weights.string_mix - 0.8).abs() < 1e-6);
}

#[test]
fn trigger_pulse_strums_round_robin() {
    let mut engine = DroneEngine::new();
    engine.init(SAMPLE_RATE);

    let controls = ControlSnapshot {
        trigger_pulse: true,
        ..Default::default()
    };

    for expected in 0..NUM_STRINGS {
        engine.apply_controls(&controls);
        assert!(engine.voice(expected).trigger_pending());

        let mut left = [0.0; BLOCK_SIZE];
        let mut right = [0.0; BLOCK_SIZE];
        engine.render(&mut left, &mut right);
        assert!(!engine.voice(expected).trigger_pending());
    }
}

#[test]
fn apply_controls_retunes_the_strings() {
    let mut engine = DroneEngine::new();
    engine.init(SAMPLE_RATE);

    let controls = ControlSnapshot {
        pitch_semitone_offset: [7, 12, 12, 0],
        tuning_multiplier: 1.0,
        ..Default::default()
    };
    engine.apply_controls(&controls);

    // Offsets above C1: G1, C2, C2, C1.
    assert!((engine.voice(0).frequency() - Note::from_midi(31).frequency()).abs() < 1e-3);
    assert!((engine.voice(1).frequency() - Note::from_midi(36).frequency()).abs() < 1e-3);
    assert!((engine.voice(3).frequency() - Note::from_midi(24).frequency()).abs() < 1e-3);

    let detuned = ControlSnapshot {
        tuning_multiplier: 2.0,
        ..controls
    };
    engine.apply_controls(&detuned);
    assert!((engine.voice(3).frequency() - 2.0 * Note::from_midi(24).frequency()).abs() < 1e-3);
}

#[test]
fn limiter_keeps_hot_blocks_bounded() {
    let mut engine = engine_with_spec_tuning();
    engine.set_weights(MixWeights {
        string_weight: 1.0,
        string_mix: 1.0,
        comb_mix: 1.0,
        formant_mix: 0.0,
    });
    let controls = ControlSnapshot {
        limiter_enabled: true,
        lowpass_enabled: false,
        ..Default::default()
    };
    engine.apply_controls(&controls);
    for i in 0..NUM_STRINGS {
        engine.trigger(i);
    }

    let mut left = [0.0; 4096];
    let mut right = [0.0; 4096];
    engine.render(&mut left, &mut right);

    // The peak follower needs a short attack before gain reduction settles;
    // after that the output stays within the limiter's headroom.
    assert!(left.iter().all(|s| s.is_finite()));
    assert!(left[1024..].iter().all(|s| s.abs() < 1.5));
}

#[test]
fn drone_wav() {
    simple_logger::init().ok();

    let mut engine = DroneEngine::new();
    engine.init(SAMPLE_RATE);
    engine.set_formant_duration(2.0);

    let duration = 8.0;
    let strum_period = (SAMPLE_RATE * 0.75) as usize;
    let mut wav_data = Vec::new();
    let mut left = [0.0; BLOCK_SIZE];
    let mut right = [0.0; BLOCK_SIZE];

    for block in 0..(duration * SAMPLE_RATE) as usize / BLOCK_SIZE {
        if (block * BLOCK_SIZE) % strum_period < BLOCK_SIZE {
            engine.pluck_next();
        }
        engine.render(&mut left, &mut right);
        wav_data.extend_from_slice(&left);
    }

    wav_writer::write("engine/drone.wav", SAMPLE_RATE, &wav_data).ok();
}
