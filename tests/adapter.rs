mod common;

use approx::assert_abs_diff_eq;
use std::f64::consts::PI;

use common::{sample_closes, ScriptedEngine};
use talib_adapter::{
    evaluate, evaluate_fresh, evaluate_in_place, lookback, AdapterError, AnyBuffer, AnySeries,
    Buffer, Engine, Func, Indicators, MaType, OutputKind, ParamValue, RetCode,
};

#[test]
fn test_sma_of_three_over_five_samples() {
    let engine = ScriptedEngine::new();
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];

    let sma = engine.sma(&data, 3, Buffer::Fresh).unwrap();

    assert_eq!(sma.begin, 2);
    assert_eq!(sma.count, 3);
    assert_eq!(sma.values, vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_sin_scenario() {
    let engine = ScriptedEngine::new();
    let data = [0.0, PI / 2.0, PI];

    let sin = engine.sin(&data, Buffer::Fresh).unwrap();

    assert_eq!(sin.begin, 0);
    assert_eq!(sin.count, 3);
    assert_abs_diff_eq!(sin.values[0], 0.0);
    assert_abs_diff_eq!(sin.values[1], 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(sin.values[2], 1.2246e-16, epsilon = 1e-19);
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let engine = ScriptedEngine::new();
    let data = sample_closes(64);

    let first = engine.sma(&data, 10, Buffer::Fresh).unwrap();
    let second = engine.sma(&data, 10, Buffer::Fresh).unwrap();

    assert_eq!((first.begin, first.count), (second.begin, second.count));
    let bits = |values: &[f64]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first.values), bits(&second.values));
}

#[test]
fn test_in_place_matches_separate_output() {
    let engine = ScriptedEngine::new();
    let data = sample_closes(40);
    let separate = engine.sma(&data, 5, Buffer::Fresh).unwrap();

    let mut aliased = data.clone();
    let in_place = evaluate_in_place(&engine, Func::Sma, &mut aliased, &[], &[ParamValue::Int(5)]).unwrap();

    assert_eq!(in_place.begin, separate.begin);
    assert_eq!(in_place.count, separate.count);
    assert_eq!(in_place.values, separate.values.into_vec());
    assert!(in_place.values.is_borrowed());
}

#[test]
fn test_in_place_with_second_input() {
    let engine = ScriptedEngine::new();
    let mut a = vec![1.0, 2.0, 3.0];
    let b = [10.0, 20.0, 30.0];

    let sum = evaluate_in_place(&engine, Func::Add, &mut a, &[&b], &[]).unwrap();
    assert_eq!(sum.values, vec![11.0, 22.0, 33.0]);
    drop(sum);
    assert_eq!(a, vec![11.0, 22.0, 33.0]);
}

#[test]
fn test_in_place_requires_single_real_output() {
    let engine = ScriptedEngine::new();
    let mut data = sample_closes(10);
    let params = [
        ParamValue::Int(5),
        ParamValue::Real(2.0),
        ParamValue::Real(2.0),
        ParamValue::MaType(MaType::Sma),
    ];

    let err = evaluate_in_place(&engine, Func::Bbands, &mut data, &[], &params).unwrap_err();
    assert!(matches!(err, AdapterError::InPlaceUnsupported { func: Func::Bbands }));
    assert_eq!(engine.calls(), 0);
}

#[test]
fn test_multi_output_shares_begin_and_count() {
    let engine = ScriptedEngine::new();
    let data = sample_closes(30);

    let bands = engine
        .bbands(&data, 5, 2.0, 1.5, MaType::Sma, Buffer::Fresh, Buffer::Fresh, Buffer::Fresh)
        .unwrap();
    let (upper, middle, lower) = &bands.values;

    assert_eq!(bands.begin, 4);
    assert_eq!(bands.count, 26);
    assert_eq!(upper.len(), bands.count);
    assert_eq!(middle.len(), bands.count);
    assert_eq!(lower.len(), bands.count);

    let sma = engine.sma(&data, 5, Buffer::Fresh).unwrap();
    assert_eq!(middle.as_slice(), sma.values.as_slice());
    for k in 0..bands.count {
        assert_abs_diff_eq!(upper[k] - middle[k], 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(middle[k] - lower[k], 1.5, epsilon = 1e-9);
    }
}

#[test]
fn test_reused_buffer_is_written_in_place() {
    let engine = ScriptedEngine::new();
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let mut buffer = vec![f64::NAN; 8];

    let sma = engine.sma(&data, 3, Buffer::Reuse(&mut buffer)).unwrap();
    assert!(sma.values.is_borrowed());
    assert_eq!(sma.values, vec![2.0, 3.0, 4.0]);
    drop(sma);

    assert_eq!(&buffer[..3], &[2.0, 3.0, 4.0]);
    assert!(buffer[5..].iter().all(|v| v.is_nan()));
}

#[test]
fn test_undersized_buffer_is_rejected() {
    let engine = ScriptedEngine::new();
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let mut buffer = [0.0; 3];

    let err = engine.sma(&data, 3, Buffer::Reuse(&mut buffer)).unwrap_err();

    assert!(matches!(
        err,
        AdapterError::BufferTooSmall { required: 5, actual: 3, .. }
    ));
    assert_eq!(engine.calls(), 0);
}

#[test]
fn test_minimum_window_accepted_and_below_rejected() {
    let engine = ScriptedEngine::new();
    let data = sample_closes(10);

    let sma = engine.sma(&data, 2, Buffer::Fresh).unwrap();
    assert_eq!(sma.begin, 1);
    assert_eq!(engine.calls(), 1);

    let err = engine.sma(&data, 1, Buffer::Fresh).unwrap_err();
    assert!(matches!(
        err,
        AdapterError::ParamOutOfRange { func: Func::Sma, param: "time_period", .. }
    ));
    assert_eq!(engine.calls(), 1);
}

#[test]
fn test_engine_status_is_surfaced() {
    let engine = ScriptedEngine::failing(RetCode::AllocErr);

    let err = engine.sma(&[1.0, 2.0, 3.0], 2, Buffer::Fresh).unwrap_err();

    assert!(matches!(
        err,
        AdapterError::Engine { func: Func::Sma, code: RetCode::AllocErr }
    ));
}

#[test]
fn test_unsupported_function_status() {
    let engine = ScriptedEngine::new();
    let err = engine.rsi(&sample_closes(20), 14, Buffer::Fresh).unwrap_err();
    assert!(matches!(
        err,
        AdapterError::Engine { code: RetCode::NotSupported, .. }
    ));
}

#[test]
fn test_span_beyond_input_is_a_contract_error() {
    let engine = ScriptedEngine::overreporting();

    let err = engine.sma(&[1.0, 2.0, 3.0, 4.0], 2, Buffer::Fresh).unwrap_err();

    assert!(matches!(
        err,
        AdapterError::EngineContract { begin: 1, count: 4, len: 4, .. }
    ));
}

#[test]
fn test_empty_and_mismatched_inputs() {
    let engine = ScriptedEngine::new();

    let err = engine.sma(&[], 3, Buffer::Fresh).unwrap_err();
    assert!(matches!(err, AdapterError::EmptyInput { func: Func::Sma }));

    let err = engine.add(&[1.0, 2.0, 3.0], &[1.0, 2.0], Buffer::Fresh).unwrap_err();
    assert!(matches!(
        err,
        AdapterError::LengthMismatch { input: "real1", expected: 3, actual: 2, .. }
    ));
    assert_eq!(engine.calls(), 0);
}

#[test]
fn test_input_shorter_than_window() {
    let engine = ScriptedEngine::new();

    let sma = engine.sma(&[1.0, 2.0], 3, Buffer::Fresh).unwrap();

    assert_eq!(sma.count, 0);
    assert!(sma.values.is_empty());
}

#[test]
fn test_integer_outputs() {
    let engine = ScriptedEngine::new();
    let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0];

    let idx = engine
        .minmaxindex(&data, 3, Buffer::Fresh, Buffer::Fresh)
        .unwrap();
    let (min_idx, max_idx) = &idx.values;

    assert_eq!(idx.begin, 2);
    assert_eq!(min_idx.as_slice(), &[1, 1, 3, 3, 6]);
    assert_eq!(max_idx.as_slice(), &[2, 2, 4, 5, 5]);
}

#[test]
fn test_generic_evaluate_through_trait_object() {
    let engine = ScriptedEngine::new();
    let dyn_engine: &dyn Engine = &engine;
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];

    let outcome = evaluate_fresh(dyn_engine, Func::Sma, &[&data], &[ParamValue::Int(3)]).unwrap();
    assert_eq!(outcome.begin, 2);
    match &outcome.values[..] {
        [AnySeries::Real(series)] => assert_eq!(series.as_slice(), &[2.0, 3.0, 4.0]),
        other => panic!("unexpected outputs {:?}", other),
    }

    let typed = dyn_engine.sma(&data, 3, Buffer::Fresh).unwrap();
    assert_eq!(typed.values, vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_wrong_buffer_shapes() {
    let engine = ScriptedEngine::new();
    let data = [1.0, 2.0, 3.0];

    let err = evaluate(&engine, Func::Sma, &[&data], &[ParamValue::Int(2)], vec![]).unwrap_err();
    assert!(matches!(err, AdapterError::OutputArity { expected: 1, actual: 0, .. }));

    let err = evaluate(
        &engine,
        Func::Sma,
        &[&data],
        &[ParamValue::Int(2)],
        vec![AnyBuffer::fresh(OutputKind::Integer)],
    )
    .unwrap_err();
    assert!(matches!(err, AdapterError::OutputKind { output: "out_real", .. }));
}

#[test]
fn test_validated_lookback() {
    let engine = ScriptedEngine::new();

    assert_eq!(lookback(&engine, Func::Sma, &[ParamValue::Int(3)]).unwrap(), 2);
    assert!(matches!(
        lookback(&engine, Func::Sma, &[ParamValue::Int(0)]),
        Err(AdapterError::ParamOutOfRange { .. })
    ));
    assert!(matches!(
        lookback(&engine, Func::Sma, &[]),
        Err(AdapterError::ParamArity { .. })
    ));
}
