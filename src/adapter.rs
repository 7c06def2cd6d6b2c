// The uniform calling convention: every function is evaluated over the full
// input range, and each output is trimmed to the valid range the engine reported

use tracing::debug;

use crate::engine::{Engine, RawCall, RawOutput, Span};
use crate::error::{AdapterError, Result};
use crate::functions::{Func, FuncInfo};
use crate::params::{self, ParamValue};
use crate::series::{AnyBuffer, AnySeries, Outcome, Sample, Series, Storage};

enum OutputStorage<'o> {
    Real(Storage<'o, f64>),
    Integer(Storage<'o, i32>),
}

impl<'o> OutputStorage<'o> {
    fn capacity(&self) -> usize {
        match self {
            OutputStorage::Real(storage) => storage.capacity(),
            OutputStorage::Integer(storage) => storage.capacity(),
        }
    }

    fn raw(&mut self) -> RawOutput {
        match self {
            OutputStorage::Real(storage) => RawOutput::Real(storage.as_mut_ptr()),
            OutputStorage::Integer(storage) => RawOutput::Integer(storage.as_mut_ptr()),
        }
    }

    fn trimmed(self, count: usize) -> AnySeries<'o> {
        match self {
            OutputStorage::Real(storage) => AnySeries::Real(Series::trimmed(storage, count)),
            OutputStorage::Integer(storage) => AnySeries::Integer(Series::trimmed(storage, count)),
        }
    }
}

/// Checks input arity and that all inputs share one non-zero length.
fn check_inputs(func: Func, info: &FuncInfo, inputs: &[&[f64]]) -> Result<usize> {
    if inputs.len() != info.inputs.len() {
        return Err(AdapterError::InputArity {
            func,
            expected: info.inputs.len(),
            actual: inputs.len(),
        });
    }
    let len = inputs[0].len();
    if len == 0 {
        return Err(AdapterError::EmptyInput { func });
    }
    for (name, input) in info.inputs.iter().zip(inputs).skip(1) {
        if input.len() != len {
            return Err(AdapterError::LengthMismatch {
                func,
                input: name,
                expected: len,
                actual: input.len(),
            });
        }
    }
    Ok(len)
}

fn prepare_outputs<'o>(
    func: Func,
    info: &FuncInfo,
    buffers: Vec<AnyBuffer<'o>>,
    len: usize,
) -> Result<Vec<OutputStorage<'o>>> {
    if buffers.len() != info.outputs.len() {
        return Err(AdapterError::OutputArity {
            func,
            expected: info.outputs.len(),
            actual: buffers.len(),
        });
    }

    let mut storages = Vec::with_capacity(buffers.len());
    for (spec, buffer) in info.outputs.iter().zip(buffers) {
        if buffer.kind() != spec.kind {
            return Err(AdapterError::OutputKind {
                func,
                output: spec.name,
                expected: spec.kind.label(),
            });
        }
        let storage = match buffer {
            AnyBuffer::Real(buffer) => OutputStorage::Real(Storage::from_buffer(buffer, len)),
            AnyBuffer::Integer(buffer) => OutputStorage::Integer(Storage::from_buffer(buffer, len)),
        };
        if storage.capacity() < len {
            return Err(AdapterError::BufferTooSmall {
                func,
                output: spec.name,
                required: len,
                actual: storage.capacity(),
            });
        }
        storages.push(storage);
    }
    Ok(storages)
}

fn check_span(func: Func, span: Span, len: usize) -> Result<()> {
    match span.begin.checked_add(span.count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(AdapterError::EngineContract {
            func,
            begin: span.begin,
            count: span.count,
            len,
        }),
    }
}

/// Evaluates `func` over the full length of `inputs`.
///
/// `buffers` holds one entry per declared output, in declaration order. The
/// returned series are trimmed to the valid range and share `begin` and
/// `count`.
pub fn evaluate<'o, E: Engine + ?Sized>(
    engine: &E,
    func: Func,
    inputs: &[&[f64]],
    params: &[ParamValue],
    buffers: Vec<AnyBuffer<'o>>,
) -> Result<Outcome<Vec<AnySeries<'o>>>> {
    let info = func.info();
    let len = check_inputs(func, info, inputs)?;
    params::validate(func, params)?;
    let reused = buffers.iter().filter(|buffer| buffer.is_reuse()).count();
    let mut storages = prepare_outputs(func, info, buffers, len)?;

    let input_ptrs: Vec<*const f64> = inputs.iter().map(|input| input.as_ptr()).collect();
    let outputs: Vec<RawOutput> = storages.iter_mut().map(OutputStorage::raw).collect();
    let call = RawCall {
        func,
        start: 0,
        end: len - 1,
        inputs: &input_ptrs,
        params,
        outputs: &outputs,
    };

    // SAFETY: every input has `len` elements and every output storage holds
    // at least `len` elements; none of them is touched until the call returns.
    let span = unsafe { engine.compute(&call) }
        .map_err(|code| AdapterError::Engine { func, code })?;
    check_span(func, span, len)?;

    debug!(
        "{} via {}: {} inputs of length {}, begin {}, count {}, {} reused buffers",
        func,
        engine.name(),
        inputs.len(),
        len,
        span.begin,
        span.count,
        reused
    );

    let values = storages
        .into_iter()
        .map(|storage| storage.trimmed(span.count))
        .collect();
    Ok(Outcome {
        values,
        begin: span.begin,
        count: span.count,
    })
}

/// Like [`evaluate`], with fresh storage for every output.
pub fn evaluate_fresh<E: Engine + ?Sized>(
    engine: &E,
    func: Func,
    inputs: &[&[f64]],
    params: &[ParamValue],
) -> Result<Outcome<Vec<AnySeries<'static>>>> {
    let buffers = func
        .info()
        .outputs
        .iter()
        .map(|spec| AnyBuffer::fresh(spec.kind))
        .collect();
    evaluate(engine, func, inputs, params, buffers)
}

/// Evaluates a single-output function, writing the result over `data`.
///
/// `data` is the first input; `rest` holds the remaining inputs. On success
/// `data[..count]` holds the valid outputs.
pub fn evaluate_in_place<'d, E: Engine + ?Sized>(
    engine: &E,
    func: Func,
    data: &'d mut [f64],
    rest: &[&[f64]],
    params: &[ParamValue],
) -> Result<Outcome<Series<'d, f64>>> {
    let info = func.info();
    if !info.supports_in_place() {
        return Err(AdapterError::InPlaceUnsupported { func });
    }

    let len = {
        let mut all: Vec<&[f64]> = Vec::with_capacity(rest.len() + 1);
        all.push(&*data);
        all.extend_from_slice(rest);
        check_inputs(func, info, &all)?
    };
    params::validate(func, params)?;

    let out_ptr = data.as_mut_ptr();
    let mut input_ptrs: Vec<*const f64> = Vec::with_capacity(rest.len() + 1);
    input_ptrs.push(out_ptr as *const f64);
    input_ptrs.extend(rest.iter().map(|input| input.as_ptr()));
    let outputs = [RawOutput::Real(out_ptr)];
    let call = RawCall {
        func,
        start: 0,
        end: len - 1,
        inputs: &input_ptrs,
        params,
        outputs: &outputs,
    };

    // SAFETY: `data` is exclusively borrowed for the call and both its input
    // and output pointer are derived from the same `as_mut_ptr`; the other
    // inputs have `len` elements.
    let span = unsafe { engine.compute(&call) }
        .map_err(|code| AdapterError::Engine { func, code })?;
    check_span(func, span, len)?;

    debug!(
        "{} via {} in place: length {}, begin {}, count {}",
        func,
        engine.name(),
        len,
        span.begin,
        span.count
    );

    Ok(Outcome {
        values: Series::trimmed(Storage::Borrowed(data), span.count),
        begin: span.begin,
        count: span.count,
    })
}

/// Lookback of `func` for validated `params`.
pub fn lookback<E: Engine + ?Sized>(engine: &E, func: Func, params: &[ParamValue]) -> Result<usize> {
    params::validate(func, params)?;
    engine
        .lookback(func, params)
        .map_err(|code| AdapterError::Engine { func, code })
}

/// Moves the next output out of `iter` as a series of `T`.
pub(crate) fn take_series<'o, T: Sample>(
    iter: &mut impl Iterator<Item = AnySeries<'o>>,
    func: Func,
    output: &'static str,
) -> Result<Series<'o, T>> {
    iter.next()
        .and_then(T::from_any)
        .ok_or(AdapterError::OutputKind {
            func,
            output,
            expected: T::KIND.label(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::OutputKind;
    use crate::series::Buffer;

    #[test]
    fn test_check_inputs_reports_the_offending_input() {
        let high = [1.0, 2.0, 3.0];
        let low = [1.0, 2.0];
        let close = [1.0, 2.0, 3.0];
        let err = check_inputs(Func::Atr, Func::Atr.info(), &[&high, &low, &close]).unwrap_err();
        assert!(matches!(
            err,
            AdapterError::LengthMismatch { input: "low", expected: 3, actual: 2, .. }
        ));
    }

    #[test]
    fn test_check_inputs_rejects_empty_and_wrong_arity() {
        assert!(matches!(
            check_inputs(Func::Sma, Func::Sma.info(), &[&[]]),
            Err(AdapterError::EmptyInput { .. })
        ));
        assert!(matches!(
            check_inputs(Func::Add, Func::Add.info(), &[&[1.0]]),
            Err(AdapterError::InputArity { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_check_span() {
        assert!(check_span(Func::Sma, Span { begin: 2, count: 3 }, 5).is_ok());
        assert!(check_span(Func::Sma, Span { begin: 5, count: 0 }, 5).is_ok());
        assert!(matches!(
            check_span(Func::Sma, Span { begin: 3, count: 3 }, 5),
            Err(AdapterError::EngineContract { begin: 3, count: 3, len: 5, .. })
        ));
        assert!(check_span(Func::Sma, Span { begin: usize::MAX, count: 2 }, 5).is_err());
    }

    #[test]
    fn test_prepare_outputs_checks_kind_and_size() {
        let mut small = [0.0; 2];
        let err = prepare_outputs(
            Func::Sma,
            Func::Sma.info(),
            vec![AnyBuffer::Real(Buffer::Reuse(&mut small))],
            5,
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            AdapterError::BufferTooSmall { required: 5, actual: 2, .. }
        ));

        let err = prepare_outputs(
            Func::Sma,
            Func::Sma.info(),
            vec![AnyBuffer::fresh(OutputKind::Integer)],
            5,
        )
        .err()
        .unwrap();
        assert!(matches!(err, AdapterError::OutputKind { output: "out_real", .. }));
    }
}
