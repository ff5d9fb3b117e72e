//! Fixed-window rolling statistics over undefined-aware columns.
//!
//! Every window is summed directly from its own elements. A window yields a
//! value only when all of its entries are defined; otherwise the output at
//! that position is [`Value::Undefined`].

use finstat_types::Value;

/// Rolling arithmetic mean over `window` entries.
///
/// Output at index `i` is defined iff `i >= window - 1` and
/// `values[i + 1 - window..=i]` are all defined.
#[must_use]
pub fn rolling_mean(values: &[Value], window: usize) -> Vec<Value> {
    rolling(values, window, mean)
}

/// Rolling sample standard deviation (divisor `window - 1`).
///
/// Windows shorter than 2 have no sample deviation and return all undefined.
#[must_use]
pub fn rolling_std(values: &[Value], window: usize) -> Vec<Value> {
    if window < 2 {
        return vec![Value::Undefined; values.len()];
    }
    rolling(values, window, sample_std)
}

fn rolling(values: &[Value], window: usize, stat: impl Fn(&[f64]) -> f64) -> Vec<Value> {
    let mut result = vec![Value::Undefined; values.len()];
    if window == 0 || values.len() < window {
        return result;
    }

    let mut buf = Vec::with_capacity(window);
    for end in (window - 1)..values.len() {
        buf.clear();
        buf.extend(values[end + 1 - window..=end].iter().map_while(|v| v.get()));
        if buf.len() == window {
            result[end] = Value::new(stat(&buf));
        }
    }

    result
}

// Flat windows are answered exactly.
fn is_flat(window: &[f64]) -> bool {
    window.iter().all(|&x| x == window[0])
}

fn mean(window: &[f64]) -> f64 {
    if is_flat(window) {
        return window[0];
    }
    window.iter().sum::<f64>() / window.len() as f64
}

fn sample_std(window: &[f64]) -> f64 {
    if is_flat(window) {
        return 0.0;
    }
    let m = mean(window);
    let ss: f64 = window.iter().map(|x| (x - m).powi(2)).sum();
    (ss / (window.len() - 1) as f64).sqrt()
}

/// Wraps plain floats as defined values.
pub(crate) fn defined(values: &[f64]) -> Vec<Value> {
    values.iter().copied().map(Value::new).collect()
}
