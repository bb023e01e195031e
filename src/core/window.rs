use std::ops::Range;

const PADDING_RATIO: f64 = 0.06;
const MIN_SPAN: f64 = 1.0;

/// Axis window around `[min, max]` with a little headroom on both sides.
pub fn padded_range(min: f64, max: f64) -> Range<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let raw_span = hi - lo;

    if raw_span < MIN_SPAN {
        let center = (lo + hi) * 0.5;
        return (center - MIN_SPAN * 0.5)..(center + MIN_SPAN * 0.5);
    }

    let pad = raw_span * PADDING_RATIO;
    (lo - pad)..(hi + pad)
}

/// Time axis: starts at zero and never pads into negative time.
pub fn time_range(last_time_s: f64) -> Range<f64> {
    let span = last_time_s.max(0.0);
    0.0..(span + span * PADDING_RATIO).max(MIN_SPAN * 0.1)
}

pub fn min_max<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
