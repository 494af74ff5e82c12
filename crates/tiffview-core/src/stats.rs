use crate::metadata::ChannelRange;

/// Per-channel min/max over an interleaved sample buffer.
///
/// `samples` holds `channels` values per pixel. NaN samples are skipped; a
/// channel without any comparable sample reports `0~0`.
pub fn channel_ranges<T>(samples: &[T], channels: usize) -> Vec<ChannelRange>
where
    T: Copy + Into<f64>,
{
    if channels == 0 {
        return Vec::new();
    }

    let mut bounds: Vec<Option<(f64, f64)>> = vec![None; channels];
    for pixel in samples.chunks_exact(channels) {
        for (bound, &sample) in bounds.iter_mut().zip(pixel) {
            let v: f64 = sample.into();
            if v.is_nan() {
                continue;
            }
            *bound = match *bound {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            };
        }
    }

    bounds
        .into_iter()
        .map(|b| {
            let (lo, hi) = b.unwrap_or((0.0, 0.0));
            ChannelRange::new(lo, hi)
        })
        .collect()
}
