//! Peak search over a 1D magnitude signal.

/// Indices of the local peaks of `signal` whose value exceeds `threshold`.
///
/// A plateau peak is reported at its middle sample.
pub(crate) fn search_local_max(signal: &[i32], threshold: i32) -> Vec<usize> {
    let n = signal.len();
    let mut peaks = Vec::new();
    if n < 2 {
        return peaks;
    }
    let mut offset = 0;
    let mut up = true;
    while offset < n - 1 && signal[offset] == signal[0] {
        if signal[offset] < signal[offset + 1] {
            up = true;
            break;
        }
        if signal[offset] > signal[offset + 1] {
            up = false;
            break;
        }
        offset += 1;
    }
    for i in offset..n - 1 {
        if up {
            if signal[i + 1] < signal[i] {
                up = false;
                let mut k = i;
                while k > 0 && signal[k - 1] == signal[i] {
                    k -= 1;
                }
                let mid = k + (i - k) / 2;
                if signal[mid] > threshold {
                    peaks.push(mid);
                }
            }
        } else if signal[i + 1] > signal[i] {
            up = true;
        }
    }
    peaks
}

/// Drops peaks that do not rise at least `resolution` above the valley
/// separating them from a higher neighbour, scanning ponds left to right.
pub(crate) fn keep_contrasted_max(peaks: &mut Vec<usize>, signal: &[i32], resolution: i32) {
    let n = peaks.len();
    if n <= 1 {
        return;
    }
    let mut valley: Vec<i32> = (0..n - 1)
        .map(|i| {
            signal[peaks[i]..peaks[i + 1]]
                .iter()
                .copied()
                .min()
                .unwrap_or(signal[peaks[i]])
        })
        .collect();
    let mut fired = vec![false; n];
    let mut sleft = 0;
    for i in 0..n - 1 {
        if signal[peaks[i + 1]] < signal[peaks[sleft]] {
            if signal[peaks[i + 1]] - valley[i] < resolution {
                fired[i + 1] = true;
                if i < n - 2 && valley[i + 1] < valley[i] {
                    valley[i + 1] = valley[i];
                }
            }
        } else if signal[peaks[sleft]] - valley[i] < resolution {
            fired[sleft] = true;
            sleft = i + 1;
        }
    }
    let mut idx = 0;
    peaks.retain(|_| {
        let keep = !fired[idx];
        idx += 1;
        keep
    });
}

/// Stable sort of `peaks` by decreasing signal value.
pub(crate) fn sort_by_magnitude(peaks: &mut [usize], signal: &[i32]) {
    peaks.sort_by(|&a, &b| signal[b].cmp(&signal[a]));
}
