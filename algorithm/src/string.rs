/// Remove one enclosing pair of quote characters: when both the first and the last characters of
/// `s` belong to `quotes` they are dropped (they don't have to be the same character).
///
/// A string made of a single quote character becomes empty.
pub fn strip_enclosing<'a>(s: &'a str, quotes: &[char]) -> &'a str {
    let mut chars = s.chars();
    let first = match chars.next() {
        None => return s,
        Some(c) => c
    };

    if !quotes.contains(&first) {
        return s;
    }

    match chars.next_back() {
        None => "",
        Some(last) => {
            if quotes.contains(&last) {
                &s[first.len_utf8()..s.len() - last.len_utf8()]
            } else {
                s
            }
        }
    }
}

/// Lowercase `s` and split it on unicode whitespace
pub fn lowercase_tokens(s: &str) -> Vec<String> {
    s.to_lowercase().split_whitespace().map(|t| t.to_owned()).collect()
}

/// Shift-tolerant alignment ratio between two sequences.
///
/// `seq2` is slid along `seq1` (every shift in `[1 - n1, n2 - 1]`). At each shift the overlapping
/// windows are compared, and when they are identical their length is a candidate run. With `m` the
/// longest run, the ratio is `m / (n1 + n2 - m)`. Two empty sequences have a ratio of 0.
///
/// ```
/// extern crate algorithm;
/// use algorithm::string::aligned_overlap_ratio;
///
/// assert_eq!(aligned_overlap_ratio(&["a", "b", "c"], &["b", "c", "d"]), 0.5);
/// ```
pub fn aligned_overlap_ratio<T: PartialEq>(seq1: &[T], seq2: &[T]) -> f64 {
    let n1 = seq1.len() as i64;
    let n2 = seq2.len() as i64;
    let mut best = 0;

    for shift in (1 - n1)..n2 {
        let sub1 = &seq1[(-shift).max(0) as usize..];
        let sub2 = &seq2[shift.max(0) as usize..];
        let m = sub1.len().min(sub2.len());
        if m > best && sub1[..m] == sub2[..m] {
            best = m;
        }
    }

    let union = seq1.len() + seq2.len() - best;
    if union == 0 {
        return 0.0;
    }

    best as f64 / union as f64
}
