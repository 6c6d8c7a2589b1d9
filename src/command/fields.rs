use crate::errors::{Error, Result};

/// Extracts the values of `tags` from `input`, locating each tag by plain
/// substring search in the given fixed order. A value is the trimmed text
/// between one tag and the start of the next (or the end of input for the
/// last tag).
///
/// There is no quoting or escaping: a value that contains a later tag's
/// two-character marker shifts the scan, and inputs where the markers are out
/// of order are rejected outright. The first tag must occur exactly once in
/// the whole input.
pub fn extract_ordered<const N: usize>(input: &str, tags: &[&str; N]) -> Result<[String; N]> {
    let first = tags[0];
    if input.matches(first).count() > 1 {
        return Err(Error::parse(format!(
            "Field '{first}' may appear only once; multiple entries in one command are not allowed."
        )));
    }

    let mut positions = [0usize; N];
    for (slot, tag) in positions.iter_mut().zip(tags) {
        *slot = input
            .find(tag)
            .ok_or_else(|| Error::parse(format!("Missing required field '{tag}'.")))?;
    }

    let out_of_order = positions.windows(2).any(|w| w[1] <= w[0]);
    if out_of_order {
        return Err(Error::parse(format!(
            "Fields must appear in the order {}.",
            tags.join(" ")
        )));
    }

    let mut values = Vec::with_capacity(N);
    for i in 0..N {
        let start = positions[i] + tags[i].len();
        let end = if i + 1 < N { positions[i + 1] } else { input.len() };
        if end < start {
            return Err(Error::parse(format!(
                "Fields must appear in the order {}.",
                tags.join(" ")
            )));
        }
        values.push(input[start..end].trim().to_string());
    }

    values
        .try_into()
        .map_err(|_| Error::parse("Field extraction produced the wrong arity."))
}
