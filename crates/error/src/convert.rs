use crate::{ErrorCode, PgvsError};

impl From<serde_json::Error> for PgvsError {
    fn from(err: serde_json::Error) -> Self {
        PgvsError::new(ErrorCode::SerializationFailed, err.to_string())
    }
}

/// Closest option within edit distance 3, compared case-insensitively.
pub fn suggest<S: AsRef<str>>(target: &str, options: &[S]) -> Option<String> {
    let target = target.to_ascii_uppercase();
    let mut best_match: Option<&str> = None;
    let mut min_distance = usize::MAX;

    for option in options {
        let option = option.as_ref();
        let distance = levenshtein(&target, &option.to_ascii_uppercase());
        if distance < min_distance && distance <= 3 {
            min_distance = distance;
            best_match = Some(option);
        }
    }

    best_match.map(|s| s.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, val) in dp[0].iter_mut().enumerate() {
        *val = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = std::cmp::min(
                std::cmp::min(dp[i - 1][j] + 1, dp[i][j - 1] + 1),
                dp[i - 1][j - 1] + cost,
            );
        }
    }

    dp[a.len()][b.len()]
}
