//! POSIX shell quoting.

/// Quote `arg` so a POSIX shell reads it back as one literal word.
///
/// Plain words (letters, digits and `+-./:@_,%=`) are returned unchanged;
/// anything else is wrapped in single quotes with embedded `'` written as
/// `'\''`.
pub fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "+-./:@_,%=".contains(c));

    if plain {
        return arg.to_string();
    }

    format!("'{}'", arg.replace('\'', r"'\''"))
}
