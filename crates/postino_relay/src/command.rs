//! Redemption command parsing.

/// Extract the argument of a `/start` command.
///
/// The command text is split on whitespace; the first token is the command
/// name, the second is the argument. Absence of an argument is not an error,
/// it signals "show the welcome output" rather than a lookup.
///
/// # Examples
///
/// ```
/// use postino_relay::start_argument;
///
/// assert_eq!(start_argument("/start 8842"), Some("8842"));
/// assert_eq!(start_argument("/start"), None);
/// assert_eq!(start_argument("/start   8842"), Some("8842"));
/// ```
pub fn start_argument(text: &str) -> Option<&str> {
    let mut parts = text.split_whitespace();
    let _command = parts.next()?;
    parts.next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_token_is_the_argument() {
        assert_eq!(start_argument("/start 8842"), Some("8842"));
    }

    #[test]
    fn bare_command_has_no_argument() {
        assert_eq!(start_argument("/start"), None);
        assert_eq!(start_argument("/start   "), None);
    }

    #[test]
    fn empty_text_has_no_argument() {
        assert_eq!(start_argument(""), None);
    }

    #[test]
    fn extra_whitespace_is_tolerated() {
        assert_eq!(start_argument("  /start \t 17 "), Some("17"));
    }
}
