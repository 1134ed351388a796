use crate::core::models::BuildProfile;
use crate::core::profile::PROFILE_TABLE;
use crate::utils::{BuildError, Result};
use std::io::{self, BufRead, Write};

/// Show the profile menu until a valid selector is entered.
///
/// Non-numeric and out-of-range answers call `on_invalid` and ask again.
/// A closed input stream is an error since no answer can ever arrive.
pub fn prompt_for_profile<R, W>(
    input: &mut R,
    output: &mut W,
    mut on_invalid: impl FnMut(),
) -> Result<BuildProfile>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "Compilation modes : ")?;
        writeln!(output)?;
        for entry in PROFILE_TABLE.iter() {
            writeln!(output, "\t{} - {}", entry.selector, entry.label)?;
        }
        write!(output, "\nEnter your choice: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(BuildError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a compilation mode was chosen",
            )));
        }

        let chosen = line
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|selector| BuildProfile::from_selector(selector).ok());

        match chosen {
            Some(profile) => return Ok(profile),
            None => on_invalid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accepts_first_valid_choice() {
        let mut input = Cursor::new("3\n");
        let mut output = Vec::new();
        let mut invalid = 0;

        let profile = prompt_for_profile(&mut input, &mut output, || invalid += 1).unwrap();

        assert_eq!(profile, BuildProfile::GlobAndAstro);
        assert_eq!(invalid, 0);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("\t1 - Basic GlobWeb only"));
        assert!(shown.contains("\t4 - Basic and experimental GlobWeb + AstroWeb"));
        assert!(shown.contains("Enter your choice: "));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let mut input = Cursor::new("abc\n7\n0\n  2  \n1\n");
        let mut output = Vec::new();
        let mut invalid = 0;

        let profile = prompt_for_profile(&mut input, &mut output, || invalid += 1).unwrap();

        assert_eq!(profile, BuildProfile::AstroOnly);
        assert_eq!(invalid, 3);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Enter your choice: ").count(), 4);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = Cursor::new("9\n");
        let mut output = Vec::new();

        let err = prompt_for_profile(&mut input, &mut output, || {}).unwrap_err();
        assert!(matches!(err, BuildError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
