//! Terminal rendering of answers, failures and blocked submissions

use std::io::Write;

pub const ANSWER_HEADING: &str = "### Answer";
pub const RETRY_HINT: &str = "Please verify your API key and try again.";

/// Write the answer text verbatim under the heading
pub fn show_answer<W: Write>(
  out: &mut W
, response: &crate::request::Response
) -> std::io::Result<()>
{   writeln!(out, "{}", ANSWER_HEADING)?;
    writeln!(out)?;
    out.write_all(response.text.as_bytes())?;
    writeln!(out)?;
    out.flush()
}

pub fn show_failure<W: Write>(
  out: &mut W
, error: &crate::error::Error
) -> std::io::Result<()>
{   writeln!(out, "An error occurred: {}", error)?;
    writeln!(out, "{}", RETRY_HINT)?;
    out.flush()
}

pub fn show_blocked<W: Write>(
  out: &mut W
, blocked: &crate::compose::Blocked
) -> std::io::Result<()>
{   writeln!(out, "{}", blocked.message())?;
    out.flush()
}
